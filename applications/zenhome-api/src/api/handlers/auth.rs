use crate::api::models::account::{
    AccountResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    RegisterResponse, ResetPasswordRequest,
};
use crate::api::routes::AppState;
use crate::error::Result;
use axum::{extract::State, http::StatusCode, response::Json};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let user_id = state.accounts.register(payload).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AccountResponse>> {
    let account = state.accounts.login(&payload.email, &payload.password).await?;
    Ok(Json(account))
}

pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    let message = state
        .accounts
        .request_password_reset(payload.email.trim())
        .await?;
    Ok(Json(MessageResponse::new(message)))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .accounts
        .reset_password(payload.token.trim(), &payload.password)
        .await?;
    Ok(Json(MessageResponse::new(
        "Your password has been reset successfully",
    )))
}
