use crate::api::models::account::{AccountResponse, MessageResponse, UpdateAccountRequest};
use crate::api::routes::AppState;
use crate::error::{AppError, Result};
use axum::{
    extract::{Path, State},
    response::Json,
};

/// Ids arrive as strings and are parsed explicitly; a malformed id is a
/// 400, never a silent zero.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid id: {}", raw)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AccountResponse>>> {
    let accounts = state.accounts.list().await?;
    Ok(Json(accounts))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>> {
    let user_id = parse_id(&id)?;
    let account = state.accounts.get(user_id).await?;
    Ok(Json(account))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<Json<MessageResponse>> {
    let user_id = parse_id(&id)?;
    state.accounts.update(user_id, payload).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let user_id = parse_id(&id)?;
    state.accounts.delete(user_id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_numbers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("4x").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("1.5").is_err());
    }
}
