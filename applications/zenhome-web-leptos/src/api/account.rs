use super::client::{ApiClient, ApiError};
use crate::models::{
    Account, ApiMessage, ForgotPasswordRequest, LoginRequest, RegisterRequest, RegisterResponse,
    ResetPasswordRequest,
};

impl ApiClient {
    pub async fn login(&self, email: String, password: String) -> Result<Account, ApiError> {
        self.post("/api/v1/auth/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post("/api/v1/auth/register", &request).await
    }

    pub async fn forgot_password(&self, email: String) -> Result<ApiMessage, ApiError> {
        self.post(
            "/api/v1/auth/forgot-password",
            &ForgotPasswordRequest { email },
        )
        .await
    }

    pub async fn reset_password(
        &self,
        token: String,
        password: String,
    ) -> Result<ApiMessage, ApiError> {
        self.post(
            "/api/v1/auth/reset-password",
            &ResetPasswordRequest { token, password },
        )
        .await
    }
}
