use serde::{Deserialize, Serialize};

/// Logged-in account, as returned by the backend (never carries a
/// password field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
    pub is_admin: bool,
}

impl Account {
    /// Name to greet the user with: first name when present, email
    /// otherwise.
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_first_name() {
        let account = Account {
            user_id: 1,
            last_name: Some("Lhote".into()),
            first_name: Some("Maximilien".into()),
            email: "max@example.com".into(),
            is_admin: false,
        };
        assert_eq!(account.display_name(), "Maximilien");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let account = Account {
            user_id: 1,
            last_name: None,
            first_name: None,
            email: "max@example.com".into(),
            is_admin: false,
        };
        assert_eq!(account.display_name(), "max@example.com");
    }
}
