use crate::repositories::accounts::AccountRow;
use serde::{Deserialize, Serialize};

/// Account as it goes over the wire. There is deliberately no password
/// field on this type, so no handler can leak a hash by accident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub user_id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
    pub is_admin: bool,
}

impl From<AccountRow> for AccountResponse {
    fn from(row: AccountRow) -> Self {
        Self {
            user_id: row.user_id,
            last_name: row.last_name,
            first_name: row.first_name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_response_has_no_password_key() {
        let response = AccountResponse {
            user_id: 7,
            last_name: Some("Lhote".into()),
            first_name: None,
            email: "m@example.com".into(),
            is_admin: false,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"user_id\":7"));
    }

    #[test]
    fn test_register_request_tolerates_missing_names() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.fr","password":"pw"}"#).unwrap();
        assert_eq!(request.email, "a@b.fr");
        assert!(request.last_name.is_none());
        assert!(request.first_name.is_none());
    }

    #[test]
    fn test_update_request_is_fully_optional() {
        let request: UpdateAccountRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());
        assert!(request.password.is_none());
        assert!(request.is_admin.is_none());
    }
}
