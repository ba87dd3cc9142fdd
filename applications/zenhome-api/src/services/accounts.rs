use crate::api::models::account::{AccountResponse, RegisterRequest, UpdateAccountRequest};
use crate::auth::{generate_reset_token, hash_password, verify_password};
use crate::config::ResetConfig;
use crate::error::{AppError, Result};
use crate::mail::Mailer;
use crate::repositories::accounts::AccountChanges;
use crate::repositories::AccountRepository;
use chrono::{Duration, Utc};
use tracing::info;

/// One message for both unknown email and wrong password, so callers
/// cannot tell which one failed.
const LOGIN_FAILED: &str = "Invalid email or password";

/// One message whether or not the email exists, so callers cannot probe
/// for registered addresses.
const RESET_REQUESTED: &str =
    "If this email address exists, you will receive reset instructions shortly";

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.contains(' '),
        None => false,
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[derive(Clone)]
pub struct AccountService {
    repository: AccountRepository,
    mailer: Mailer,
    reset: ResetConfig,
}

impl AccountService {
    pub fn new(repository: AccountRepository, mailer: Mailer, reset: ResetConfig) -> Self {
        Self {
            repository,
            mailer,
            reset,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<i64> {
        let email = request.email.trim().to_string();
        if email.is_empty() || request.password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".into(),
            ));
        }
        if !is_valid_email(&email) {
            return Err(AppError::Validation("Invalid email format".into()));
        }
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "This email address is already in use".into(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let last_name = none_if_empty(request.last_name);
        let first_name = none_if_empty(request.first_name);

        let user_id = self
            .repository
            .insert(
                last_name.as_deref(),
                first_name.as_deref(),
                &email,
                &password_hash,
            )
            .await?;

        info!(user_id, "account registered");
        Ok(user_id)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AccountResponse> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Email and password are required".into(),
            ));
        }

        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Auth(LOGIN_FAILED.into()))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(AppError::Auth(LOGIN_FAILED.into()));
        }

        Ok(AccountResponse::from(account))
    }

    /// Enumeration-safe: the returned message is identical whether or not
    /// the email matched; only a matched row gets a token and a mail.
    pub async fn request_password_reset(&self, email: &str) -> Result<&'static str> {
        if email.is_empty() {
            return Err(AppError::Validation("Email is required".into()));
        }

        let token = generate_reset_token();
        let expires_at =
            Utc::now().naive_utc() + Duration::minutes(self.reset.token_ttl_minutes);

        let matched = self
            .repository
            .set_reset_token(email, &token, expires_at)
            .await?;

        if matched {
            let link = format!(
                "{}/reset-password?token={}",
                self.reset.link_base_url.trim_end_matches('/'),
                token
            );
            self.mailer.send_reset_link(email, &link).await?;
        }

        Ok(RESET_REQUESTED)
    }

    /// The guard on token and expiry lives inside one UPDATE, which makes
    /// the token single-use even under concurrent requests.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        if token.is_empty() || new_password.is_empty() {
            return Err(AppError::Validation(
                "Token and new password are required".into(),
            ));
        }

        let password_hash = hash_password(new_password)?;
        let consumed = self
            .repository
            .consume_reset_token(token, &password_hash, Utc::now().naive_utc())
            .await?;

        if !consumed {
            return Err(AppError::Auth("Invalid or expired token".into()));
        }

        Ok(())
    }

    pub async fn get(&self, user_id: i64) -> Result<AccountResponse> {
        self.repository
            .find_by_id(user_id)
            .await?
            .map(AccountResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("No user with id {}", user_id)))
    }

    pub async fn list(&self) -> Result<Vec<AccountResponse>> {
        let rows = self.repository.list().await?;
        Ok(rows.into_iter().map(AccountResponse::from).collect())
    }

    pub async fn update(&self, user_id: i64, request: UpdateAccountRequest) -> Result<()> {
        if let Some(email) = request.email.as_deref() {
            if !is_valid_email(email) {
                return Err(AppError::Validation("Invalid email format".into()));
            }
        }

        let mut changes = AccountChanges {
            last_name: none_if_empty(request.last_name),
            first_name: none_if_empty(request.first_name),
            email: request.email,
            password_hash: None,
            is_admin: request.is_admin,
        };
        if let Some(password) = request.password.as_deref() {
            if password.is_empty() {
                return Err(AppError::Validation("Password may not be empty".into()));
            }
            changes.password_hash = Some(hash_password(password)?);
        }
        if changes.is_empty() {
            return Err(AppError::Validation("No updatable fields provided".into()));
        }

        if self.repository.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("No user with id {}", user_id)));
        }
        self.repository.update(user_id, &changes).await
    }

    pub async fn delete(&self, user_id: i64) -> Result<()> {
        if !self.repository.delete(user_id).await? {
            return Err(AppError::NotFound(format!("No user with id {}", user_id)));
        }
        Ok(())
    }
}
