use crate::db::DbPool;
use crate::error::Result;
use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Account row from the legacy `User` table. Column names stay French in
/// SQL; fields are aliased on the way out.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub user_id: i64,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Fields an update is allowed to touch. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.last_name.is_none()
            && self.first_name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.is_admin.is_none()
    }
}

const SELECT_ACCOUNT: &str = r#"
    SELECT
        userId AS user_id,
        nom AS last_name,
        prenom AS first_name,
        email,
        password AS password_hash,
        isAdmin AS is_admin
    FROM User
"#;

#[derive(Clone)]
pub struct AccountRepository {
    pool: DbPool,
}

impl AccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountRow>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{} WHERE email = ?", SELECT_ACCOUNT))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<AccountRow>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{} WHERE userId = ?", SELECT_ACCOUNT))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<AccountRow>> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!("{} ORDER BY userId", SELECT_ACCOUNT))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert(
        &self,
        last_name: Option<&str>,
        first_name: Option<&str>,
        email: &str,
        password_hash: &str,
    ) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO User (nom, prenom, email, password, isAdmin) VALUES (?, ?, ?, ?, 0)",
        )
        .bind(last_name)
        .bind(first_name)
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id() as i64)
    }

    pub async fn update(&self, user_id: i64, changes: &AccountChanges) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE User SET
                nom = COALESCE(?, nom),
                prenom = COALESCE(?, prenom),
                email = COALESCE(?, email),
                password = COALESCE(?, password),
                isAdmin = COALESCE(?, isAdmin)
            WHERE userId = ?
            "#,
        )
        .bind(changes.last_name.as_deref())
        .bind(changes.first_name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.is_admin)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns true when a row was removed.
    pub async fn delete(&self, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM User WHERE userId = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach a reset token to the account with this email in one statement.
    /// Returns true when the email matched a row (the token is fresh random
    /// data, so a matched row is always a changed row).
    pub async fn set_reset_token(
        &self,
        email: &str,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<bool> {
        let result =
            sqlx::query("UPDATE User SET reset_token = ?, reset_token_expiry = ? WHERE email = ?")
                .bind(token)
                .bind(expires_at)
                .bind(email)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the password and clear the token in one conditional UPDATE,
    /// guarded by token and expiry. Returns false when the token is unknown,
    /// already consumed, or expired.
    pub async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: NaiveDateTime,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE User
            SET password = ?, reset_token = NULL, reset_token_expiry = NULL
            WHERE reset_token = ? AND reset_token_expiry > ?
            "#,
        )
        .bind(password_hash)
        .bind(token)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
