//! Confirmation token repository.
//!
//! Tokens prove control of the email address given at registration.
//! Each token resolves to exactly one (tag, email) pair and is consumed
//! at most once: consumption is a single DELETE ... RETURNING, so a
//! second use of the same token never succeeds.

use super::DbPool;
use crate::Result;

/// One-time confirmation token entity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConfirmationToken {
    /// Row ID.
    pub id: i64,
    /// Token string.
    pub token: String,
    /// Tag code the token confirms.
    pub tag: String,
    /// Email the token was sent to.
    pub email: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Expiration timestamp.
    pub expires_at: String,
}

/// New confirmation token for creation.
pub struct NewConfirmationToken {
    /// Token string.
    pub token: String,
    /// Tag code.
    pub tag: String,
    /// Email the confirmation was sent to.
    pub email: String,
    /// Expiration timestamp.
    pub expires_at: String,
}

/// Repository for confirmation token operations.
pub struct TokenRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new confirmation token.
    pub async fn create(&self, new_token: &NewConfirmationToken) -> Result<ConfirmationToken> {
        let token = sqlx::query_as::<_, ConfirmationToken>(
            "INSERT INTO confirmation_tokens (token, tag, email, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, token, tag, email, created_at, expires_at",
        )
        .bind(&new_token.token)
        .bind(&new_token.tag)
        .bind(&new_token.email)
        .bind(&new_token.expires_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(token)
    }

    /// Consume a token atomically: delete it and return its contents.
    ///
    /// Returns None for an unknown, already-consumed, or expired token.
    pub async fn consume(&self, token: &str) -> Result<Option<ConfirmationToken>> {
        let consumed = sqlx::query_as::<_, ConfirmationToken>(
            "DELETE FROM confirmation_tokens
             WHERE token = $1 AND expires_at > datetime('now')
             RETURNING id, token, tag, email, created_at, expires_at",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(consumed)
    }

    /// Delete expired tokens (cleanup).
    pub async fn cleanup(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM confirmation_tokens WHERE expires_at < datetime('now')")
            .execute(self.pool)
            .await
            .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
