//! Message repository.

use super::DbPool;
use crate::Result;

/// Message left for a tag by a third party. Immutable once stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageRecord {
    /// Row ID.
    pub id: i64,
    /// Tag code the message was left for.
    pub tag_id: String,
    /// Optional sender name.
    pub sender_name: Option<String>,
    /// Optional sender email.
    pub sender_email: Option<String>,
    /// Message body.
    pub message: String,
    /// Optional free-form location.
    pub location: Option<String>,
    /// Creation timestamp.
    pub created: String,
}

/// New message for creation.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Tag code (canonical, already sanitized).
    pub tag_id: String,
    /// Optional sender name.
    pub sender_name: Option<String>,
    /// Optional sender email.
    pub sender_email: Option<String>,
    /// Message body (trimmed, non-empty).
    pub message: String,
    /// Optional free-form location.
    pub location: Option<String>,
}

/// Repository for message operations.
pub struct MessageRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Persist a new message.
    pub async fn create(&self, new_message: &NewMessage) -> Result<MessageRecord> {
        let record = sqlx::query_as::<_, MessageRecord>(
            "INSERT INTO mojo_messages (tag_id, sender_name, sender_email, message, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, tag_id, sender_name, sender_email, message, location, created",
        )
        .bind(&new_message.tag_id)
        .bind(&new_message.sender_name)
        .bind(&new_message.sender_email)
        .bind(&new_message.message)
        .bind(&new_message.location)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List messages for a tag, most recent first.
    pub async fn list_for_tag(&self, tag_id: &str) -> Result<Vec<MessageRecord>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, tag_id, sender_name, sender_email, message, location, created
             FROM mojo_messages WHERE tag_id = $1
             ORDER BY created DESC, id DESC",
        )
        .bind(tag_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(records)
    }

    /// Count messages for a tag.
    pub async fn count_for_tag(&self, tag_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mojo_messages WHERE tag_id = $1")
            .bind(tag_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(count)
    }
}
