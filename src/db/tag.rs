//! Tag repository.

use super::DbPool;
use crate::Result;

/// Registration status of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    /// Registration requested, confirmation link not yet clicked.
    Pending,
    /// Owner confirmed via the emailed link.
    Confirmed,
}

impl TagStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagStatus::Pending => "pending",
            TagStatus::Confirmed => "confirmed",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TagStatus::Pending),
            "confirmed" => Some(TagStatus::Confirmed),
            _ => None,
        }
    }
}

/// Tag registration record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TagRecord {
    /// Row ID.
    pub id: i64,
    /// Canonical tag code.
    pub tag: String,
    /// Email that requested the registration.
    pub email: String,
    /// Optional display name given at registration.
    pub name: Option<String>,
    /// Registration status ('pending' or 'confirmed').
    pub status: String,
    /// Owner email, set on confirmation.
    pub owner_email: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Confirmation timestamp (None while pending).
    pub confirmed_at: Option<String>,
}

impl TagRecord {
    /// Get the status as enum.
    pub fn status(&self) -> Option<TagStatus> {
        TagStatus::from_str(&self.status)
    }

    /// Whether the tag has a confirmed owner.
    pub fn is_registered(&self) -> bool {
        self.owner_email.is_some()
    }
}

/// New registration request for creation.
pub struct NewRegistration {
    /// Canonical (sanitized) tag code.
    pub tag: String,
    /// Requesting email.
    pub email: String,
    /// Optional display name.
    pub name: Option<String>,
}

/// Repository for tag operations.
pub struct TagRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> TagRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get a tag record by its canonical code.
    pub async fn get_by_tag(&self, tag: &str) -> Result<Option<TagRecord>> {
        let record = sqlx::query_as::<_, TagRecord>(
            "SELECT id, tag, email, name, status, owner_email, created_at, confirmed_at
             FROM tags WHERE tag = $1",
        )
        .bind(tag)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(record)
    }

    /// Look up the confirmed owner email for a tag.
    pub async fn owner_email(&self, tag: &str) -> Result<Option<String>> {
        let email: Option<String> = sqlx::query_scalar(
            "SELECT owner_email FROM tags WHERE tag = $1 AND owner_email IS NOT NULL",
        )
        .bind(tag)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(email)
    }

    /// Create or refresh a pending registration.
    ///
    /// A repeated request for a still-pending tag overwrites the pending
    /// row (last write wins). A tag with a confirmed owner is never
    /// touched; in that case no row is returned.
    pub async fn upsert_pending(&self, new: &NewRegistration) -> Result<Option<TagRecord>> {
        let record = sqlx::query_as::<_, TagRecord>(
            "INSERT INTO tags (tag, email, name, status)
             VALUES ($1, $2, $3, 'pending')
             ON CONFLICT(tag) DO UPDATE
                SET email = excluded.email,
                    name = excluded.name,
                    created_at = datetime('now')
                WHERE tags.owner_email IS NULL
             RETURNING id, tag, email, name, status, owner_email, created_at, confirmed_at",
        )
        .bind(&new.tag)
        .bind(&new.email)
        .bind(&new.name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(record)
    }

    /// Confirm a pending registration, setting the owner.
    ///
    /// Guarded the same way as [`upsert_pending`](Self::upsert_pending):
    /// a tag that already has an owner is never touched, so a stale
    /// token from an earlier pending window cannot replace the owner.
    /// Returns None if no pending row exists for the tag.
    pub async fn confirm(&self, tag: &str, owner_email: &str) -> Result<Option<TagRecord>> {
        let record = sqlx::query_as::<_, TagRecord>(
            "UPDATE tags
             SET owner_email = $2,
                 status = 'confirmed',
                 confirmed_at = datetime('now')
             WHERE tag = $1 AND owner_email IS NULL
             RETURNING id, tag, email, name, status, owner_email, created_at, confirmed_at",
        )
        .bind(tag)
        .bind(owner_email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(record)
    }
}
