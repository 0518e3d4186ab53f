//! Contact form repository.

use super::DbPool;
use crate::Result;

/// Stored contact form submission.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactMessage {
    /// Row ID.
    pub id: i64,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Creation timestamp.
    pub created: String,
}

/// New contact submission for creation.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Repository for contact form submissions.
pub struct ContactRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Persist a contact form submission.
    pub async fn create(&self, new: &NewContactMessage) -> Result<ContactMessage> {
        let record = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, message, created",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .fetch_one(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List submissions, most recent first.
    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        let records = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, message, created
             FROM contact_messages ORDER BY created DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| crate::MojoError::Database(e.to_string()))?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_create_and_list() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = ContactRepository::new(db.pool());

        let record = repo
            .create(&NewContactMessage {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                message: "Love the product".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "alice@example.com");

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].message, "Love the product");
    }
}
