//! Contact form workflow.
//!
//! Unlike message submission, the forwarded email is the success
//! criterion here: the database copy is a best-effort archive and a
//! store failure never blocks the visitor.

use tracing::{info, warn};

use crate::config::MailConfig;
use crate::db::{ContactRepository, Database, NewContactMessage};
use crate::mail::{templates, Mailer, OutgoingMail};
use crate::{MojoError, Result};

/// A contact form submission as received at the boundary.
#[derive(Debug, Clone)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email (used as Reply-To on the forward).
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Service forwarding contact form submissions to the site inbox.
pub struct ContactService<'a> {
    db: &'a Database,
    mailer: &'a dyn Mailer,
    mail: &'a MailConfig,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service.
    pub fn new(db: &'a Database, mailer: &'a dyn Mailer, mail: &'a MailConfig) -> Self {
        Self { db, mailer, mail }
    }

    /// Handle a contact form submission.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field is empty
    /// - `Mail` if the forward to the site inbox fails
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<()> {
        let name = request.name.trim();
        let email = request.email.trim();
        let message = request.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(MojoError::Validation(
                "All fields are required.".to_string(),
            ));
        }

        // Archive copy; a failure here must not block the visitor
        let stored = ContactRepository::new(self.db.pool())
            .create(&NewContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            })
            .await;
        if let Err(e) = stored {
            warn!(error = %e, "Failed to archive contact message; forwarding anyway");
        }

        let mail = OutgoingMail::new(
            &self.mail.contact_from,
            &self.mail.contact_inbox,
            templates::contact_subject(name),
            templates::contact_body(name, email, message),
        )
        .with_reply_to(email);

        self.mailer.send(mail).await?;

        info!(from = %email, "Contact message forwarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MemoryMailer;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_stores_and_forwards() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let mail = MailConfig::default();
        let service = ContactService::new(&db, &mailer, &mail);

        service
            .submit_contact(&request("Alice", "alice@example.com", "Hi team"))
            .await
            .unwrap();

        let archived = ContactRepository::new(db.pool()).list().await.unwrap();
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].name, "Alice");

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, mail.contact_inbox);
        assert_eq!(sent[0].reply_to.as_deref(), Some("alice@example.com"));
        assert_eq!(sent[0].subject, "New contact from Alice");
    }

    #[tokio::test]
    async fn test_contact_missing_fields() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let mail = MailConfig::default();
        let service = ContactService::new(&db, &mailer, &mail);

        for (name, email, message) in [
            ("", "a@b.com", "hello"),
            ("Alice", "", "hello"),
            ("Alice", "a@b.com", "   "),
        ] {
            let result = service.submit_contact(&request(name, email, message)).await;
            assert!(matches!(result, Err(MojoError::Validation(_))));
        }

        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_contact_send_failure_is_fatal() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        mailer.set_fail(true);
        let mail = MailConfig::default();
        let service = ContactService::new(&db, &mailer, &mail);

        let result = service
            .submit_contact(&request("Alice", "alice@example.com", "Hi"))
            .await;
        assert!(matches!(result, Err(MojoError::Mail(_))));

        // The archive copy was still written before the send
        let archived = ContactRepository::new(db.pool()).list().await.unwrap();
        assert_eq!(archived.len(), 1);
    }
}
