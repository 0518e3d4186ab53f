//! Message submission workflow.
//!
//! A third party leaves a message for a tag; the message is persisted
//! first and the owner notification is best-effort. Persist and notify
//! are explicit phases: phase 1 must succeed, a phase 2 failure
//! downgrades the result to success-with-warning.

use tracing::{info, warn};

use crate::config::MailConfig;
use crate::db::{Database, MessageRecord, MessageRepository, NewMessage, TagRepository};
use crate::mail::{templates, Mailer, OutgoingMail};
use crate::{tag, MojoError, Result};

/// A message submission as received at the boundary.
#[derive(Debug, Clone)]
pub struct MessageRequest {
    /// Raw tag code (sanitized by the workflow).
    pub tag_id: String,
    /// Optional sender name.
    pub sender_name: Option<String>,
    /// Optional sender email.
    pub sender_email: Option<String>,
    /// Message body.
    pub message: String,
    /// Optional free-form location.
    pub location: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug)]
pub struct MessageReceipt {
    /// The persisted message.
    pub record: MessageRecord,
    /// Whether the owner notification went out. The message is durably
    /// saved either way.
    pub notified: bool,
}

/// Service orchestrating validator, stores, and mailer for messages.
pub struct MessageService<'a> {
    db: &'a Database,
    mailer: &'a dyn Mailer,
    mail: &'a MailConfig,
}

impl<'a> MessageService<'a> {
    /// Create a new message service.
    pub fn new(db: &'a Database, mailer: &'a dyn Mailer, mail: &'a MailConfig) -> Self {
        Self { db, mailer, mail }
    }

    /// Submit a message for a tag.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed tag or an empty body
    /// - `NotFound` if the tag has no confirmed owner
    /// - `Database` if the message cannot be stored (the message is not
    ///   considered delivered in that case)
    pub async fn submit_message(&self, request: &MessageRequest) -> Result<MessageReceipt> {
        let code = tag::sanitize(&request.tag_id);
        if !tag::is_valid_tag(&code) {
            return Err(MojoError::Validation("Invalid tag format.".to_string()));
        }

        let body = request.message.trim();
        if body.is_empty() {
            return Err(MojoError::Validation("Message is required.".to_string()));
        }

        // A message is never accepted for an unregistered tag
        let owner_email = TagRepository::new(self.db.pool())
            .owner_email(&code)
            .await?
            .ok_or_else(|| MojoError::NotFound("tag".to_string()))?;

        // Phase 1: persist. A failure here is the hard failure.
        let record = MessageRepository::new(self.db.pool())
            .create(&NewMessage {
                tag_id: code.clone(),
                sender_name: request.sender_name.clone(),
                sender_email: request.sender_email.clone(),
                message: body.to_string(),
                location: request.location.clone(),
            })
            .await?;

        // Phase 2: notify. Best-effort once the message is durable.
        let mail = OutgoingMail::new(
            &self.mail.notify_from,
            &owner_email,
            templates::NOTIFY_SUBJECT,
            templates::notification_body(
                body,
                request.sender_name.as_deref(),
                request.location.as_deref(),
            ),
        );

        let notified = match self.mailer.send(mail).await {
            Ok(()) => true,
            Err(e) => {
                warn!(tag = %code, error = %e, "Owner notification failed; message saved");
                false
            }
        };

        info!(tag = %code, message_id = record.id, notified, "Message accepted");
        Ok(MessageReceipt { record, notified })
    }
}
