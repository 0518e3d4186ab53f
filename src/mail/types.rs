//! Mail types.

use serde::Serialize;

/// A single outgoing transactional email.
///
/// Serializes directly into the provider's send-email payload.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMail {
    /// Sender address (may include a display name).
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Reply-To address, if different from the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

impl OutgoingMail {
    /// Create a new outgoing mail.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            reply_to: None,
            subject: subject.into(),
            html: html.into(),
        }
    }

    /// Set the Reply-To address.
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }
}
