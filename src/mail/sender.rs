//! Mail sender implementations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use futures::future::BoxFuture;
use tracing::debug;

use crate::config::MailConfig;
use crate::{MojoError, Result};

use super::types::OutgoingMail;

/// Transactional mail delivery.
///
/// Implementations must not retry or queue: callers decide whether a
/// send failure is fatal for their workflow.
pub trait Mailer: Send + Sync {
    /// Send a single mail.
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<()>>;
}

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    /// Create a new Resend mailer from the mail configuration.
    pub fn new(config: &MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Mailer for ResendMailer {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            debug!(to = %mail.to, subject = %mail.subject, "Sending mail");

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&mail)
                .send()
                .await
                .map_err(|e| MojoError::Mail(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(MojoError::Mail(format!(
                    "provider returned {status}: {body}"
                )));
            }

            Ok(())
        })
    }
}

/// In-memory mailer for development and tests.
///
/// Records every sent mail and can be switched to fail on demand.
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: AtomicBool,
}

impl MemoryMailer {
    /// Create a new in-memory mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail (or succeed again).
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all mails sent so far.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            if self.fail.load(Ordering::SeqCst) {
                return Err(MojoError::Mail("memory mailer set to fail".to_string()));
            }
            self.sent.lock().unwrap().push(mail);
            Ok(())
        })
    }
}
