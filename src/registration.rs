//! Tag registration workflow.
//!
//! Moves a tag through `unregistered -> pending -> confirmed`.
//! Registration is token-gated: a request writes a pending record and
//! emails a one-time confirmation link; only following the link sets
//! the owner.

use tracing::{info, warn};

use crate::db::{
    Database, NewConfirmationToken, NewRegistration, TagRecord, TagRepository, TokenRepository,
};
use crate::config::{MailConfig, SiteConfig};
use crate::mail::{templates, Mailer, OutgoingMail};
use crate::{tag, MojoError, Result};

/// How long a confirmation link stays valid.
const TOKEN_TTL_HOURS: i64 = 48;

/// Timestamp format used for the token expiry column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A registration request as received at the boundary.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Raw tag code (sanitized by the workflow).
    pub tag: String,
    /// Email to register the tag to.
    pub email: String,
    /// Optional display name.
    pub name: Option<String>,
}

/// Result of a successful registration request.
#[derive(Debug)]
pub struct RegistrationReceipt {
    /// The pending record that was written.
    pub record: TagRecord,
    /// Whether the confirmation mail went out. The record stands either
    /// way; a failed send only loses the notification.
    pub mail_sent: bool,
}

/// Outcome of following a confirmation link.
///
/// Deliberately not a `Result`: a confirmation link on a public,
/// unauthenticated URL must never surface an error, only redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Token was valid and the tag now has an owner.
    Confirmed,
    /// Unknown, expired, or already-used token (or a store failure).
    Invalid,
}

/// Service orchestrating validator, stores, and mailer for registration.
pub struct RegistrationService<'a> {
    db: &'a Database,
    mailer: &'a dyn Mailer,
    mail: &'a MailConfig,
    site: &'a SiteConfig,
}

impl<'a> RegistrationService<'a> {
    /// Create a new registration service.
    pub fn new(
        db: &'a Database,
        mailer: &'a dyn Mailer,
        mail: &'a MailConfig,
        site: &'a SiteConfig,
    ) -> Self {
        Self {
            db,
            mailer,
            mail,
            site,
        }
    }

    /// Request registration of a tag to an email address.
    ///
    /// Writes a pending record and sends the confirmation link. The
    /// store write happens first; a mail failure does not roll it back.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed tag or email
    /// - `Conflict` if the tag already has a confirmed owner
    /// - `Database` on store failure
    pub async fn request_registration(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt> {
        let code = tag::sanitize(&request.tag);
        if !tag::is_valid_tag(&code) {
            return Err(MojoError::Validation("Invalid tag format.".to_string()));
        }

        let email = request.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(MojoError::Validation("Invalid email address.".to_string()));
        }

        let tag_repo = TagRepository::new(self.db.pool());

        // Existence check and write are separate statements; two
        // concurrent requests for the same tag can both pass the check.
        // The pending upsert below is guarded so a confirmed owner is
        // never overwritten; for pending rows, last write wins.
        if let Some(existing) = tag_repo.get_by_tag(&code).await? {
            if existing.is_registered() {
                return Err(MojoError::Conflict(
                    "This tag is already registered.".to_string(),
                ));
            }
        }

        let record = tag_repo
            .upsert_pending(&NewRegistration {
                tag: code.clone(),
                email: email.to_string(),
                name: request.name.clone(),
            })
            .await?
            .ok_or_else(|| MojoError::Conflict("This tag is already registered.".to_string()))?;

        // One-time confirmation token
        let token = uuid::Uuid::new_v4().to_string();
        let expires_at = (chrono::Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS))
            .format(TIMESTAMP_FORMAT)
            .to_string();
        TokenRepository::new(self.db.pool())
            .create(&NewConfirmationToken {
                token: token.clone(),
                tag: code.clone(),
                email: email.to_string(),
                expires_at,
            })
            .await?;

        let confirm_url = format!("{}?token={}", self.site.confirm_url, token);
        let mail = OutgoingMail::new(
            &self.mail.register_from,
            email,
            templates::CONFIRM_SUBJECT,
            templates::confirmation_body(&confirm_url),
        );

        let mail_sent = match self.mailer.send(mail).await {
            Ok(()) => true,
            Err(e) => {
                warn!(tag = %code, error = %e, "Confirmation mail failed; pending record kept");
                false
            }
        };

        info!(tag = %code, mail_sent, "Registration requested");
        Ok(RegistrationReceipt { record, mail_sent })
    }

    /// Confirm a registration from an emailed token.
    ///
    /// Every failure path resolves to [`ConfirmOutcome::Invalid`]; the
    /// token is consumed atomically so a re-click cannot succeed twice.
    pub async fn confirm_registration(&self, token: &str) -> ConfirmOutcome {
        match self.try_confirm(token).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Confirmation failed; redirecting to invalid");
                ConfirmOutcome::Invalid
            }
        }
    }

    async fn try_confirm(&self, token: &str) -> Result<ConfirmOutcome> {
        if token.trim().is_empty() {
            return Ok(ConfirmOutcome::Invalid);
        }

        let consumed = match TokenRepository::new(self.db.pool()).consume(token).await? {
            Some(t) => t,
            None => return Ok(ConfirmOutcome::Invalid),
        };

        let tag_repo = TagRepository::new(self.db.pool());
        match tag_repo.confirm(&consumed.tag, &consumed.email).await? {
            Some(record) => {
                info!(tag = %record.tag, "Registration confirmed");
                Ok(ConfirmOutcome::Confirmed)
            }
            // Token outlived its tag record
            None => Ok(ConfirmOutcome::Invalid),
        }
    }

    /// Look up the confirmed owner email for a tag.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed tag
    /// - `NotFound` if the tag has no confirmed owner
    pub async fn lookup_owner(&self, raw_tag: &str) -> Result<String> {
        let code = tag::sanitize(raw_tag);
        if !tag::is_valid_tag(&code) {
            return Err(MojoError::Validation("Invalid tag format.".to_string()));
        }

        TagRepository::new(self.db.pool())
            .owner_email(&code)
            .await?
            .ok_or_else(|| MojoError::NotFound("tag".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MemoryMailer;

    fn configs() -> (MailConfig, SiteConfig) {
        (MailConfig::default(), SiteConfig::default())
    }

    fn request(tag: &str, email: &str) -> RegistrationRequest {
        RegistrationRequest {
            tag: tag.to_string(),
            email: email.to_string(),
            name: None,
        }
    }

    /// Extract the token from the confirmation link in the last sent mail.
    fn token_from_mail(mailer: &MemoryMailer) -> String {
        let sent = mailer.sent();
        let html = &sent.last().unwrap().html;
        let start = html.find("token=").unwrap() + "token=".len();
        let end = html[start..].find('"').unwrap() + start;
        html[start..end].to_string()
    }

    #[tokio::test]
    async fn test_request_registration_writes_pending_and_sends_mail() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        let receipt = service
            .request_registration(&request("moj-xb2-c9d", "a@b.com"))
            .await
            .unwrap();

        assert_eq!(receipt.record.tag, "MOJ-XB2-C9D");
        assert_eq!(receipt.record.status, "pending");
        assert!(receipt.mail_sent);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
        assert_eq!(sent[0].subject, templates::CONFIRM_SUBJECT);
        assert!(sent[0].html.contains("token="));
    }

    #[tokio::test]
    async fn test_request_registration_invalid_tag() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        let result = service
            .request_registration(&request("MOJ-AB-C9D", "a@b.com"))
            .await;

        assert!(matches!(result, Err(MojoError::Validation(_))));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_request_registration_invalid_email() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        let result = service
            .request_registration(&request("MOJ-AB2-C9D", "not-an-email"))
            .await;

        assert!(matches!(result, Err(MojoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_reregistering_confirmed_tag_conflicts() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        service
            .request_registration(&request("MOJ-AB2-C9D", "a@b.com"))
            .await
            .unwrap();
        let token = token_from_mail(&mailer);
        assert_eq!(
            service.confirm_registration(&token).await,
            ConfirmOutcome::Confirmed
        );

        // Same tag, different email
        let result = service
            .request_registration(&request("MOJ-AB2-C9D", "other@b.com"))
            .await;
        assert!(matches!(result, Err(MojoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_pending_tag_can_be_rerequested() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        service
            .request_registration(&request("MOJ-AB2-C9D", "first@b.com"))
            .await
            .unwrap();
        let receipt = service
            .request_registration(&request("MOJ-AB2-C9D", "second@b.com"))
            .await
            .unwrap();

        // Last write wins while the tag is unconfirmed
        assert_eq!(receipt.record.email, "second@b.com");
        assert_eq!(mailer.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_mail_failure_keeps_pending_record() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        mailer.set_fail(true);
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        let receipt = service
            .request_registration(&request("MOJ-AB2-C9D", "a@b.com"))
            .await
            .unwrap();

        assert!(!receipt.mail_sent);
        // The pending record survived the mail failure
        let stored = TagRepository::new(db.pool())
            .get_by_tag("MOJ-AB2-C9D")
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn test_confirm_sets_owner() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        service
            .request_registration(&request("MOJ-AB2-C9D", "a@b.com"))
            .await
            .unwrap();
        let token = token_from_mail(&mailer);

        assert_eq!(
            service.confirm_registration(&token).await,
            ConfirmOutcome::Confirmed
        );
        assert_eq!(
            service.lookup_owner("MOJ-AB2-C9D").await.unwrap(),
            "a@b.com"
        );
    }

    #[tokio::test]
    async fn test_confirm_token_single_use() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        service
            .request_registration(&request("MOJ-AB2-C9D", "a@b.com"))
            .await
            .unwrap();
        let token = token_from_mail(&mailer);

        assert_eq!(
            service.confirm_registration(&token).await,
            ConfirmOutcome::Confirmed
        );
        // Re-click resolves to invalid, never success
        assert_eq!(
            service.confirm_registration(&token).await,
            ConfirmOutcome::Invalid
        );
    }

    #[tokio::test]
    async fn test_stale_token_cannot_replace_owner() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        // Two requests while the tag is still pending issue two live tokens
        service
            .request_registration(&request("MOJ-AB2-C9D", "first@b.com"))
            .await
            .unwrap();
        let first_token = token_from_mail(&mailer);
        service
            .request_registration(&request("MOJ-AB2-C9D", "second@b.com"))
            .await
            .unwrap();
        let second_token = token_from_mail(&mailer);

        assert_eq!(
            service.confirm_registration(&first_token).await,
            ConfirmOutcome::Confirmed
        );

        // The leftover token from the other request must not hand the
        // confirmed tag to a different owner
        assert_eq!(
            service.confirm_registration(&second_token).await,
            ConfirmOutcome::Invalid
        );
        assert_eq!(
            service.lookup_owner("MOJ-AB2-C9D").await.unwrap(),
            "first@b.com"
        );
    }

    #[tokio::test]
    async fn test_confirm_unknown_or_empty_token() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        assert_eq!(
            service.confirm_registration("no-such-token").await,
            ConfirmOutcome::Invalid
        );
        assert_eq!(
            service.confirm_registration("").await,
            ConfirmOutcome::Invalid
        );
    }

    #[tokio::test]
    async fn test_lookup_owner_errors() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        assert!(matches!(
            service.lookup_owner("bogus").await,
            Err(MojoError::Validation(_))
        ));
        assert!(matches!(
            service.lookup_owner("MOJ-AB2-C9D").await,
            Err(MojoError::NotFound(_))
        ));

        // A pending tag is still "not registered"
        service
            .request_registration(&request("MOJ-AB2-C9D", "a@b.com"))
            .await
            .unwrap();
        assert!(matches!(
            service.lookup_owner("MOJ-AB2-C9D").await,
            Err(MojoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_owner_sanitizes_input() {
        let db = Database::open_in_memory().await.unwrap();
        let mailer = MemoryMailer::new();
        let (mail, site) = configs();
        let service = RegistrationService::new(&db, &mailer, &mail, &site);

        service
            .request_registration(&request("MOJ-ABO-CID", "a@b.com"))
            .await
            .unwrap();
        let token = token_from_mail(&mailer);
        service.confirm_registration(&token).await;

        // 0 -> O, 1 -> I, lowercase accepted
        assert_eq!(
            service.lookup_owner("moj-ab0-c1d").await.unwrap(),
            "a@b.com"
        );
    }
}
