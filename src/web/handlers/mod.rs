//! API handlers for the Web API.

pub mod contact;
pub mod messages;
pub mod tags;

pub use contact::*;
pub use messages::*;
pub use tags::*;

use std::sync::Arc;

use crate::config::{MailConfig, SiteConfig};
use crate::mail::Mailer;
use crate::Database;

/// Application state shared across handlers.
///
/// All collaborators are constructed once at process start and injected
/// here; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (the pool inside is reference-counted).
    pub db: Database,
    /// Transactional mail sender.
    pub mailer: Arc<dyn Mailer>,
    /// Mail addresses and provider settings.
    pub mail: MailConfig,
    /// Site URLs for links and redirects.
    pub site: SiteConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, mailer: Arc<dyn Mailer>, mail: MailConfig, site: SiteConfig) -> Self {
        Self {
            db,
            mailer,
            mail,
            site,
        }
    }
}
