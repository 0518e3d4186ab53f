//! Mojo - tag registration and message forwarding.
//!
//! Users register a printed Mojo tag against their email, confirm via an
//! emailed one-time link, and third parties can leave messages for a tag
//! that are stored and forwarded to the owner.

pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod logging;
pub mod mail;
pub mod messaging;
pub mod registration;
pub mod tag;
pub mod web;

pub use config::Config;
pub use contact::{ContactRequest, ContactService};
pub use db::{
    ContactRepository, Database, MessageRepository, TagRecord, TagRepository, TagStatus,
    TokenRepository,
};
pub use error::{MojoError, Result};
pub use mail::{Mailer, MemoryMailer, OutgoingMail, ResendMailer};
pub use messaging::{MessageReceipt, MessageRequest, MessageService};
pub use registration::{
    ConfirmOutcome, RegistrationReceipt, RegistrationRequest, RegistrationService,
};
pub use tag::{is_valid_tag, sanitize};
pub use web::{AppState, WebServer};
