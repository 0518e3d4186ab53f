//! Transactional mail for Mojo.
//!
//! Mojo never delivers email itself: everything goes through an external
//! transactional provider behind the [`Mailer`] trait, so workflows can
//! be tested against an in-memory implementation.

mod sender;
pub mod templates;
mod types;

pub use sender::{Mailer, MemoryMailer, ResendMailer};
pub use types::OutgoingMail;
