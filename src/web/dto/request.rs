//! Request DTOs for the Web API.
//!
//! Tag format and email shape are checked by the workflows themselves
//! (after sanitization); the derives here only guard gross input such
//! as empty or absurdly long fields.

use serde::Deserialize;
use validator::Validate;

use super::validation::not_empty_trimmed;

/// Tag registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterTagRequest {
    /// Raw tag code as typed or scanned.
    #[validate(length(min = 1, max = 64, message = "Tag is required"))]
    pub tag: String,
    /// Email to register the tag to.
    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    #[validate(length(max = 128, message = "Name is too long"))]
    pub name: Option<String>,
}

/// Confirmation link query parameters.
#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    /// One-time token from the emailed link.
    #[serde(default)]
    pub token: Option<String>,
}

/// Message submission request.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitMessageRequest {
    /// Raw tag code.
    #[validate(length(min = 1, max = 64, message = "Tag ID is required"))]
    pub tag_id: String,
    /// Optional sender name.
    #[serde(default)]
    #[validate(length(max = 128, message = "Sender name is too long"))]
    pub sender_name: Option<String>,
    /// Optional sender email.
    #[serde(default)]
    #[validate(length(max = 254, message = "Sender email is too long"))]
    pub sender_email: Option<String>,
    /// Message body.
    #[validate(
        custom(function = "not_empty_trimmed"),
        length(max = 4000, message = "Message is too long")
    )]
    pub message: String,
    /// Optional free-form location.
    #[serde(default)]
    #[validate(length(max = 256, message = "Location is too long"))]
    pub location: Option<String>,
}

/// Contact form request.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactFormRequest {
    /// Sender name.
    #[validate(custom(function = "not_empty_trimmed"))]
    pub name: String,
    /// Sender email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Message body.
    #[validate(
        custom(function = "not_empty_trimmed"),
        length(max = 4000, message = "Message is too long")
    )]
    pub message: String,
}
