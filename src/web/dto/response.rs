//! Response DTOs for the Web API.

use serde::Serialize;

/// Registration request response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Always true on 200.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
    /// Set when the pending record was written but the confirmation
    /// mail could not be sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Tag owner lookup response.
#[derive(Debug, Serialize)]
pub struct TagOwnerResponse {
    /// Always true on 200.
    pub success: bool,
    /// Owner email.
    pub email: String,
}

/// Message submission response.
#[derive(Debug, Serialize)]
pub struct SubmitMessageResponse {
    /// Always true on 200.
    pub success: bool,
    /// Human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set when the message was saved but the owner notification failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Contact form response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Always true on 200.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
}
