//! Contact form handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::contact::{ContactRequest, ContactService};
use crate::web::dto::{ContactFormRequest, ContactResponse, ValidatedJson};
use crate::web::error::ApiError;

use super::AppState;

/// POST /api/contact - Forward a contact form submission to the site inbox.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<ContactFormRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let service = ContactService::new(&state.db, state.mailer.as_ref(), &state.mail);

    service
        .submit_contact(&ContactRequest {
            name: req.name,
            email: req.email,
            message: req.message,
        })
        .await
        .map_err(|e| match e {
            crate::MojoError::Validation(msg) => ApiError::bad_request(msg),
            other => {
                tracing::error!("Contact form failed: {}", other);
                ApiError::internal("Failed to send message.")
            }
        })?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully.".to_string(),
    }))
}
