//! Message submission handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::messaging::{MessageRequest, MessageService};
use crate::web::dto::{SubmitMessageRequest, SubmitMessageResponse, ValidatedJson};
use crate::web::error::ApiError;

use super::AppState;

/// POST /api/messages - Leave a message for a tag's owner.
pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<SubmitMessageRequest>,
) -> Result<Json<SubmitMessageResponse>, ApiError> {
    let service = MessageService::new(&state.db, state.mailer.as_ref(), &state.mail);

    let receipt = service
        .submit_message(&MessageRequest {
            tag_id: req.tag_id,
            sender_name: req.sender_name,
            sender_email: req.sender_email,
            message: req.message,
            location: req.location,
        })
        .await?;

    let response = if receipt.notified {
        SubmitMessageResponse {
            success: true,
            message: Some("Message sent and saved!".to_string()),
            warning: None,
        }
    } else {
        SubmitMessageResponse {
            success: true,
            message: None,
            warning: Some("Message saved, but email failed to send.".to_string()),
        }
    };

    Ok(Json(response))
}
