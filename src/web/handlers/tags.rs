//! Tag registration and lookup handlers.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::registration::{ConfirmOutcome, RegistrationRequest, RegistrationService};
use crate::web::dto::{ConfirmParams, RegisterTagRequest, TagOwnerResponse, ValidatedJson};
use crate::web::dto::RegisterResponse;
use crate::web::error::ApiError;

use super::AppState;

/// POST /api/register - Request registration of a tag.
pub async fn register_tag(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterTagRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let service =
        RegistrationService::new(&state.db, state.mailer.as_ref(), &state.mail, &state.site);

    let receipt = service
        .request_registration(&RegistrationRequest {
            tag: req.tag,
            email: req.email,
            name: req.name,
        })
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "Check your inbox to confirm your registration.".to_string(),
        warning: (!receipt.mail_sent)
            .then(|| "Registration saved, but the confirmation email failed to send.".to_string()),
    }))
}

/// GET /api/confirm - Confirm a registration from an emailed link.
///
/// Always redirects: to the confirmation page on success, to the
/// invalid page on any failure.
pub async fn confirm_registration(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConfirmParams>,
) -> Redirect {
    let service =
        RegistrationService::new(&state.db, state.mailer.as_ref(), &state.mail, &state.site);

    let outcome = match params.token {
        Some(token) => service.confirm_registration(&token).await,
        None => ConfirmOutcome::Invalid,
    };

    match outcome {
        ConfirmOutcome::Confirmed => Redirect::to(&state.site.confirm_page),
        ConfirmOutcome::Invalid => Redirect::to(&state.site.invalid_page),
    }
}

/// GET /api/tags/{tag} - Look up the owner email for a tag.
pub async fn tag_owner(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> Result<Json<TagOwnerResponse>, ApiError> {
    let service =
        RegistrationService::new(&state.db, state.mailer.as_ref(), &state.mail, &state.site);

    let email = service.lookup_owner(&tag).await?;

    Ok(Json(TagOwnerResponse {
        success: true,
        email,
    }))
}
