//! Lead capture route.
//!
//! `POST /api/leads` takes `{email, website}`, stamps `created_at`, and
//! performs exactly one insert. Replies:
//! - `201 {"ok": true}` on success
//! - `422 {"code": "validation", ...}` when the body is malformed or blank;
//!   nothing is inserted
//! - `502 {"code": <backend code or null>, "message": ...}` when the insert fails

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use leads::{LeadAccepted, LeadFailure, LeadSubmission, VALIDATION_CODE};

use crate::services::leads::created_at_now;
use crate::state::AppState;

/// `POST /api/leads`
pub async fn submit_lead(
    State(state): State<AppState>,
    body: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response {
    let raw = match body {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "lead body rejected");
            let failure = LeadFailure { code: Some(VALIDATION_CODE.to_owned()), message: rejection.body_text() };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(failure)).into_response();
        }
    };
    let submission = match raw.validated() {
        Ok(sub) => sub,
        Err(err) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(LeadFailure::validation(err))).into_response();
        }
    };

    let created_at = match created_at_now() {
        Ok(stamp) => stamp,
        Err(e) => {
            tracing::error!(error = %e, "failed to format lead timestamp");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(LeadFailure::transport("timestamp unavailable")))
                .into_response();
        }
    };

    let lead = submission.into_new_lead(created_at);
    match state.leads.insert(&lead).await {
        Ok(()) => {
            tracing::info!(website = %lead.website, "lead captured");
            (StatusCode::CREATED, Json(LeadAccepted { ok: true })).into_response()
        }
        Err(e) => {
            let failure = e.to_failure();
            tracing::warn!(error = %e, code = failure.code.as_deref().unwrap_or("none"), "lead insert failed");
            (StatusCode::BAD_GATEWAY, Json(failure)).into_response()
        }
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
