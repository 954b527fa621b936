//! REST helper for the lead endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub that fails, since submission only happens in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`LeadFailure`]; the form maps it to a
//! user-facing message by code and never panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leads::{LeadFailure, LeadSubmission};

pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Turn a non-2xx response into a [`LeadFailure`].
///
/// The body is the server's JSON failure when it has one; anything else
/// (proxy pages, empty bodies) becomes a codeless failure.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_response(status: u16, body: &str) -> LeadFailure {
    serde_json::from_str::<LeadFailure>(body)
        .unwrap_or_else(|_| LeadFailure::transport(format!("lead request failed: {status}")))
}

/// Post one lead to `POST /api/leads`.
///
/// # Errors
///
/// Returns the server's failure body on a non-2xx response, or a codeless
/// transport failure if the request itself fails.
pub async fn submit_lead(submission: &LeadSubmission) -> Result<(), LeadFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LEADS_ENDPOINT)
            .json(submission)
            .map_err(|e| LeadFailure::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LeadFailure::transport(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(failure_from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(LeadFailure::transport("not available on server"))
    }
}
