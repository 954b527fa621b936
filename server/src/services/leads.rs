//! Lead persistence against the hosted REST table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The audit form posts to `/api/leads`; the route validates and hands the
//! row to a [`LeadStore`]. Production uses [`SupabaseLeadStore`], which
//! inserts one row per call through the table's REST endpoint. Tests swap in
//! mocks through the trait.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are parsed as `{code, message, details, hint}`. The
//! `code` is kept verbatim so the browser can map it to a user message; the
//! rest is only logged.

use std::time::Duration;

use async_trait::async_trait;
use leads::{LeadFailure, NewLead};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::BackendConfig;

// =============================================================================
// TRAIT
// =============================================================================

/// Write side of the lead table.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Insert exactly one row.
    async fn insert(&self, lead: &NewLead) -> Result<(), LeadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("backend rejected insert (HTTP {status}): {message}")]
    Backend { status: u16, code: Option<String>, message: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),
}

impl LeadStoreError {
    /// Wire body returned to the browser.
    #[must_use]
    pub fn to_failure(&self) -> LeadFailure {
        match self {
            Self::Backend { code, message, .. } => LeadFailure::backend(code.clone(), message.clone()),
            Self::Request(message) | Self::HttpClientBuild(message) => LeadFailure::transport(message.clone()),
        }
    }
}

// =============================================================================
// SUPABASE
// =============================================================================

pub struct SupabaseLeadStore {
    http: reqwest::Client,
    endpoint: String,
    anon_key: String,
}

impl SupabaseLeadStore {
    /// Build the store with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LeadStoreError::HttpClientBuild`] if the HTTP client cannot
    /// be constructed.
    pub fn new(config: &BackendConfig) -> Result<Self, LeadStoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LeadStoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: table_endpoint(config), anon_key: config.anon_key.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadStore for SupabaseLeadStore {
    async fn insert(&self, lead: &NewLead) -> Result<(), LeadStoreError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[lead])
            .send()
            .await
            .map_err(|e| LeadStoreError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_error_body(status.as_u16(), &body))
    }
}

/// `{url}/rest/v1/{table}`.
#[must_use]
pub fn table_endpoint(config: &BackendConfig) -> String {
    format!("{}/rest/v1/{}", config.url.trim_end_matches('/'), config.table)
}

#[derive(serde::Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Turn a non-2xx response into [`LeadStoreError::Backend`].
///
/// Bodies that are not the REST error shape keep `code = None` and use the
/// raw text (or the status) as the message.
#[must_use]
pub fn parse_error_body(status: u16, body: &str) -> LeadStoreError {
    match serde_json::from_str::<RestErrorBody>(body) {
        Ok(parsed) => {
            if parsed.details.is_some() || parsed.hint.is_some() {
                tracing::debug!(
                    status,
                    details = parsed.details.as_deref().unwrap_or(""),
                    hint = parsed.hint.as_deref().unwrap_or(""),
                    "lead insert error detail"
                );
            }
            LeadStoreError::Backend {
                status,
                code: parsed.code.filter(|c| !c.is_empty()),
                message: parsed.message.unwrap_or_else(|| format!("HTTP {status}")),
            }
        }
        Err(_) => {
            let trimmed = body.trim();
            let message = if trimmed.is_empty() { format!("HTTP {status}") } else { trimmed.to_owned() };
            LeadStoreError::Backend { status, code: None, message }
        }
    }
}

/// Current UTC time as RFC 3339, used for `created_at`.
///
/// # Errors
///
/// Returns the formatter error; RFC 3339 formatting of a UTC timestamp only
/// fails for years outside 0..=9999.
pub fn created_at_now() -> Result<String, time::error::Format> {
    OffsetDateTime::now_utc().format(&Rfc3339)
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
