//! Shared lead-capture schema for the landing page audit form.
//!
//! This crate owns the JSON exchanged between the browser and `server`, the
//! input checks both sides apply before anything reaches the hosted table,
//! and the mapping from hosted-backend error codes to the sentence rendered
//! under the form.

use std::fmt;

use serde::{Deserialize, Serialize};


/// Postgres `undefined_table`, surfaced by the REST layer when `leads` is missing.
pub const MISSING_TABLE_CODE: &str = "42P01";
/// Postgres `insufficient_privilege`, surfaced when row-level security rejects the insert.
pub const PERMISSION_DENIED_CODE: &str = "42501";
/// Code used by `server` for requests rejected before the insert.
pub const VALIDATION_CODE: &str = "validation";

pub const MISSING_TABLE_MESSAGE: &str = "Error de configuración: La tabla 'leads' no existe.";
pub const PERMISSION_DENIED_MESSAGE: &str = "Error de permisos: RLS bloqueó la inserción.";
pub const VALIDATION_MESSAGE: &str = "Completa tu correo corporativo y el sitio web.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Error de conexión.";

// =============================================================================
// SUBMISSION
// =============================================================================

/// Body of `POST /api/leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub email: String,
    pub website: String,
}

impl LeadSubmission {
    /// Trim and check raw form input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when either field is blank or the email
    /// lacks a `local@domain` shape.
    pub fn new(email: &str, website: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        let website = website.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if website.is_empty() {
            return Err(ValidationError::MissingWebsite);
        }
        if !has_email_shape(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self { email: email.to_owned(), website: website.to_owned() })
    }

    /// Re-run [`LeadSubmission::new`] on a deserialized body.
    ///
    /// # Errors
    ///
    /// Same as [`LeadSubmission::new`].
    pub fn validated(self) -> Result<Self, ValidationError> {
        Self::new(&self.email, &self.website)
    }

    /// Attach the insert timestamp, producing the row written to the table.
    #[must_use]
    pub fn into_new_lead(self, created_at: String) -> NewLead {
        NewLead { email: self.email, website: self.website, created_at }
    }
}

/// Row inserted into the hosted `leads` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub email: String,
    pub website: String,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

/// Success body of `POST /api/leads`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadAccepted {
    pub ok: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    MissingEmail,
    #[error("website is required")]
    MissingWebsite,
    #[error("email must look like name@domain")]
    InvalidEmail,
}

/// Basic `local@domain.tld` check: one `@`, a non-empty local part, a dotted
/// domain with no empty labels, no whitespace.
#[must_use]
pub fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

// =============================================================================
// INPUT HINTS
// =============================================================================
// Cosmetic only: they drive check marks and the highlighted submit button,
// never whether a submit is allowed.

/// Check mark next to the email field.
#[must_use]
pub fn email_hint_ok(email: &str) -> bool {
    email.chars().count() > 5 && email.contains('@')
}

/// Check mark next to the website field.
#[must_use]
pub fn website_hint_ok(website: &str) -> bool {
    website.chars().count() > 3
}

/// Submit button switches to its highlighted style.
#[must_use]
pub fn form_looks_complete(email: &str, website: &str) -> bool {
    email.chars().count() > 3 && website.chars().count() > 3
}

// =============================================================================
// FAILURES
// =============================================================================

/// User-facing failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    MissingTable,
    PermissionDenied,
    Other,
}

impl FailureKind {
    /// Classify a backend error code. Unknown and absent codes are `Other`.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(MISSING_TABLE_CODE) => Self::MissingTable,
            Some(PERMISSION_DENIED_CODE) => Self::PermissionDenied,
            Some(VALIDATION_CODE) => Self::Validation,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Validation => VALIDATION_MESSAGE,
            Self::MissingTable => MISSING_TABLE_MESSAGE,
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE,
            Self::Other => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Error body of `POST /api/leads`, also used client-side for transport errors.
///
/// `message` carries the raw backend or transport text for logs; the form
/// renders [`LeadFailure::user_message`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFailure {
    pub code: Option<String>,
    pub message: String,
}

impl LeadFailure {
    #[must_use]
    pub fn backend(code: Option<String>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    #[must_use]
    pub fn validation(err: ValidationError) -> Self {
        Self { code: Some(VALIDATION_CODE.to_owned()), message: err.to_string() }
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        FailureKind::from_code(self.code.as_deref())
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl fmt::Display for LeadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for LeadFailure {}
