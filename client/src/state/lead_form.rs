//! Lead capture form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The audit form collects a corporate email and a website, waits a fixed
//! beat, then posts once to `/api/leads`.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success ──"send another"──▶ Idle
//!                     │
//!                     └──err──▶ Error ──submit──▶ Loading
//! ```
//!
//! Invalid input never leaves the current state and never reaches the
//! network. A submit while `Loading` is ignored.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use std::future::Future;

use leads::{LeadFailure, LeadSubmission};

/// Artificial pause before the request goes out.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// User-facing message.
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub email: String,
    pub website: String,
    pub status: SubmitStatus,
}

impl LeadFormState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SubmitStatus::Loading
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    #[must_use]
    pub fn button_highlighted(&self) -> bool {
        leads::form_looks_complete(&self.email, &self.website)
    }

    #[must_use]
    pub fn email_check(&self) -> bool {
        leads::email_hint_ok(&self.email)
    }

    #[must_use]
    pub fn website_check(&self) -> bool {
        leads::website_hint_ok(&self.website)
    }

    /// Accept a submit: returns the payload and enters `Loading`, or `None`
    /// when busy or the input is invalid (state untouched).
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.is_loading() || self.status == SubmitStatus::Success {
            return None;
        }
        let submission = LeadSubmission::new(&self.email, &self.website).ok()?;
        self.status = SubmitStatus::Loading;
        Some(submission)
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Success clears both fields; failure keeps them for a retry.
    pub fn finish(&mut self, outcome: Result<(), LeadFailure>) {
        if !self.is_loading() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.email.clear();
                self.website.clear();
                self.status = SubmitStatus::Success;
            }
            Err(failure) => {
                self.status = SubmitStatus::Error(failure.user_message().to_owned());
            }
        }
    }

    /// "Send another request": `Success` back to `Idle`.
    pub fn reset(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Wait [`SUBMIT_DELAY_MS`] through `sleep`, then post once through `post`.
///
/// # Errors
///
/// Whatever `post` reports.
pub async fn deliver<Sleep, SleepFut, Post, PostFut>(
    submission: LeadSubmission,
    sleep: Sleep,
    post: Post,
) -> Result<(), LeadFailure>
where
    Sleep: FnOnce(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
    Post: FnOnce(LeadSubmission) -> PostFut,
    PostFut: Future<Output = Result<(), LeadFailure>>,
{
    sleep(SUBMIT_DELAY_MS).await;
    post(submission).await
}
