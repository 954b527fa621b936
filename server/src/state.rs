//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the lead store behind a trait object so route tests can run without
//! the hosted backend.

use std::sync::Arc;

use crate::services::leads::LeadStore;

/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<dyn LeadStore>,
}

impl AppState {
    #[must_use]
    pub fn new(leads: Arc<dyn LeadStore>) -> Self {
        Self { leads }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
