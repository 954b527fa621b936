//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page talks to exactly one endpoint, `POST /api/leads`, through
//! `api`.

pub mod api;
