//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own external I/O so route handlers stay focused on
//! protocol translation.

pub mod leads;
