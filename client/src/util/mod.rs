//! Pure helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Calculators, formatting, Markdown rendering and the timer seam live here so
//! pages stay thin and everything numeric is testable natively.

pub mod format;
pub mod markdown;
pub mod roi;
pub mod simulator;
pub mod timer;
