//! Static site copy and selection tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every interactive section on the landing page selects one record out of a
//! fixed table and renders its fields. Lookups are pure: the same key always
//! yields the same record, and unknown keys resolve to a documented fallback
//! (or `None` where the page shows a placeholder instead).

pub mod cases;
pub mod legal;
pub mod protocols;
pub mod pulse_events;
pub mod roadmap;
pub mod stack;
pub mod strategies;
