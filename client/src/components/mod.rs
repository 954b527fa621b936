//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each landing section is one component owning its local selection or form
//! state as `RwSignal`s. Shared chrome state (`UiState`) comes from context.

pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod live_pulse;
pub mod simulator_controls;
pub mod strategy_showcase;
pub mod the_machine;
pub mod tools_section;
pub mod track_record;
