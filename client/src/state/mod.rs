//! Page-level state structs.
//!
//! ARCHITECTURE
//! ============
//! Each struct is plain data plus transition methods. Components own them as
//! `RwSignal<T>` and call the methods inside `update`, so every transition
//! is testable without a browser.

pub mod lead_form;
pub mod pulse;
pub mod simulator;
pub mod ui;
