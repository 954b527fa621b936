//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` stacks the landing sections; `simulator` and `legal` are standalone
//! full-screen views with a link back to `/`.

pub mod home;
pub mod legal;
pub mod simulator;
