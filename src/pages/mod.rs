//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page renders inside `DashboardLayout`, owns any route-scoped
//! orchestration, and delegates rendering details to `components`.

pub mod associations;
pub mod draw;
pub mod player_rankings;
