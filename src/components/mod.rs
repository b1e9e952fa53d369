//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (`dashboard_layout`, `sidebar`, `site_header`), shared
//! panels (`empty_state`), and the draw surface (`draw_stage`,
//! `draw_bracket`).

pub mod dashboard_layout;
pub mod draw_bracket;
pub mod draw_stage;
pub mod empty_state;
pub mod sidebar;
pub mod site_header;
