//! Interactive stage hooks for the pannable draw surface.
//!
//! ARCHITECTURE
//! ============
//! `size` tracks the container's rendered dimensions, `controls` maps drag
//! and touch gestures onto cursor feedback and position commits, and `pan`
//! turns pointer deltas into offsets. Browser adapters live in `dom` and are
//! only compiled for the hydrate build; everything else is plain Rust behind
//! small capability traits so it can be exercised natively.

pub mod controls;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod pan;
pub mod size;

pub use controls::{DragTarget, StageControls, StageCursor, StagePosition, TouchGesture, use_stage_controls};
pub use pan::PanGesture;
pub use size::{ResizeEvents, StageContainer, StageSize, StageSizeObserver, use_stage_size};
