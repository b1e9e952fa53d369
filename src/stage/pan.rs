//! Pointer-drag bookkeeping for panning the stage.
//!
//! A gesture remembers which pointer started it, where, and the stage offset
//! at that moment; any later pointer location maps to `origin + delta`.

#[cfg(test)]
#[path = "pan_test.rs"]
mod pan_test;

use super::controls::StagePosition;
use super::size::StageSize;

/// Active pan between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pointer_id: i32,
    start_x: f64,
    start_y: f64,
    origin: StagePosition,
}

impl PanGesture {
    pub fn begin(pointer_id: i32, client_x: f64, client_y: f64, origin: StagePosition) -> Self {
        Self { pointer_id, start_x: client_x, start_y: client_y, origin }
    }

    /// Whether an event from `pointer_id` belongs to this gesture.
    pub fn tracks(&self, pointer_id: i32) -> bool {
        self.pointer_id == pointer_id
    }

    pub fn origin(&self) -> StagePosition {
        self.origin
    }

    /// Stage offset with the pointer at `(client_x, client_y)`.
    pub fn offset_at(&self, client_x: f64, client_y: f64) -> StagePosition {
        StagePosition::new(
            self.origin.x + (client_x - self.start_x),
            self.origin.y + (client_y - self.start_y),
        )
    }
}

/// Offset that centres content of `content_width × content_height` in the
/// stage. Content larger than the stage is pinned to the top-left instead.
pub fn centered_position(stage: StageSize, content_width: f64, content_height: f64) -> StagePosition {
    StagePosition::new(
        ((stage.width - content_width) * 0.5).max(0.0),
        ((stage.height - content_height) * 0.5).max(0.0),
    )
}
