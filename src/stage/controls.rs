//! Stage controls hook: drag and touch handlers for the pannable stage.
//!
//! The handlers hold no state of their own. Cursor feedback goes to the drag
//! target's container and the final offset is handed to the injected setter,
//! so the consuming component stays the single owner of the stage position.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

/// Pan offset of the stage in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StagePosition {
    pub x: f64,
    pub y: f64,
}

impl StagePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value placing content at this offset.
    pub fn css_translate(self) -> String {
        format!("translate({:.1}px, {:.1}px)", self.x, self.y)
    }
}

/// Cursor affordance shown over the stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StageCursor {
    #[default]
    Grab,
    Grabbing,
}

impl StageCursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// The thing being dragged: reports where it ended up and styles its
/// container's cursor.
pub trait DragTarget {
    fn position(&self) -> StagePosition;
    fn set_container_cursor(&self, cursor: StageCursor);
}

/// A touch gesture whose browser default (scroll, navigation) can be cancelled.
pub trait TouchGesture {
    fn prevent_default(&self);
}

/// Handlers returned by [`use_stage_controls`].
#[derive(Clone, Copy)]
pub struct StageControls<F> {
    set_position: F,
}

impl<F: Fn(StagePosition)> StageControls<F> {
    pub fn on_drag_start(&self, target: &impl DragTarget) {
        target.set_container_cursor(StageCursor::Grabbing);
    }

    pub fn on_drag_end(&self, target: &impl DragTarget) {
        target.set_container_cursor(StageCursor::Grab);
        (self.set_position)(target.position());
    }

    pub fn on_touch_move(&self, gesture: &impl TouchGesture) {
        gesture.prevent_default();
    }
}

/// Build drag/touch handlers that commit positions through `set_position`.
pub fn use_stage_controls<F: Fn(StagePosition)>(set_position: F) -> StageControls<F> {
    StageControls { set_position }
}
