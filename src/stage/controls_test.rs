use std::cell::{Cell, RefCell};

use super::*;

struct FakeTarget {
    at: StagePosition,
    cursors: RefCell<Vec<StageCursor>>,
}

impl FakeTarget {
    fn at(x: f64, y: f64) -> Self {
        Self { at: StagePosition::new(x, y), cursors: RefCell::new(Vec::new()) }
    }

    fn last_cursor(&self) -> Option<StageCursor> {
        self.cursors.borrow().last().copied()
    }
}

impl DragTarget for FakeTarget {
    fn position(&self) -> StagePosition {
        self.at
    }

    fn set_container_cursor(&self, cursor: StageCursor) {
        self.cursors.borrow_mut().push(cursor);
    }
}

#[derive(Default)]
struct FakeTouch {
    prevented: Cell<u32>,
}

impl TouchGesture for FakeTouch {
    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

#[test]
fn drag_start_sets_grabbing_cursor_without_committing() {
    let commits = RefCell::new(Vec::new());
    let controls = use_stage_controls(|p| commits.borrow_mut().push(p));
    let target = FakeTarget::at(10.0, 20.0);

    controls.on_drag_start(&target);

    assert_eq!(target.last_cursor(), Some(StageCursor::Grabbing));
    assert!(commits.borrow().is_empty());
}

#[test]
fn drag_end_resets_cursor_and_commits_once() {
    let commits = RefCell::new(Vec::new());
    let controls = use_stage_controls(|p| commits.borrow_mut().push(p));
    let target = FakeTarget::at(-35.5, 120.0);

    controls.on_drag_start(&target);
    controls.on_drag_end(&target);

    assert_eq!(*target.cursors.borrow(), vec![StageCursor::Grabbing, StageCursor::Grab]);
    assert_eq!(*commits.borrow(), vec![StagePosition::new(-35.5, 120.0)]);
}

#[test]
fn touch_move_prevents_default_once() {
    let controls = use_stage_controls(|_| {});
    let touch = FakeTouch::default();

    controls.on_touch_move(&touch);

    assert_eq!(touch.prevented.get(), 1);
}

#[test]
fn cursor_css_values() {
    assert_eq!(StageCursor::Grab.as_css(), "grab");
    assert_eq!(StageCursor::Grabbing.as_css(), "grabbing");
}

#[test]
fn position_formats_css_translate() {
    assert_eq!(StagePosition::new(12.0, -4.3).css_translate(), "translate(12.0px, -4.3px)");
}
