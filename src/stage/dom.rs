//! Browser adapters for the stage hooks.
//!
//! These bind the capability traits to `web_sys` and Leptos' window
//! listeners. Hydrate-only: none of this exists during SSR.

use leptos::prelude::*;

use super::controls::{DragTarget, StageCursor, StagePosition, TouchGesture};
use super::size::{ResizeEvents, StageContainer, StageSize};

/// Measures the mounted div's layout box (`offsetWidth` × `offsetHeight`).
impl StageContainer for NodeRef<leptos::html::Div> {
    fn measure(&self) -> Option<StageSize> {
        let element = self.get_untracked()?;
        Some(StageSize::new(f64::from(element.offset_width()), f64::from(element.offset_height())))
    }
}

/// `resize` events on `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowResize;

impl ResizeEvents for WindowResize {
    type Listener = WindowListenerHandle;

    fn listen(&self, on_resize: Box<dyn Fn()>) -> WindowListenerHandle {
        window_event_listener(leptos::ev::resize, move |_| on_resize())
    }

    fn unlisten(&self, listener: WindowListenerHandle) {
        listener.remove();
    }
}

impl TouchGesture for web_sys::TouchEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// A stage container being dragged, with the offset it has reached.
pub struct DomDragTarget<'a> {
    container: &'a web_sys::HtmlElement,
    position: StagePosition,
}

impl<'a> DomDragTarget<'a> {
    pub fn new(container: &'a web_sys::HtmlElement, position: StagePosition) -> Self {
        Self { container, position }
    }
}

impl DragTarget for DomDragTarget<'_> {
    fn position(&self) -> StagePosition {
        self.position
    }

    fn set_container_cursor(&self, cursor: StageCursor) {
        if let Err(err) = self.container.style().set_property("cursor", cursor.as_css()) {
            log::debug!("stage cursor not applied: {err:?}");
        }
    }
}
