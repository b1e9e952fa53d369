//! Stage size hook.
//!
//! `StageSizeObserver` owns the measured size and a window resize
//! subscription. It measures on activation, re-measures on every resize
//! event (no debouncing: one update per event, in delivery order), and drops
//! the subscription on deactivation or when it is dropped.

#[cfg(test)]
#[path = "size_test.rs"]
mod size_test;

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

pub const DEFAULT_STAGE_WIDTH: f64 = 800.0;
pub const DEFAULT_STAGE_HEIGHT: f64 = 600.0;

/// Observed pixel dimensions of the stage container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageSize {
    pub width: f64,
    pub height: f64,
}

impl StageSize {
    /// Negative or NaN inputs clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: clamp_dimension(width), height: clamp_dimension(height) }
    }
}

impl Default for StageSize {
    fn default() -> Self {
        Self { width: DEFAULT_STAGE_WIDTH, height: DEFAULT_STAGE_HEIGHT }
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// An element whose rendered box can be measured.
pub trait StageContainer {
    /// Current rendered size, or `None` while the element is not attached.
    fn measure(&self) -> Option<StageSize>;
}

/// Source of window resize notifications.
pub trait ResizeEvents {
    type Listener;

    /// Register `on_resize`; it runs once per delivered resize event.
    fn listen(&self, on_resize: Box<dyn Fn()>) -> Self::Listener;

    /// Remove a listener returned by [`ResizeEvents::listen`].
    fn unlisten(&self, listener: Self::Listener);
}

struct Measured<C> {
    container: C,
    size: Cell<StageSize>,
    on_change: Box<dyn Fn(StageSize)>,
}

impl<C: StageContainer> Measured<C> {
    fn remeasure(&self) {
        let Some(next) = self.container.measure() else {
            return;
        };
        self.size.set(next);
        (self.on_change)(next);
    }
}

/// Keeps a [`StageSize`] in sync with a container and window resizes.
pub struct StageSizeObserver<C: StageContainer + 'static, R: ResizeEvents> {
    measured: Rc<Measured<C>>,
    events: R,
    listener: Option<R::Listener>,
}

impl<C: StageContainer + 'static, R: ResizeEvents> StageSizeObserver<C, R> {
    /// `on_change` receives every successful measurement.
    pub fn new(container: C, events: R, on_change: impl Fn(StageSize) + 'static) -> Self {
        Self {
            measured: Rc::new(Measured {
                container,
                size: Cell::new(StageSize::default()),
                on_change: Box::new(on_change),
            }),
            events,
            listener: None,
        }
    }

    /// Last measured size, or the 800×600 default.
    pub fn size(&self) -> StageSize {
        self.measured.size.get()
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Measure now. Skipped while the container is detached.
    pub fn measure(&self) {
        self.measured.remeasure();
    }

    /// Measure and subscribe to resizes. Subscribes at most once.
    pub fn activate(&mut self) {
        self.measure();
        if self.listener.is_none() {
            let measured = Rc::clone(&self.measured);
            self.listener = Some(self.events.listen(Box::new(move || measured.remeasure())));
        }
    }

    /// Drop the resize subscription. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.events.unlisten(listener);
        }
    }
}

impl<C: StageContainer + 'static, R: ResizeEvents> Drop for StageSizeObserver<C, R> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Track the rendered size of `container`.
///
/// Reports 800×600 until the node mounts, then follows its box through
/// window resizes. The resize listener is released when the owning reactive
/// scope is cleaned up. On the server the default size is returned as-is.
pub fn use_stage_size(container: NodeRef<leptos::html::Div>) -> ReadSignal<StageSize> {
    let (size, set_size) = signal(StageSize::default());

    #[cfg(feature = "hydrate")]
    {
        use super::dom::WindowResize;

        let observer =
            StoredValue::new_local(StageSizeObserver::new(container, WindowResize, move |next| set_size.set(next)));
        Effect::new(move || {
            if container.get().is_some() {
                observer.update_value(StageSizeObserver::activate);
            }
        });
        on_cleanup(move || observer.update_value(StageSizeObserver::deactivate));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (container, set_size);
    }

    size
}
