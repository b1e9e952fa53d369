use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

/// Container whose box the test controls; `None` means detached.
#[derive(Clone, Default)]
struct FakeContainer {
    rendered: Rc<Cell<Option<StageSize>>>,
}

impl FakeContainer {
    fn attach(&self, width: f64, height: f64) {
        self.rendered.set(Some(StageSize::new(width, height)));
    }
}

impl StageContainer for FakeContainer {
    fn measure(&self) -> Option<StageSize> {
        self.rendered.get()
    }
}

/// Window stand-in: holds listeners in slots and fires them on demand.
#[derive(Clone, Default)]
struct FakeWindow {
    slots: Rc<RefCell<Vec<Option<Box<dyn Fn()>>>>>,
}

impl FakeWindow {
    fn live_listeners(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    fn resize(&self) {
        for slot in self.slots.borrow().iter().flatten() {
            slot();
        }
    }
}

impl ResizeEvents for FakeWindow {
    type Listener = usize;

    fn listen(&self, on_resize: Box<dyn Fn()>) -> usize {
        let mut slots = self.slots.borrow_mut();
        slots.push(Some(on_resize));
        slots.len() - 1
    }

    fn unlisten(&self, listener: usize) {
        self.slots.borrow_mut()[listener] = None;
    }
}

fn observer(
    container: &FakeContainer,
    window: &FakeWindow,
) -> (StageSizeObserver<FakeContainer, FakeWindow>, Rc<RefCell<Vec<StageSize>>>) {
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    let observer = StageSizeObserver::new(container.clone(), window.clone(), move |size| sink.borrow_mut().push(size));
    (observer, updates)
}

#[test]
fn default_size_is_800_by_600() {
    assert_eq!(StageSize::default(), StageSize { width: 800.0, height: 600.0 });
}

#[test]
fn stage_size_never_negative() {
    assert_eq!(StageSize::new(-5.0, f64::NAN), StageSize { width: 0.0, height: 0.0 });
}

#[test]
fn reports_default_before_activation() {
    let container = FakeContainer::default();
    container.attach(1024.0, 480.0);
    let (observer, updates) = observer(&container, &FakeWindow::default());

    assert_eq!(observer.size(), StageSize::default());
    assert!(updates.borrow().is_empty());
}

#[test]
fn activation_measures_attached_container() {
    let container = FakeContainer::default();
    container.attach(1024.0, 480.0);
    let window = FakeWindow::default();
    let (mut observer, updates) = observer(&container, &window);

    observer.activate();

    assert_eq!(observer.size(), StageSize::new(1024.0, 480.0));
    assert_eq!(*updates.borrow(), vec![StageSize::new(1024.0, 480.0)]);
    assert!(observer.is_active());
    assert_eq!(window.live_listeners(), 1);
}

#[test]
fn detached_container_is_skipped_silently() {
    let container = FakeContainer::default();
    let window = FakeWindow::default();
    let (mut observer, updates) = observer(&container, &window);

    observer.activate();
    window.resize();

    assert_eq!(observer.size(), StageSize::default());
    assert!(updates.borrow().is_empty());
}

#[test]
fn resize_event_remeasures_container() {
    let container = FakeContainer::default();
    container.attach(640.0, 480.0);
    let window = FakeWindow::default();
    let (mut observer, _) = observer(&container, &window);
    observer.activate();

    container.attach(1280.0, 720.0);
    window.resize();

    assert_eq!(observer.size(), StageSize::new(1280.0, 720.0));
}

#[test]
fn each_resize_event_produces_one_update() {
    let container = FakeContainer::default();
    container.attach(300.0, 200.0);
    let window = FakeWindow::default();
    let (mut observer, updates) = observer(&container, &window);
    observer.activate();

    window.resize();
    window.resize();
    window.resize();

    assert_eq!(updates.borrow().len(), 4);
    assert_eq!(observer.size(), StageSize::new(300.0, 200.0));
}

#[test]
fn repeated_activation_subscribes_once() {
    let container = FakeContainer::default();
    container.attach(300.0, 200.0);
    let window = FakeWindow::default();
    let (mut observer, _) = observer(&container, &window);

    observer.activate();
    observer.activate();

    assert_eq!(window.live_listeners(), 1);
}

#[test]
fn deactivation_removes_listener_and_stops_updates() {
    let container = FakeContainer::default();
    container.attach(300.0, 200.0);
    let window = FakeWindow::default();
    let (mut observer, updates) = observer(&container, &window);
    observer.activate();

    observer.deactivate();
    container.attach(900.0, 900.0);
    window.resize();

    assert!(!observer.is_active());
    assert_eq!(window.live_listeners(), 0);
    assert_eq!(observer.size(), StageSize::new(300.0, 200.0));
    assert_eq!(updates.borrow().len(), 1);
}

#[test]
fn dropping_observer_releases_listener() {
    let container = FakeContainer::default();
    container.attach(300.0, 200.0);
    let window = FakeWindow::default();
    {
        let (mut observer, _) = observer(&container, &window);
        observer.activate();
        assert_eq!(window.live_listeners(), 1);
    }
    assert_eq!(window.live_listeners(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn use_stage_size_reports_default_off_browser() {
    Owner::new().with(|| {
        let container = NodeRef::<leptos::html::Div>::new();
        let size = use_stage_size(container);
        assert_eq!(size.get_untracked(), StageSize::default());
    });
}
