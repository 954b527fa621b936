use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> TimerCallback) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_make = log.clone();
    let make = move |label: &'static str| -> TimerCallback {
        let log = log_for_make.clone();
        Box::new(move || log.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn manual_timers_fire_in_due_order() {
    let timers = ManualTimers::default();
    let (log, make) = recorder();
    timers.set_timeout(300, make("late"));
    timers.set_timeout(100, make("early"));
    timers.set_timeout(100, make("early-second"));

    timers.advance(1_000);

    assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
    assert_eq!(timers.now_ms(), 1_000);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn manual_timers_hold_until_due() {
    let timers = ManualTimers::default();
    let (log, make) = recorder();
    timers.set_timeout(500, make("tick"));

    timers.advance(499);
    assert!(log.borrow().is_empty());
    assert_eq!(timers.pending_delays(), vec![1]);

    timers.advance(1);
    assert_eq!(*log.borrow(), vec!["tick"]);
}

#[test]
fn cleared_timer_never_fires() {
    let timers = ManualTimers::default();
    let (log, make) = recorder();
    let id = timers.set_timeout(100, make("cancelled"));
    timers.set_timeout(200, make("kept"));

    timers.clear_timeout(id);
    timers.advance(1_000);

    assert_eq!(*log.borrow(), vec!["kept"]);
}

#[test]
fn clearing_unknown_id_is_ignored() {
    let timers = ManualTimers::default();
    timers.clear_timeout(TimerId(42));
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn callbacks_can_schedule_follow_ups_within_same_advance() {
    let timers = Rc::new(ManualTimers::default());
    let log = Rc::new(RefCell::new(Vec::new()));

    let chained_timers = timers.clone();
    let chained_log = log.clone();
    timers.set_timeout(
        100,
        Box::new(move || {
            chained_log.borrow_mut().push(chained_timers.now_ms());
            let inner_log = chained_log.clone();
            let inner_timers = chained_timers.clone();
            chained_timers.set_timeout(50, Box::new(move || inner_log.borrow_mut().push(inner_timers.now_ms())));
        }),
    );

    timers.advance(200);
    assert_eq!(*log.borrow(), vec![100, 150]);
}

#[test]
fn browser_timers_are_inert_without_hydrate() {
    let timers = BrowserTimers::default();
    let id = timers.set_timeout(10, Box::new(|| panic!("must not run natively")));
    timers.clear_timeout(id);
}

// =============================================================================
// HandleRegistry
// =============================================================================

/// Stand-in for a platform timer handle; counts how often one is released.
struct FakeHandle {
    released: Rc<Cell<usize>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

struct FakePlatform {
    released: Rc<Cell<usize>>,
    armed: RefCell<Vec<TimerCallback>>,
}

impl FakePlatform {
    fn new() -> Self {
        Self { released: Rc::new(Cell::new(0)), armed: RefCell::new(Vec::new()) }
    }

    fn schedule(&self, registry: &HandleRegistry<FakeHandle>, callback: TimerCallback) -> TimerId {
        registry.schedule(
            |fire| {
                self.armed.borrow_mut().push(fire);
                FakeHandle { released: self.released.clone() }
            },
            callback,
        )
    }

    fn fire_oldest(&self) {
        let fire = self.armed.borrow_mut().remove(0);
        fire();
    }
}

#[test]
fn registry_releases_handle_on_cancel() {
    let registry = HandleRegistry::default();
    let platform = FakePlatform::new();
    let first = platform.schedule(&registry, Box::new(|| {}));
    let second = platform.schedule(&registry, Box::new(|| {}));
    assert_ne!(first, second);
    assert_eq!(registry.live_count(), 2);

    registry.cancel(first);

    assert_eq!(platform.released.get(), 1);
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn registry_releases_handle_after_firing() {
    let registry = HandleRegistry::default();
    let platform = FakePlatform::new();
    let (log, make) = recorder();
    platform.schedule(&registry, make("fired"));

    platform.fire_oldest();

    assert_eq!(*log.borrow(), vec!["fired"]);
    assert_eq!(platform.released.get(), 1);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn cancel_of_unknown_or_fired_id_is_ignored() {
    let registry = HandleRegistry::default();
    let platform = FakePlatform::new();
    let id = platform.schedule(&registry, Box::new(|| {}));
    platform.fire_oldest();

    registry.cancel(id);
    registry.cancel(TimerId(99));

    assert_eq!(platform.released.get(), 1);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn dropping_registry_releases_pending_handles() {
    let platform = FakePlatform::new();
    {
        let registry = HandleRegistry::default();
        platform.schedule(&registry, Box::new(|| {}));
        platform.schedule(&registry, Box::new(|| {}));
    }
    assert_eq!(platform.released.get(), 2);

    // Firing after the registry is gone still runs the callback.
    let (log, make) = recorder();
    platform.armed.borrow_mut().clear();
    let registry = HandleRegistry::default();
    platform.schedule(&registry, make("late"));
    drop(registry);
    platform.fire_oldest();
    assert_eq!(*log.borrow(), vec!["late"]);
}
