//! One-shot timer abstraction for decorative schedules.
//!
//! DESIGN
//! ======
//! Components schedule through [`TimerService`] instead of calling
//! `setTimeout` directly. The browser implementation wraps
//! `gloo_timers::callback::Timeout`; tests use [`ManualTimers`], a virtual
//! clock advanced explicitly.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[cfg(any(test, feature = "hydrate"))]
use std::cell::{Cell, RefCell};
#[cfg(any(test, feature = "hydrate"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "hydrate"))]
use std::rc::Rc;

/// Opaque handle returned by [`TimerService::set_timeout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i64);

pub type TimerCallback = Box<dyn FnOnce()>;

pub trait TimerService {
    /// Run `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerId;

    /// Cancel a pending timer. Unknown or already-fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}

// =============================================================================
// HANDLE REGISTRY
// =============================================================================

/// Owns the platform handle of every pending timer, keyed by [`TimerId`].
///
/// Dropping a handle cancels its timer and frees its callback, so a timer
/// leaves the registry either by firing or by [`HandleRegistry::cancel`].
#[cfg(any(test, feature = "hydrate"))]
struct HandleRegistry<H> {
    next_id: Cell<i64>,
    live: Rc<RefCell<HashMap<i64, H>>>,
}

#[cfg(any(test, feature = "hydrate"))]
impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self { next_id: Cell::new(0), live: Rc::new(RefCell::new(HashMap::new())) }
    }
}

#[cfg(any(test, feature = "hydrate"))]
impl<H: 'static> HandleRegistry<H> {
    /// Wrap `callback` so it releases its own handle when it fires, hand it
    /// to `start`, and keep the returned handle until then.
    fn schedule(&self, start: impl FnOnce(TimerCallback) -> H, callback: TimerCallback) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let live = Rc::downgrade(&self.live);
        let fire: TimerCallback = Box::new(move || {
            // Held until the callback returns; it may schedule new timers.
            let finished = live.upgrade().and_then(|live| live.borrow_mut().remove(&id));
            callback();
            drop(finished);
        });
        let handle = start(fire);
        self.live.borrow_mut().insert(id, handle);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let handle = self.live.borrow_mut().remove(&id.0);
        drop(handle);
    }

    #[cfg(test)]
    fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.setTimeout` backed timers. Dropping the service cancels every
/// timer it still holds.
#[derive(Default)]
pub struct BrowserTimers {
    #[cfg(feature = "hydrate")]
    registry: HandleRegistry<gloo_timers::callback::Timeout>,
}

impl TimerService for BrowserTimers {
    fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerId {
        #[cfg(feature = "hydrate")]
        {
            self.registry
                .schedule(|fire| gloo_timers::callback::Timeout::new(delay_ms, fire), callback)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
            TimerId(-1)
        }
    }

    fn clear_timeout(&self, id: TimerId) {
        #[cfg(feature = "hydrate")]
        self.registry.cancel(id);
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

#[cfg(test)]
pub use manual::ManualTimers;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};

    use super::{TimerCallback, TimerId, TimerService};

    struct Pending {
        id: i64,
        due_ms: u64,
        callback: TimerCallback,
    }

    /// Virtual clock. Timers fire only inside [`ManualTimers::advance`], in
    /// due order, ties broken by scheduling order.
    #[derive(Default)]
    pub struct ManualTimers {
        now_ms: Cell<u64>,
        next_id: Cell<i64>,
        pending: RefCell<Vec<Pending>>,
    }

    impl ManualTimers {
        pub fn now_ms(&self) -> u64 {
            self.now_ms.get()
        }

        pub fn pending_count(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Delays of pending timers relative to now, in scheduling order.
        pub fn pending_delays(&self) -> Vec<u64> {
            let now = self.now_ms.get();
            self.pending.borrow().iter().map(|p| p.due_ms - now).collect()
        }

        /// Move the clock forward, firing every timer that comes due,
        /// including timers scheduled by callbacks along the way.
        pub fn advance(&self, ms: u64) {
            let target = self.now_ms.get() + ms;
            loop {
                let next = {
                    let mut pending = self.pending.borrow_mut();
                    let idx = pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due_ms <= target)
                        .min_by_key(|(_, p)| (p.due_ms, p.id))
                        .map(|(i, _)| i);
                    idx.map(|i| pending.remove(i))
                };
                let Some(timer) = next else { break };
                self.now_ms.set(timer.due_ms);
                (timer.callback)();
            }
            self.now_ms.set(target);
        }
    }

    impl TimerService for ManualTimers {
        fn set_timeout(&self, delay_ms: u32, callback: TimerCallback) -> TimerId {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.pending.borrow_mut().push(Pending {
                id,
                due_ms: self.now_ms.get() + u64::from(delay_ms),
                callback,
            });
            TimerId(id)
        }

        fn clear_timeout(&self, id: TimerId) {
            self.pending.borrow_mut().retain(|p| p.id != id.0);
        }
    }
}
