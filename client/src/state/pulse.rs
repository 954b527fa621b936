//! Live activity ticker state and schedule.
//!
//! DESIGN
//! ======
//! Each cycle waits a jittered delay in `[JITTER_MIN_MS, JITTER_MAX_MS]`.
//! While the widget is collapsed the cycle first flashes the bubble for
//! [`FLASH_MS`]; [`ADVANCE_AFTER_MS`] into the cycle the event index moves to
//! `(i + 1) % len` and only then is the next cycle scheduled. Expanding or
//! collapsing restarts the schedule from a fresh delay.
//!
//! Timers go through [`TimerService`]; stale callbacks from a previous
//! schedule are ignored by generation number.

#[cfg(test)]
#[path = "pulse_test.rs"]
mod pulse_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::util::timer::{TimerId, TimerService};

pub const JITTER_MIN_MS: u32 = 8_000;
pub const JITTER_MAX_MS: u32 = 15_000;
pub const FLASH_MS: u32 = 800;
pub const ADVANCE_AFTER_MS: u32 = 400;

/// Map a uniform sample in `[0, 1)` onto `[JITTER_MIN_MS, JITTER_MAX_MS]`,
/// both ends inclusive.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jitter_delay_ms(unit: f64) -> u32 {
    let span = f64::from(JITTER_MAX_MS - JITTER_MIN_MS + 1);
    let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
    let offset = (unit * span).floor() as u32;
    (JITTER_MIN_MS + offset).min(JITTER_MAX_MS)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PulseState {
    pub index: usize,
    pub flash: bool,
    pub expanded: bool,
}

impl PulseState {
    /// Move to the next event, wrapping at `len`.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }
}

// =============================================================================
// TICKER
// =============================================================================

struct Inner {
    timers: Rc<dyn TimerService>,
    random: Box<dyn Fn() -> f64>,
    len: usize,
    state: Cell<PulseState>,
    on_change: Box<dyn Fn(PulseState)>,
    generation: Cell<u64>,
    pending: RefCell<Vec<TimerId>>,
}

impl Inner {
    fn update(&self, f: impl FnOnce(&mut PulseState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
        (self.on_change)(state);
    }

    fn cancel_pending(&self) {
        for id in self.pending.borrow_mut().drain(..) {
            self.timers.clear_timeout(id);
        }
    }

    fn after(self: &Rc<Self>, delay_ms: u32, generation: u64, f: impl FnOnce(&Rc<Self>) + 'static) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let id = self.timers.set_timeout(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade()
                    && inner.generation.get() == generation
                {
                    f(&inner);
                }
            }),
        );
        self.pending.borrow_mut().push(id);
    }

    fn schedule_cycle(self: &Rc<Self>, generation: u64) {
        let delay = jitter_delay_ms((self.random)());
        self.after(delay, generation, move |inner| inner.run_cycle(generation));
    }

    fn run_cycle(self: &Rc<Self>, generation: u64) {
        // Everything scheduled before this cycle has already fired.
        self.pending.borrow_mut().clear();

        if !self.state.get().expanded {
            self.update(|s| s.flash = true);
            self.after(FLASH_MS, generation, |inner| inner.update(|s| s.flash = false));
        }
        self.after(ADVANCE_AFTER_MS, generation, move |inner| {
            let len = inner.len;
            inner.update(|s| s.advance(len));
            inner.schedule_cycle(generation);
        });
    }
}

/// Drives [`PulseState`] through its cycles and reports every change.
pub struct PulseTicker {
    inner: Rc<Inner>,
}

impl PulseTicker {
    /// `random` yields uniform samples in `[0, 1)`; `len` is the event count.
    pub fn new(
        timers: Rc<dyn TimerService>,
        random: Box<dyn Fn() -> f64>,
        len: usize,
        on_change: Box<dyn Fn(PulseState)>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                timers,
                random,
                len,
                state: Cell::new(PulseState::default()),
                on_change,
                generation: Cell::new(0),
                pending: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> PulseState {
        self.inner.state.get()
    }

    /// Cancel the current schedule and begin a new one.
    pub fn start(&self) {
        self.stop();
        if self.inner.len > 0 {
            self.inner.schedule_cycle(self.inner.generation.get());
        }
    }

    /// Cancel every pending timer.
    pub fn stop(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.cancel_pending();
    }

    /// Expand or collapse the widget. Clears any flash and restarts the schedule.
    pub fn set_expanded(&self, expanded: bool) {
        self.inner.update(|s| {
            s.expanded = expanded;
            s.flash = false;
        });
        self.start();
    }
}

impl Drop for PulseTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
