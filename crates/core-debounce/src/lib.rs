//! Debounce and hydration helpers for the display side of an amount field.
//!
//! Only the *visual* application of a new display string is delayed; callers
//! apply the numeric value immediately. A newer value always supersedes a
//! pending one and restarts the quiet period. There is no other cancellation.
//!
//! Two shapes of the same policy:
//! - `Debouncer<T>` / `DebouncedValue<T>`: synchronous, driven by caller
//!   supplied `Instant`s (render loops, tests).
//! - `spawn_debounced`: a tokio task between two channels.

mod task;

pub use task::spawn_debounced;

use std::time::{Duration, Instant};
use tracing::trace;

/// Delay for the animated display string, about one frame.
pub const DISPLAY_DEBOUNCE: Duration = Duration::from_millis(50);
/// Delay used when none is given.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebounceMetricsSnapshot {
    pub pushed: u64,
    pub superseded: u64,
    pub emitted: u64,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    metrics: DebounceMetricsSnapshot,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Option<Duration>) -> Self {
        Self {
            delay: delay.unwrap_or(DEFAULT_DEBOUNCE),
            pending: None,
            metrics: DebounceMetricsSnapshot::default(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`; replaces (and restarts the timer of) any pending value.
    pub fn push(&mut self, value: T, now: Instant) {
        self.metrics.pushed += 1;
        if self.pending.replace((value, now)).is_some() {
            self.metrics.superseded += 1;
        }
        trace!(target: "debounce", superseded = self.metrics.superseded, "debounce_push");
    }

    /// Take the pending value once `delay` has passed since its push.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);
        if !due {
            return None;
        }
        self.metrics.emitted += 1;
        self.pending.take().map(|(v, _)| v)
    }

    /// Take the pending value regardless of the timer.
    pub fn flush(&mut self) -> Option<T> {
        let out = self.pending.take().map(|(v, _)| v);
        if out.is_some() {
            self.metrics.emitted += 1;
        }
        out
    }

    /// Drop the pending value without counting it as emitted.
    fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(v, _)| v)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }

    pub fn metrics_snapshot(&self) -> DebounceMetricsSnapshot {
        self.metrics
    }
}

/// A value whose visible copy trails the latest one by the debounce delay.
/// The initial value is visible immediately.
#[derive(Debug)]
pub struct DebouncedValue<T> {
    visible: T,
    debouncer: Debouncer<T>,
}

impl<T> DebouncedValue<T> {
    pub fn new(initial: T, delay: Option<Duration>) -> Self {
        Self {
            visible: initial,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn set(&mut self, value: T, now: Instant) {
        self.debouncer.push(value, now);
    }

    /// Replace the visible value now, dropping anything pending.
    pub fn set_immediate(&mut self, value: T) {
        self.debouncer.cancel();
        self.visible = value;
    }

    /// Visible value at `now`, promoting the pending one if it is due.
    pub fn get(&mut self, now: Instant) -> &T {
        if let Some(v) = self.debouncer.poll(now) {
            self.visible = v;
        }
        &self.visible
    }

    /// Visible value without advancing time.
    pub fn visible(&self) -> &T {
        &self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.pending().is_some()
    }

    pub fn debouncer(&self) -> &Debouncer<T> {
        &self.debouncer
    }
}

/// Remembers the value seen on the previous pass.
#[derive(Debug, Clone, Default)]
pub struct PreviousValue<T> {
    last: Option<T>,
}

impl<T> PreviousValue<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `current`, returning what was recorded before it.
    pub fn observe(&mut self, current: T) -> Option<T> {
        self.last.replace(current)
    }

    pub fn get(&self) -> Option<&T> {
        self.last.as_ref()
    }
}

impl<T: PartialEq> PreviousValue<T> {
    /// Record `current`; true when it differs from the previous value. The
    /// first observation counts as unchanged.
    pub fn changed(&mut self, current: T) -> bool {
        match self.observe(current) {
            Some(prev) => self.last.as_ref() != Some(&prev),
            None => false,
        }
    }
}

/// One-shot flag: false until the first interactive pass completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hydration {
    hydrated: bool,
}

impl Hydration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_hydrated(&mut self) {
        if !self.hydrated {
            trace!(target: "debounce", "hydrated");
        }
        self.hydrated = true;
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }
}
