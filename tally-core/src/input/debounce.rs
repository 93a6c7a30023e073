//! Time-window debounce gate for mechanical button edges
//!
//! Momentary-contact switches bounce for a few milliseconds after each
//! press. The gate accepts an edge only when enough time has elapsed
//! since the last accepted edge; everything inside the window is
//! mechanical noise and is discarded without any state mutation.

/// Minimum elapsed time between two accepted edges, in microseconds
pub const DEBOUNCE_WINDOW_US: u64 = 75_000;

/// Debounce gate shared by all button lines
///
/// Holds the monotonic timestamp of the last accepted edge. The window
/// is evaluated once per edge; it is never retried or extended.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u64,
    last_accepted_us: u64,
}

impl Debouncer {
    /// Create a gate with the given window in microseconds
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: 0,
        }
    }

    /// Decide whether an edge at `now_us` is genuine
    ///
    /// Accepts when at least the window has elapsed since the last
    /// accepted edge, recording `now_us` as the new reference point.
    /// The reference is updated on every acceptance, even when the
    /// caller later discards the event for other reasons (such as a
    /// saturated counter).
    pub fn accept(&mut self, now_us: u64) -> bool {
        if now_us.saturating_sub(self.last_accepted_us) >= self.window_us {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_US)
    }
}
