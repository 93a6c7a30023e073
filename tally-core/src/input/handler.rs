//! Accepted-edge orchestration
//!
//! Glues the debounce gate to the counter: one call per raw button
//! edge decides whether the display must be repainted. Keeping the
//! whole sequence here leaves the firmware task with nothing but edge
//! waiting and the render side effect.

use super::debounce::Debouncer;
use crate::state::{Counter, Event};

/// Debounced edge-to-counter pipeline
///
/// Owns the counter and the debounce gate, so there is exactly one
/// writer of both.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeHandler {
    debouncer: Debouncer,
    counter: Counter,
}

impl EdgeHandler {
    /// Create a handler with the given debounce gate, counter at zero
    pub const fn new(debouncer: Debouncer) -> Self {
        Self {
            debouncer,
            counter: Counter::new(),
        }
    }

    /// Currently displayed digit
    pub const fn value(&self) -> u8 {
        self.counter.value()
    }

    /// Process one raw edge observed at `now_us`
    ///
    /// Returns the digit to render when the edge was genuine and the
    /// counter actually moved. Returns `None` both for edges inside
    /// the debounce window (discarded entirely) and for accepted
    /// presses at a range bound, which leave the display untouched.
    /// A saturated press still advances the debounce reference.
    pub fn on_edge(&mut self, event: Event, now_us: u64) -> Option<u8> {
        if !self.debouncer.accept(now_us) {
            return None;
        }

        let next = self.counter.transition(event);
        if next == self.counter {
            return None;
        }

        self.counter = next;
        Some(next.value())
    }
}

impl Default for EdgeHandler {
    fn default() -> Self {
        Self::new(Debouncer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DEBOUNCE_WINDOW_US;
    use crate::state::COUNTER_MAX;

    /// Comfortably outside the window
    const STEP_US: u64 = 2 * DEBOUNCE_WINDOW_US;

    /// Drive the counter to the maximum with well-spaced presses,
    /// returning the timestamp of the last accepted press
    fn count_to_max(handler: &mut EdgeHandler) -> u64 {
        let mut t = STEP_US;
        for expected in 1..=COUNTER_MAX {
            assert_eq!(handler.on_edge(Event::Increment, t), Some(expected));
            t += STEP_US;
        }
        t - STEP_US
    }

    #[test]
    fn test_first_press_renders_one() {
        let mut handler = EdgeHandler::default();
        assert_eq!(handler.on_edge(Event::Increment, STEP_US), Some(1));
        assert_eq!(handler.value(), 1);
    }

    #[test]
    fn test_bounce_is_discarded_without_render() {
        let mut handler = EdgeHandler::default();
        assert_eq!(handler.on_edge(Event::Increment, STEP_US), Some(1));

        // 10ms later: bounce, no counter step, nothing to repaint
        assert_eq!(handler.on_edge(Event::Increment, STEP_US + 10_000), None);
        assert_eq!(handler.value(), 1);
    }

    #[test]
    fn test_saturated_press_does_not_render() {
        let mut handler = EdgeHandler::default();
        let last = count_to_max(&mut handler);

        // Accepted press at the bound: counter stays, display untouched
        assert_eq!(handler.on_edge(Event::Increment, last + STEP_US), None);
        assert_eq!(handler.value(), COUNTER_MAX);
    }

    #[test]
    fn test_saturated_press_advances_debounce_reference() {
        let mut handler = EdgeHandler::default();
        let last = count_to_max(&mut handler);

        let saturated_at = last + STEP_US;
        assert_eq!(handler.on_edge(Event::Increment, saturated_at), None);

        // The no-op press still started a fresh window
        let inside = saturated_at + DEBOUNCE_WINDOW_US - 1;
        assert_eq!(handler.on_edge(Event::Decrement, inside), None);
        assert_eq!(handler.value(), COUNTER_MAX);

        let outside = saturated_at + DEBOUNCE_WINDOW_US;
        assert_eq!(
            handler.on_edge(Event::Decrement, outside),
            Some(COUNTER_MAX - 1)
        );
    }

    #[test]
    fn test_decrement_at_zero_does_not_render() {
        let mut handler = EdgeHandler::default();
        assert_eq!(handler.on_edge(Event::Decrement, STEP_US), None);
        assert_eq!(handler.value(), 0);
    }
}
