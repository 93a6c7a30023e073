//! Counter state machine definition
//!
//! The displayed digit is a function of the current counter value and
//! an event. Transitions saturate at the range bounds rather than
//! wrapping; a press at a bound leaves the value unchanged.

use super::events::Event;

/// Lowest displayable counter value
pub const COUNTER_MIN: u8 = 0;

/// Highest displayable counter value
pub const COUNTER_MAX: u8 = 9;

/// Bounded counter holding the currently displayed digit
///
/// Always satisfies `COUNTER_MIN <= value <= COUNTER_MAX`. Created at
/// zero and mutated only through [`Counter::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counter(u8);

impl Counter {
    /// Create a counter at the initial value (zero)
    pub const fn new() -> Self {
        Counter(COUNTER_MIN)
    }

    /// Current value, guaranteed in `[COUNTER_MIN, COUNTER_MAX]`
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Process an event and return the next counter
    ///
    /// This is the core transition logic. Saturated transitions
    /// (increment at the maximum, decrement at the minimum) return the
    /// current counter unchanged; callers detect this by comparing old
    /// and new values.
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::Increment if self.0 < COUNTER_MAX => Counter(self.0 + 1),
            Event::Decrement if self.0 > COUNTER_MIN => Counter(self.0 - 1),
            // Saturated: stay at the current value
            _ => self,
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
    }

    #[test]
    fn test_increment_steps_up() {
        let counter = Counter::new();
        let next = counter.transition(Event::Increment);
        assert_eq!(next.value(), 1);
        assert_ne!(next, counter);
    }

    #[test]
    fn test_decrement_steps_down() {
        let counter = Counter::new()
            .transition(Event::Increment)
            .transition(Event::Increment);
        let next = counter.transition(Event::Decrement);
        assert_eq!(next.value(), 1);
    }

    #[test]
    fn test_saturates_at_max() {
        let mut counter = Counter::new();
        for _ in 0..COUNTER_MAX {
            counter = counter.transition(Event::Increment);
        }
        assert_eq!(counter.value(), COUNTER_MAX);

        // Further increments are no-ops, observable as an unchanged value
        let next = counter.transition(Event::Increment);
        assert_eq!(next, counter);
        assert_eq!(next.value(), COUNTER_MAX);
    }

    #[test]
    fn test_saturates_at_min() {
        let counter = Counter::new();
        let next = counter.transition(Event::Decrement);
        assert_eq!(next, counter);
        assert_eq!(next.value(), COUNTER_MIN);
    }

    proptest! {
        #[test]
        fn prop_counter_stays_in_range(events in proptest::collection::vec(any::<bool>(), 0..256)) {
            let mut counter = Counter::new();
            for up in events {
                let event = if up { Event::Increment } else { Event::Decrement };
                counter = counter.transition(event);
                prop_assert!(counter.value() <= COUNTER_MAX);
            }
        }

        #[test]
        fn prop_transition_moves_at_most_one_step(value in 0u8..=9, up in any::<bool>()) {
            let counter = Counter(value);
            let event = if up { Event::Increment } else { Event::Decrement };
            let next = counter.transition(event);
            let delta = (next.value() as i16 - value as i16).abs();
            prop_assert!(delta <= 1);
        }
    }
}
