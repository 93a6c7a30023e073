//! Events that trigger counter transitions

/// Events that can trigger a counter transition
///
/// One event per button line: the increment button produces
/// `Increment`, the decrement button produces `Decrement`. An edge on
/// an unrecognized line never becomes an event; callers drop it before
/// it reaches the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Accepted press on the increment button
    Increment,
    /// Accepted press on the decrement button
    Decrement,
}
