//! Board-agnostic core logic for the Tally counter badge firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bounded counter state machine (0-9)
//! - Button debounce gate
//! - Digit glyph table and color word packing
//! - Render pipeline over a narrow pixel sink trait

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest) need the std macros
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod input;
pub mod render;
pub mod state;
pub mod traits;
