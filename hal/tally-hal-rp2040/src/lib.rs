//! RP2040 hardware back-ends for the Tally counter badge
//!
//! Provides the PIO-based WS2812 chain transmitter that the
//! board-agnostic render pipeline streams color words into.

#![no_std]

pub mod pio;
pub mod ws2812;
