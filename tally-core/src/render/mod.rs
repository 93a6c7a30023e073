//! Digit rendering pipeline
//!
//! Converts a counter value into the fixed stream of color words the
//! LED chain expects: glyph lookup, per-pixel color packing, and the
//! serpentine-order traversal of the 5x5 grid.

pub mod color;
pub mod glyphs;
pub mod renderer;

pub use color::{pack_grb, pixel_word, RED_LEVEL};
pub use glyphs::{GLYPHS, GLYPH_PIXELS};
pub use renderer::render_digit;
