//! Digit renderer
//!
//! Streams one glyph to the LED chain as a fixed-length sequence of
//! color words. The matrix is wired serpentine-style, so the grid is
//! traversed in reverse: the last grid position is shifted out first.

use super::color::pixel_word;
use super::glyphs::{GLYPHS, GLYPH_PIXELS};
use crate::traits::PixelSink;

/// Render a digit to the LED chain
///
/// Sends exactly [`GLYPH_PIXELS`] words for digits 0-9, in reversed
/// grid order. Values outside the digit range are skipped silently;
/// the display keeps its previous contents.
pub fn render_digit<S: PixelSink>(digit: u8, sink: &mut S) {
    let Some(glyph) = GLYPHS.get(digit as usize) else {
        return;
    };

    for &intensity in glyph.iter().rev() {
        sink.send(pixel_word(intensity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::RED_LEVEL;
    use crate::render::pack_grb;
    use heapless::Vec;

    /// Test double recording every word pushed to the chain
    #[derive(Default)]
    struct RecordingSink {
        words: Vec<u32, 64>,
    }

    impl PixelSink for RecordingSink {
        fn send(&mut self, word: u32) {
            self.words.push(word).unwrap();
        }
    }

    fn rendered(digit: u8) -> Vec<u32, 64> {
        let mut sink = RecordingSink::default();
        render_digit(digit, &mut sink);
        sink.words
    }

    #[test]
    fn test_emits_exactly_25_words() {
        for digit in 0..=9 {
            assert_eq!(rendered(digit).len(), GLYPH_PIXELS);
        }
    }

    #[test]
    fn test_out_of_range_digit_emits_nothing() {
        assert!(rendered(10).is_empty());
        assert!(rendered(255).is_empty());
    }

    #[test]
    fn test_stream_matches_reversed_glyph() {
        for digit in 0..=9u8 {
            let words = rendered(digit);
            let glyph = &GLYPHS[digit as usize];
            for (i, &word) in words.iter().enumerate() {
                let expected = pixel_word(glyph[GLYPH_PIXELS - 1 - i]);
                assert_eq!(word, expected, "digit {digit}, word {i}");
            }
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        assert_eq!(rendered(7), rendered(7));
    }

    #[test]
    fn test_digit_one_stream() {
        // Glyph for "1" reversed: the bottom row (0,1,1,1,0) comes out
        // first, itself reversed pixel by pixel.
        let words = rendered(1);
        let on = pack_grb(RED_LEVEL, 0, 0);
        assert_eq!(&words[..5], &[0, on, on, on, 0]);
        // Top row (0,0,1,0,0) comes out last
        assert_eq!(&words[20..], &[0, 0, on, 0, 0]);
    }
}
