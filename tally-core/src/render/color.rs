//! Color word packing for the WS2812 chain
//!
//! The chain consumes one 32-bit word per pixel with the channel
//! layout expected by the PIO shift program:
//!
//! ```text
//! bits [31:24] green, [23:16] red, [15:8] blue, [7:0] zero
//! ```

/// Red channel level for a lit pixel: 10% of full scale
pub const RED_LEVEL: u8 = 25;

/// Pack per-channel brightness into a chain color word
pub const fn pack_grb(red: u8, green: u8, blue: u8) -> u32 {
    ((green as u32) << 24) | ((red as u32) << 16) | ((blue as u32) << 8)
}

/// Color word for one glyph pixel
///
/// Glyph intensities are binary: a lit pixel becomes dim red, an unlit
/// pixel stays dark. No other channel is ever driven.
pub const fn pixel_word(intensity: u8) -> u32 {
    if intensity == 0 {
        pack_grb(0, 0, 0)
    } else {
        pack_grb(RED_LEVEL, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(pack_grb(0, 0xFF, 0), 0xFF00_0000);
        assert_eq!(pack_grb(0xFF, 0, 0), 0x00FF_0000);
        assert_eq!(pack_grb(0, 0, 0xFF), 0x0000_FF00);
        // Lowest byte is always zero
        assert_eq!(pack_grb(0xFF, 0xFF, 0xFF) & 0xFF, 0);
    }

    #[test]
    fn test_lit_pixel_is_dim_red() {
        assert_eq!(pixel_word(1), 0x0019_0000);
    }

    #[test]
    fn test_unlit_pixel_is_dark() {
        assert_eq!(pixel_word(0), 0);
    }
}
