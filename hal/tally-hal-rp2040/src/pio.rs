//! PIO timing math for the WS2812 serial chain
//!
//! The RP2040's Programmable I/O generates the one-wire WS2812
//! waveform entirely in hardware; the CPU only pushes packed color
//! words into the TX FIFO. The bit period is fixed by the chain
//! protocol, so the state machine clock is derived from the system
//! clock with a fractional divider.

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 serial bit rate
pub const WS2812_BIT_FREQ_HZ: u32 = 800_000;

/// PIO cycles per transmitted bit (3 low-tail + 2 head + 5 body)
pub const CYCLES_PER_BIT: u32 = 10;

/// Bits shifted out per color word (G, R, B - low byte unused)
pub const BITS_PER_WORD: u8 = 24;

/// WS2812 chain configuration
#[derive(Debug, Clone)]
pub struct Ws2812Config {
    /// Serial bit rate in Hz
    pub bit_freq_hz: u32,
}

impl Default for Ws2812Config {
    fn default() -> Self {
        Self {
            bit_freq_hz: WS2812_BIT_FREQ_HZ,
        }
    }
}

/// Calculate the clock divider for a target bit rate
///
/// The PIO program spends [`CYCLES_PER_BIT`] cycles per bit, so the
/// state machine must run at `bit_freq * CYCLES_PER_BIT` Hz:
///
/// divider = SYS_CLK / (bit_freq * CYCLES_PER_BIT)
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(bit_freq_hz: u32) -> (u16, u8) {
    if bit_freq_hz == 0 {
        return (0xFFFF, 0xFF); // Maximum divider = stopped
    }

    // To get 8-bit fractional precision, multiply by 256 first
    let divisor = bit_freq_hz * CYCLES_PER_BIT;
    let divider_x256 = (SYS_CLK_HZ as u64 * 256) / (divisor as u64);

    // Split into integer and fractional parts
    let int_part = (divider_x256 / 256) as u32;
    let frac_part = (divider_x256 % 256) as u32;

    // Clamp to valid range
    let int_part = int_part.min(0xFFFF) as u16;
    let frac_part = frac_part.min(0xFF) as u8;

    (int_part, frac_part)
}
