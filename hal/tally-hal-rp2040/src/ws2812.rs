//! PIO-based WS2812 chain driver
//!
//! Owns one PIO state machine that clocks packed GRB words out to the
//! LED chain. Software only ever touches the TX FIFO; the waveform
//! timing lives in the PIO program.

use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use tally_core::traits::PixelSink;

use crate::pio::{calc_clock_divider, Ws2812Config, BITS_PER_WORD};

/// WS2812 chain transmitter
///
/// Each chain gets its own state machine; the program is loaded once
/// per PIO block via `Common`.
pub struct PioWs2812<'d, PIO: Instance, const SM: usize> {
    /// PIO state machine shifting words onto the data line
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812<'d, PIO, SM> {
    /// Create a new chain driver on the given data pin
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the chain's data-in (must be PIO-capable)
    /// * `config` - Chain configuration
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
        config: Ws2812Config,
    ) -> Self {
        // Standard WS2812 bit-banging program: each bit spends a fixed
        // number of cycles high then low, with the high time deciding
        // between a 0 and a 1 on the wire.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "out x, 1       side 0 [2]", // Low tail of previous bit, fetch next
            "jmp !x do_zero side 1 [1]", // Rising edge, branch on bit value
            "jmp bitloop    side 1 [4]", // One: stay high for the body
            "do_zero:",
            "nop            side 0 [4]", // Zero: drop early, idle low
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        // Create the PIO pin for the data output
        let data_pio_pin = common.make_pio_pin(data_pin);

        // Configure state machine
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);

        // Autopull 24 bits per word, MSB first (green channel leads)
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_WORD,
            direction: ShiftDirection::Left,
        };

        // RX FIFO is unused; doubling the TX depth softens backpressure
        cfg.fifo_join = FifoJoin::TxOnly;

        let (int_div, frac_div) = calc_clock_divider(config.bit_freq_hz);
        let divider_bits = ((int_div as u32) << 8) | (frac_div as u32);
        cfg.clock_divider = U24F8::from_bits(divider_bits);

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self { sm }
    }

    /// Push one color word, spinning until the TX FIFO accepts it
    ///
    /// The state machine drains the FIFO at the fixed bit clock, so
    /// the wait is bounded.
    pub fn write(&mut self, word: u32) {
        while !self.sm.tx().try_push(word) {}
    }
}

impl<'d, PIO: Instance, const SM: usize> PixelSink for PioWs2812<'d, PIO, SM> {
    fn send(&mut self, word: u32) {
        self.write(word);
    }
}
