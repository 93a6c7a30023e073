//! Pixel sink trait for serial LED chains

/// Trait for a bit-serial LED chain transmitter
///
/// The render pipeline depends only on this one operation; the wire
/// protocol (WS2812 one-wire timing and friends) lives entirely behind
/// the implementation.
pub trait PixelSink {
    /// Push one packed 32-bit color word to the chain
    ///
    /// Blocks until the transmitter accepts the word. The transmitter
    /// drains at a fixed clock rate, so the stall is bounded; this
    /// layer never retries or times out.
    fn send(&mut self, word: u32);
}
