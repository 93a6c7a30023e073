//! Button handling task
//!
//! Waits for falling edges on either button and feeds them to the
//! edge handler. The task is the single writer of the counter and the
//! debounce timestamp, and it renders the new digit before waiting
//! for the next edge - the display can never lag an accepted press,
//! and renders never interleave.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_rp::peripherals::PIO0;
use embassy_time::Instant;

use tally_core::input::EdgeHandler;
use tally_core::render::render_digit;
use tally_core::state::Event;
use tally_hal_rp2040::ws2812::PioWs2812;

/// Button task - edge wait, debounce, counter step, render
#[embassy_executor::task]
pub async fn buttons_task(
    mut button_up: Input<'static>,
    mut button_down: Input<'static>,
    mut matrix: PioWs2812<'static, PIO0, 0>,
    mut handler: EdgeHandler,
) {
    info!("Button task started");

    loop {
        let event = match select(
            button_up.wait_for_falling_edge(),
            button_down.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Event::Increment,
            Either::Second(()) => Event::Decrement,
        };

        let now_us = Instant::now().as_micros();
        if let Some(digit) = handler.on_edge(event, now_us) {
            render_digit(digit, &mut matrix);
            info!("Counter: {}", digit);
        }
        // Bounce or saturated press: nothing to repaint
    }
}
