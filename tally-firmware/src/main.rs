//! Tally - Counter badge firmware
//!
//! Main firmware binary for RP2040-based boards with two push-buttons
//! and a 5x5 WS2812 matrix (BitDogLab pinout). The buttons step a
//! bounded 0-9 counter; the matrix shows the current digit.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tally_core::input::EdgeHandler;
use tally_core::render::render_digit;
use tally_hal_rp2040::pio::Ws2812Config;
use tally_hal_rp2040::ws2812::PioWs2812;

mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tally firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Buttons are wired to ground, so pull up and watch for falling edges
    // Pin assignments are board-specific (BitDogLab: A=GPIO5, B=GPIO6)
    let button_up = Input::new(p.PIN_5, Pull::Up);
    let button_down = Input::new(p.PIN_6, Pull::Up);

    // Setup PIO0 for the WS2812 matrix on GPIO7
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let mut matrix = PioWs2812::new(&mut common, sm0, p.PIN_7, Ws2812Config::default());
    info!("PIO WS2812 chain initialized");

    // Status LED (BitDogLab RGB LED, red channel on GPIO13)
    let mut status_led = Output::new(p.PIN_13, Level::Low);

    // Paint the start-up value before any button can fire
    let handler = EdgeHandler::default();
    render_digit(handler.value(), &mut matrix);

    // Boot indicator flash
    status_led.set_high();
    Timer::after_millis(300).await;
    status_led.set_low();

    // Spawn tasks
    spawner
        .spawn(tasks::buttons_task(button_up, button_down, matrix, handler))
        .unwrap();
    spawner.spawn(tasks::heartbeat_task(status_led)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
