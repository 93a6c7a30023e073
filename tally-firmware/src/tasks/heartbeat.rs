//! Heartbeat task
//!
//! Blinks the status LED in bursts so a glance shows the firmware is
//! alive even when nobody presses a button.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

/// Flashes per burst
const BURST_LEN: usize = 5;

/// Flash half-period in milliseconds
const FLASH_MS: u64 = 100;

/// Heartbeat task - blinks the status LED forever
#[embassy_executor::task]
pub async fn heartbeat_task(mut led: Output<'static>) {
    info!("Heartbeat task started");

    loop {
        for _ in 0..BURST_LEN {
            led.set_high();
            Timer::after_millis(FLASH_MS).await;
            led.set_low();
            Timer::after_millis(FLASH_MS).await;
        }
    }
}
