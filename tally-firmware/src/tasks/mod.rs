//! Embassy async tasks
//!
//! The button task owns all counter state and the matrix driver; the
//! heartbeat task only blinks the status LED.

pub mod buttons;
pub mod heartbeat;

pub use buttons::buttons_task;
pub use heartbeat::heartbeat_task;
