//! Button input filtering and edge handling

pub mod debounce;
pub mod handler;

pub use debounce::{Debouncer, DEBOUNCE_WINDOW_US};
pub use handler::EdgeHandler;
