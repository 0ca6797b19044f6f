//! Embassy async tasks
//!
//! Each input source runs independently and communicates with the main
//! loop via shared state and channels.

pub mod buttons;
pub mod serial_rx;

pub use buttons::button_task;
pub use serial_rx::serial_rx_task;
