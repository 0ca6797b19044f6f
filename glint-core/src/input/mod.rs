//! Input event sources
//!
//! Button edges arrive from the platform's edge-wait primitive and pass
//! through the debounce gate before touching shared state. Serial bytes
//! arrive through a bounded channel and are classified here.

pub mod button;
pub mod debounce;
pub mod serial;

pub use button::{ButtonChannel, ButtonId};
pub use serial::SerialAction;
