//! Shared state and inter-task channels
//!
//! The button tasks and the main loop communicate exclusively through
//! the flag-sized atomics in [`SharedState`]; console bytes flow through
//! a bounded embassy-sync channel.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use glint_core::state::SharedState;

/// Capacity of the console byte channel; bytes beyond it are dropped.
const CONSOLE_CHANNEL_SIZE: usize = 8;

/// State shared between the button edge tasks and the main loop.
pub static SHARED: SharedState = SharedState::new();

/// Raw console bytes from the UART RX task, one consumed per main-loop tick.
pub static CONSOLE_BYTES: Channel<CriticalSectionRawMutex, u8, CONSOLE_CHANNEL_SIZE> =
    Channel::new();
