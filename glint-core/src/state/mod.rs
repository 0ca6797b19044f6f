//! Shared state between the edge handlers and the main loop
//!
//! All cross-context state is flag-sized and atomic, so a reader always
//! observes either the pre- or post-update value, never a torn one.

pub mod shared;

pub use shared::{RgbChannel, SharedState, DIGIT_NONE};
