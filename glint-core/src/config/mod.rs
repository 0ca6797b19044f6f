//! Configuration types
//!
//! Board wiring and timing parameters with defaults matching the
//! reference panel board.

pub mod board;

pub use board::*;
