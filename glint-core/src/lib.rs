//! Board-agnostic core logic for the Glint panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Debounce gate for the push-button edge handlers
//! - Shared state visible to both the edge handlers and the main loop
//! - Serial input classification (echo characters, matrix digits)
//! - Status screen rendering against a display trait
//! - Digit glyph patterns for the 5x5 LED matrix
//!
//! Everything here is testable on the host with synthetic timestamps
//! and mock display drivers.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod input;
pub mod matrix;
pub mod render;
pub mod state;
pub mod traits;
