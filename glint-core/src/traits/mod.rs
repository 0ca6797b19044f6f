//! Hardware abstraction traits

pub mod display;

pub use display::StatusDisplay;
