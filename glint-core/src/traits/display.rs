//! Display driver trait for the status OLED
//!
//! Abstracts the text surface the render step draws on: a fixed grid of
//! character cells (21 columns x 8 rows on the 128x64 panel with a 6x8
//! font). Drawing mutates a frame buffer only; nothing reaches the device
//! until `flush`.

/// Trait for the character-cell status display.
pub trait StatusDisplay {
    /// Driver-level transport error (I2C bus error on real hardware).
    type Error;

    /// Blank the frame buffer.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw a single character at a cell position.
    ///
    /// - `row`: character row (0-7)
    /// - `col`: character column (0-20)
    fn draw_char(&mut self, row: u8, col: u8, ch: char) -> Result<(), Self::Error>;

    /// Draw a string starting at a cell position; text past the right edge
    /// is clipped.
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), Self::Error>;

    /// Push the frame buffer to the device. Blocking, bounded.
    fn flush(&mut self) -> Result<(), Self::Error>;
}
