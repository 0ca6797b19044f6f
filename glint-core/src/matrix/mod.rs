//! 5x5 LED matrix model
//!
//! Digits are rendered from a fixed pattern table into a [`PixelBuffer`]
//! whose cell order matches the strip's transmission order (the matrix is
//! addressed serially, not by row/column). The firmware turns the buffer
//! into one WS2812 frame.

pub mod patterns;

use crate::state::SharedState;
use patterns::DIGIT_PATTERNS;

/// Matrix edge length in cells.
pub const MATRIX_SIZE: usize = 5;

/// Total cell count, in transmission order.
pub const MATRIX_PIXELS: usize = MATRIX_SIZE * MATRIX_SIZE;

/// On/off state for each matrix cell, in transmission order.
pub struct PixelBuffer {
    cells: [bool; MATRIX_PIXELS],
}

impl PixelBuffer {
    /// Create an all-off buffer.
    pub const fn new() -> Self {
        Self {
            cells: [false; MATRIX_PIXELS],
        }
    }

    /// Load the glyph for `digit` into the buffer.
    ///
    /// Returns false and leaves the buffer untouched for digits above 9;
    /// out-of-range values are a silent no-op, not an error.
    pub fn load_digit(&mut self, digit: u8) -> bool {
        let Some(rows) = DIGIT_PATTERNS.get(digit as usize) else {
            return false;
        };
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let row = rows[i / MATRIX_SIZE];
            let col = i % MATRIX_SIZE;
            *cell = row & (1 << (MATRIX_SIZE - 1 - col)) != 0;
        }
        true
    }

    /// Cell states in transmission order.
    pub fn cells(&self) -> &[bool; MATRIX_PIXELS] {
        &self.cells
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Consume the pending digit, if any, and load its glyph.
///
/// The take clears the pending slot, so the glyph is transmitted at most
/// once per input; a later pass with no new input finds nothing to do.
/// Returns true when the buffer now holds a fresh glyph to transmit.
pub fn render_pending(shared: &SharedState, buffer: &mut PixelBuffer) -> bool {
    match shared.take_pending_digit() {
        Some(digit) => buffer.load_digit(digit),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand a pattern-table entry the same way `load_digit` must.
    fn expand(rows: &[u8; MATRIX_SIZE]) -> [bool; MATRIX_PIXELS] {
        let mut cells = [false; MATRIX_PIXELS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = rows[i / MATRIX_SIZE] & (1 << (MATRIX_SIZE - 1 - i % MATRIX_SIZE)) != 0;
        }
        cells
    }

    #[test]
    fn test_every_digit_matches_table() {
        for digit in 0..=9u8 {
            let mut buffer = PixelBuffer::new();
            assert!(buffer.load_digit(digit));
            assert_eq!(
                buffer.cells(),
                &expand(&DIGIT_PATTERNS[digit as usize]),
                "digit {digit}"
            );
        }
    }

    #[test]
    fn test_zero_outline() {
        let mut buffer = PixelBuffer::new();
        buffer.load_digit(0);
        // Top and bottom rows fully lit
        assert!(buffer.cells()[..5].iter().all(|&c| c));
        assert!(buffer.cells()[20..].iter().all(|&c| c));
        // Middle rows: only the edges
        assert_eq!(&buffer.cells()[5..10], &[true, false, false, false, true]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut buffer = PixelBuffer::new();
        buffer.load_digit(8);
        let before = *buffer.cells();
        assert!(!buffer.load_digit(10));
        assert!(!buffer.load_digit(255));
        assert_eq!(buffer.cells(), &before);
    }

    #[test]
    fn test_render_pending_consumes_digit() {
        let shared = SharedState::new();
        let mut buffer = PixelBuffer::new();

        shared.set_pending_digit(5);
        assert!(render_pending(&shared, &mut buffer));
        assert_eq!(buffer.cells(), &expand(&DIGIT_PATTERNS[5]));

        // Consumed: a second pass transmits nothing
        assert!(!render_pending(&shared, &mut buffer));
    }

    #[test]
    fn test_render_pending_idle() {
        let shared = SharedState::new();
        let mut buffer = PixelBuffer::new();
        assert!(!render_pending(&shared, &mut buffer));
    }

    #[test]
    fn test_serial_digit_end_to_end() {
        use crate::input::serial::{self, SerialAction};

        let shared = SharedState::new();
        let mut buffer = PixelBuffer::new();

        assert_eq!(serial::accept(&shared, b'5'), SerialAction::Digit(5));
        assert_eq!(shared.display_char(), b'5');

        assert!(render_pending(&shared, &mut buffer));
        assert_eq!(buffer.cells(), &expand(&DIGIT_PATTERNS[5]));

        // No new input: nothing to transmit on the next pass
        assert!(!render_pending(&shared, &mut buffer));
    }
}
