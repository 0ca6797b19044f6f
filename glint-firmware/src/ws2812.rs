//! WS2812 matrix output
//!
//! Wraps the PIO-driven WS2812 strip driver behind the 25-cell pixel
//! buffer from the core crate. Each update transmits the whole matrix as
//! one frame, then waits a short settle time so the strip latches before
//! the next transmission can start.

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::Timer;
use smart_leds::RGB8;

use glint_core::matrix::{PixelBuffer, MATRIX_PIXELS};

/// Color of lit matrix cells.
const DIGIT_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

/// The 5x5 matrix as a single WS2812 strip.
pub struct MatrixOutput<'d> {
    ws: PioWs2812<'d, PIO0, 0, MATRIX_PIXELS>,
    settle_us: u32,
}

impl<'d> MatrixOutput<'d> {
    pub fn new(ws: PioWs2812<'d, PIO0, 0, MATRIX_PIXELS>, settle_us: u32) -> Self {
        Self { ws, settle_us }
    }

    /// Transmit the buffer as one frame, in cell transmission order.
    pub async fn show(&mut self, pixels: &PixelBuffer) {
        let mut frame = [RGB8::default(); MATRIX_PIXELS];
        for (led, &on) in frame.iter_mut().zip(pixels.cells()) {
            if on {
                *led = DIGIT_COLOR;
            }
        }
        self.ws.write(&frame).await;
        Timer::after_micros(self.settle_us as u64).await;
    }

    /// Blank the matrix.
    pub async fn clear(&mut self) {
        self.ws.write(&[RGB8::default(); MATRIX_PIXELS]).await;
        Timer::after_micros(self.settle_us as u64).await;
    }
}
