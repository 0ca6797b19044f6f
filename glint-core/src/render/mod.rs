//! Status screen rendering
//!
//! The render step runs only when the dirty flag is set. It redraws the
//! full frame every time: the most recent input character centered, plus
//! ON/OFF labels for both RGB channels, then flushes and clears the flag.

use core::fmt::Write;

use heapless::String;

use crate::state::{RgbChannel, SharedState};
use crate::traits::StatusDisplay;

/// Character cell of the centered echo character.
pub const CHAR_ROW: u8 = 2;
pub const CHAR_COL: u8 = 10;

/// Rows of the channel status lines.
pub const GREEN_ROW: u8 = 5;
pub const BLUE_ROW: u8 = 6;

/// Column the status lines start at.
pub const STATUS_COL: u8 = 1;

/// Display width in character cells.
pub const DISPLAY_COLS: usize = 21;

fn state_label(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

/// Redraw the full status screen and flush it to the device.
///
/// Clears the dirty flag only after a successful flush, so a failed write
/// leaves the redraw pending for the next tick.
pub fn render<D: StatusDisplay>(shared: &SharedState, display: &mut D) -> Result<(), D::Error> {
    display.clear()?;

    display.draw_char(CHAR_ROW, CHAR_COL, shared.display_char() as char)?;

    let mut line: String<DISPLAY_COLS> = String::new();
    let _ = write!(line, "Green: {}", state_label(shared.channel_on(RgbChannel::Green)));
    display.draw_text(GREEN_ROW, STATUS_COL, &line)?;

    line.clear();
    let _ = write!(line, "Blue:  {}", state_label(shared.channel_on(RgbChannel::Blue)));
    display.draw_text(BLUE_ROW, STATUS_COL, &line)?;

    display.flush()?;
    shared.clear_dirty();
    Ok(())
}

/// Draw the boot splash shown until the first input arrives.
pub fn render_boot<D: StatusDisplay>(display: &mut D) -> Result<(), D::Error> {
    display.clear()?;
    display.draw_text(3, 4, "System ready")?;
    display.flush()
}

#[cfg(test)]
mod tests {
    use std::string::String;
    use std::vec::Vec;

    use super::*;
    use crate::input::{button, debounce, serial};

    /// Records draw calls instead of talking to hardware.
    #[derive(Default)]
    struct MockDisplay {
        cleared: u32,
        flushed: u32,
        chars: Vec<(u8, u8, char)>,
        texts: Vec<(u8, u8, String)>,
        fail_flush: bool,
    }

    impl StatusDisplay for MockDisplay {
        type Error = ();

        fn clear(&mut self) -> Result<(), ()> {
            self.cleared += 1;
            self.chars.clear();
            self.texts.clear();
            Ok(())
        }

        fn draw_char(&mut self, row: u8, col: u8, ch: char) -> Result<(), ()> {
            self.chars.push((row, col, ch));
            Ok(())
        }

        fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), ()> {
            self.texts.push((row, col, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            if self.fail_flush {
                return Err(());
            }
            self.flushed += 1;
            Ok(())
        }
    }

    #[test]
    fn test_render_layout() {
        let shared = SharedState::new();
        shared.set_display_char(b'5');
        shared.toggle(RgbChannel::Green);
        shared.mark_dirty();

        let mut display = MockDisplay::default();
        render(&shared, &mut display).unwrap();

        assert_eq!(display.cleared, 1);
        assert_eq!(display.flushed, 1);
        assert_eq!(display.chars, [(CHAR_ROW, CHAR_COL, '5')]);
        assert_eq!(
            display.texts,
            [
                (GREEN_ROW, STATUS_COL, String::from("Green: ON")),
                (BLUE_ROW, STATUS_COL, String::from("Blue:  OFF")),
            ]
        );
    }

    #[test]
    fn test_render_clears_dirty() {
        let shared = SharedState::new();
        shared.mark_dirty();

        let mut display = MockDisplay::default();
        render(&shared, &mut display).unwrap();
        assert!(!shared.is_dirty());
    }

    #[test]
    fn test_failed_flush_leaves_dirty_set() {
        let shared = SharedState::new();
        shared.mark_dirty();

        let mut display = MockDisplay {
            fail_flush: true,
            ..Default::default()
        };
        assert!(render(&shared, &mut display).is_err());
        assert!(shared.is_dirty());
    }

    #[test]
    fn test_serial_char_then_render() {
        let shared = SharedState::new();
        serial::accept(&shared, b'k');

        let mut display = MockDisplay::default();
        render(&shared, &mut display).unwrap();

        assert_eq!(display.chars, [(CHAR_ROW, CHAR_COL, 'k')]);
        assert!(!shared.is_dirty());
    }

    #[test]
    fn test_button_press_then_render() {
        let shared = SharedState::new();
        let button = button::ButtonChannel::new(button::ButtonId::A, debounce::DEFAULT_WINDOW_MS);
        button.on_falling_edge(&shared, 1000);

        let mut display = MockDisplay::default();
        render(&shared, &mut display).unwrap();

        assert_eq!(display.chars, [(CHAR_ROW, CHAR_COL, 'B')]);
        assert_eq!(display.texts[1].2, "Blue:  ON");
    }
}
