//! Board wiring and timing configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::debounce;

/// Button input pins (pull-up, falling-edge triggered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonPins {
    pub a: u8,
    pub b: u8,
}

/// RGB indicator output pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbPins {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// I2C bus pins for the OLED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cPins {
    pub sda: u8,
    pub scl: u8,
}

/// Wiring of the panel board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub buttons: ButtonPins,
    pub rgb: RgbPins,
    pub i2c: I2cPins,
    /// WS2812 matrix data pin.
    pub matrix_pin: u8,
    /// OLED I2C address.
    pub oled_addr: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonPins { a: 5, b: 6 },
            rgb: RgbPins {
                red: 13,
                green: 11,
                blue: 12,
            },
            i2c: I2cPins { sda: 14, scl: 15 },
            matrix_pin: 7,
            oled_addr: 0x3C,
        }
    }
}

/// Timing parameters of the main loop and input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Main loop tick interval.
    pub tick_interval_ms: u32,
    /// Debounce window between accepted button edges.
    pub debounce_window_ms: u32,
    /// Settle time after a matrix frame, letting the strip latch.
    pub matrix_settle_us: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 10,
            debounce_window_ms: debounce::DEFAULT_WINDOW_MS,
            matrix_settle_us: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring() {
        let board = BoardConfig::default();
        assert_eq!(board.buttons.a, 5);
        assert_eq!(board.buttons.b, 6);
        assert_eq!(board.oled_addr, 0x3C);
    }

    #[test]
    fn test_default_timing() {
        let timing = TimingConfig::default();
        assert_eq!(timing.debounce_window_ms, debounce::DEFAULT_WINDOW_MS);
        assert!(timing.tick_interval_ms > 0);
    }
}
