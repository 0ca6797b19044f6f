//! Process-wide shared state
//!
//! The button edge handlers run concurrently with the main loop, so every
//! field they both touch is a single atomic of flag width. `Relaxed`
//! ordering is enough: each field is an independent flag with one writer
//! per context, and no reader derives invariants across fields.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Sentinel for "no digit pending" in the matrix digit slot.
pub const DIGIT_NONE: u8 = 0xFF;

/// The two RGB indicator channels the buttons control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbChannel {
    Green,
    Blue,
}

/// State shared between the edge handlers and the main loop.
///
/// Lives for the whole process; create it once as a `static`.
pub struct SharedState {
    green: AtomicBool,
    blue: AtomicBool,
    display_char: AtomicU8,
    dirty: AtomicBool,
    matrix_digit: AtomicU8,
}

impl SharedState {
    /// Create the initial state: both channels off, blank display
    /// character, nothing dirty, no digit pending.
    pub const fn new() -> Self {
        Self {
            green: AtomicBool::new(false),
            blue: AtomicBool::new(false),
            display_char: AtomicU8::new(b' '),
            dirty: AtomicBool::new(false),
            matrix_digit: AtomicU8::new(DIGIT_NONE),
        }
    }

    /// Invert a channel's toggle state and return the new value.
    pub fn toggle(&self, channel: RgbChannel) -> bool {
        !self.slot(channel).fetch_xor(true, Ordering::Relaxed)
    }

    /// Current toggle state of a channel.
    pub fn channel_on(&self, channel: RgbChannel) -> bool {
        self.slot(channel).load(Ordering::Relaxed)
    }

    fn slot(&self, channel: RgbChannel) -> &AtomicBool {
        match channel {
            RgbChannel::Green => &self.green,
            RgbChannel::Blue => &self.blue,
        }
    }

    /// Record the most recent input symbol.
    pub fn set_display_char(&self, c: u8) {
        self.display_char.store(c, Ordering::Relaxed);
    }

    /// Most recent input symbol.
    pub fn display_char(&self) -> u8 {
        self.display_char.load(Ordering::Relaxed)
    }

    /// Request a redraw. Idempotent: setting an already-set flag is a no-op,
    /// and the flag stays set until the render step clears it.
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Relaxed);
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }

    /// Clear the redraw request. Called by the render step after the frame
    /// has been flushed to the device.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::Relaxed);
    }

    /// Set the pending matrix digit.
    pub fn set_pending_digit(&self, digit: u8) {
        self.matrix_digit.store(digit, Ordering::Relaxed);
    }

    /// Take the pending matrix digit, leaving the slot empty.
    ///
    /// The swap makes consumption at-most-once: two readers cannot both
    /// observe the same digit.
    pub fn take_pending_digit(&self) -> Option<u8> {
        match self.matrix_digit.swap(DIGIT_NONE, Ordering::Relaxed) {
            DIGIT_NONE => None,
            d => Some(d),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let shared = SharedState::new();
        assert!(!shared.channel_on(RgbChannel::Green));
        assert!(!shared.channel_on(RgbChannel::Blue));
        assert_eq!(shared.display_char(), b' ');
        assert!(!shared.is_dirty());
        assert_eq!(shared.take_pending_digit(), None);
    }

    #[test]
    fn test_toggle_alternates() {
        let shared = SharedState::new();
        assert!(shared.toggle(RgbChannel::Blue));
        assert!(!shared.toggle(RgbChannel::Blue));
        assert!(shared.toggle(RgbChannel::Blue));
    }

    #[test]
    fn test_channels_independent() {
        let shared = SharedState::new();
        shared.toggle(RgbChannel::Green);
        assert!(shared.channel_on(RgbChannel::Green));
        assert!(!shared.channel_on(RgbChannel::Blue));
    }

    #[test]
    fn test_dirty_is_sticky_until_cleared() {
        let shared = SharedState::new();
        shared.mark_dirty();
        shared.mark_dirty();
        assert!(shared.is_dirty());
        shared.clear_dirty();
        assert!(!shared.is_dirty());
    }

    #[test]
    fn test_digit_consumed_once() {
        let shared = SharedState::new();
        shared.set_pending_digit(7);
        assert_eq!(shared.take_pending_digit(), Some(7));
        assert_eq!(shared.take_pending_digit(), None);
    }
}
