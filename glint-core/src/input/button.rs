//! Button channel logic
//!
//! One `ButtonChannel` per physical button. The edge handler calls
//! [`ButtonChannel::on_falling_edge`] with the current monotonic time; the
//! channel applies the debounce gate and, on acceptance, flips its RGB
//! channel in shared state, records its label character for the display
//! and requests a redraw.
//!
//! Each channel is a two-state machine (released / toggled): one accepted
//! falling edge means one toggle, independent of how long the button is
//! held. The caller mirrors the returned toggle state onto the physical
//! output line.

use portable_atomic::{AtomicU32, Ordering};

use crate::input::debounce;
use crate::state::{RgbChannel, SharedState};

/// The two physical buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
}

/// Debounced input channel for one push-button.
pub struct ButtonChannel {
    id: ButtonId,
    channel: RgbChannel,
    label: u8,
    last_event_ms: AtomicU32,
    window_ms: u32,
}

impl ButtonChannel {
    /// Create a channel for the given button.
    ///
    /// Button A toggles the blue channel and echoes 'B'; button B toggles
    /// the green channel and echoes 'G'.
    pub const fn new(id: ButtonId, window_ms: u32) -> Self {
        let (channel, label) = match id {
            ButtonId::A => (RgbChannel::Blue, b'B'),
            ButtonId::B => (RgbChannel::Green, b'G'),
        };
        Self {
            id,
            channel,
            label,
            last_event_ms: AtomicU32::new(0),
            window_ms,
        }
    }

    /// Which button this channel belongs to.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// The RGB channel this button controls.
    pub fn rgb_channel(&self) -> RgbChannel {
        self.channel
    }

    /// Whether the channel has settled since its last accepted edge.
    pub fn is_settled(&self, now_ms: u32) -> bool {
        debounce::is_settled(now_ms, self.last_event_ms.load(Ordering::Relaxed), self.window_ms)
    }

    /// Handle a falling edge at `now_ms`.
    ///
    /// Returns `None` if the edge fell inside the debounce window (dropped,
    /// no side effects). Otherwise records the timestamp, toggles the RGB
    /// channel, stores the label character and marks the display dirty;
    /// returns the new toggle state for the caller to apply to the output
    /// pin.
    pub fn on_falling_edge(&self, shared: &SharedState, now_ms: u32) -> Option<bool> {
        if !self.is_settled(now_ms) {
            return None;
        }
        self.last_event_ms.store(now_ms, Ordering::Relaxed);

        let on = shared.toggle(self.channel);
        shared.set_display_char(self.label);
        shared.mark_dirty();
        Some(on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::debounce::DEFAULT_WINDOW_MS;

    fn channel_a() -> ButtonChannel {
        ButtonChannel::new(ButtonId::A, DEFAULT_WINDOW_MS)
    }

    #[test]
    fn test_spaced_edges_each_toggle_once() {
        let shared = SharedState::new();
        let button = channel_a();

        // Edges 200ms apart, starting late enough for the boot gate
        let mut expected = false;
        for i in 1..=6u32 {
            let accepted = button.on_falling_edge(&shared, i * 200);
            expected = !expected;
            assert_eq!(accepted, Some(expected));
            assert_eq!(shared.channel_on(RgbChannel::Blue), expected);
        }
    }

    #[test]
    fn test_bounce_burst_accepted_once() {
        let shared = SharedState::new();
        let button = channel_a();

        assert_eq!(button.on_falling_edge(&shared, 1000), Some(true));
        // Bounce: edges 5ms apart, all inside the window
        for t in [1005, 1010, 1050, 1149] {
            assert_eq!(button.on_falling_edge(&shared, t), None);
        }
        assert!(shared.channel_on(RgbChannel::Blue));
        // Next edge after the window toggles back off
        assert_eq!(button.on_falling_edge(&shared, 1151), Some(false));
    }

    #[test]
    fn test_dropped_edge_has_no_side_effects() {
        let shared = SharedState::new();
        let button = channel_a();

        button.on_falling_edge(&shared, 1000);
        shared.clear_dirty();
        shared.set_display_char(b'x');

        assert_eq!(button.on_falling_edge(&shared, 1001), None);
        assert!(!shared.is_dirty());
        assert_eq!(shared.display_char(), b'x');
    }

    #[test]
    fn test_accepted_edge_sets_label_and_dirty() {
        let shared = SharedState::new();
        let button = channel_a();

        assert_eq!(button.on_falling_edge(&shared, 1000), Some(true));
        assert!(shared.channel_on(RgbChannel::Blue));
        assert_eq!(shared.display_char(), b'B');
        assert!(shared.is_dirty());
    }

    #[test]
    fn test_button_b_drives_green() {
        let shared = SharedState::new();
        let button = ButtonChannel::new(ButtonId::B, DEFAULT_WINDOW_MS);

        assert_eq!(button.on_falling_edge(&shared, 1000), Some(true));
        assert!(shared.channel_on(RgbChannel::Green));
        assert!(!shared.channel_on(RgbChannel::Blue));
        assert_eq!(shared.display_char(), b'G');
    }

    #[test]
    fn test_channels_debounce_independently() {
        let shared = SharedState::new();
        let a = ButtonChannel::new(ButtonId::A, DEFAULT_WINDOW_MS);
        let b = ButtonChannel::new(ButtonId::B, DEFAULT_WINDOW_MS);

        assert_eq!(a.on_falling_edge(&shared, 1000), Some(true));
        // B's window is independent of A's last event
        assert_eq!(b.on_falling_edge(&shared, 1010), Some(true));
    }
}
