//! Button edge tasks
//!
//! One task instance per button. The edge wait stands in for the GPIO
//! interrupt: the task wakes on each falling edge with bounded latency,
//! runs the debounce gate and mirrors an accepted toggle onto the
//! button's RGB output pin.

use defmt::*;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::Instant;

use glint_core::input::ButtonChannel;

use crate::channels::SHARED;

/// Edge handler for one push-button.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut pin: Input<'static>,
    mut led: Output<'static>,
    channel: &'static ButtonChannel,
) {
    info!("button task started: {}", channel.id());

    loop {
        pin.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis() as u32;
        if let Some(on) = channel.on_falling_edge(&SHARED, now_ms) {
            led.set_level(if on { Level::High } else { Level::Low });
            info!(
                "button {}: {} {}",
                channel.id(),
                channel.rgb_channel(),
                if on { "ON" } else { "OFF" }
            );
        }
    }
}
