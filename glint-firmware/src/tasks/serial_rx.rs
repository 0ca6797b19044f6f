//! Console UART receive task
//!
//! Reads raw bytes from the buffered UART and feeds them into the
//! console channel. The main loop consumes at most one byte per tick;
//! input arriving faster than the channel drains is dropped.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::CONSOLE_BYTES;

/// Console RX task - forwards UART bytes to the main loop.
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx<'static, UART0>) {
    info!("console RX task started");

    let mut buf = [0u8; 16];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    if CONSOLE_BYTES.try_send(byte).is_err() {
                        warn!("console channel full, dropping byte");
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("console read error: {:?}", e);
            }
        }
    }
}
