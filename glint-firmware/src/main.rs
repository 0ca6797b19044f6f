//! Glint - Interactive LED Panel Firmware
//!
//! Main firmware binary for RP2040-based panel boards with an SSD1306
//! status OLED, a 5x5 WS2812 matrix, an RGB indicator LED and two
//! push-buttons.
//!
//! Console input is echoed to the OLED; digits additionally light a
//! glyph on the matrix; each button toggles one RGB channel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as UartConfig};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glint_core::config::{BoardConfig, TimingConfig};
use glint_core::input::{serial, ButtonChannel, ButtonId, SerialAction};
use glint_core::matrix::{self, PixelBuffer};
use glint_core::render;

use crate::channels::{CONSOLE_BYTES, SHARED};
use crate::display::Ssd1306;
use crate::ws2812::MatrixOutput;

mod channels;
mod display;
mod tasks;
mod ws2812;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cell for the console RX buffer (must live forever)
static RX_BUF: StaticCell<[u8; 32]> = StaticCell::new();

// Static cells for the button channels (edge tasks hold them forever)
static BUTTON_A: StaticCell<ButtonChannel> = StaticCell::new();
static BUTTON_B: StaticCell<ButtonChannel> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glint firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = BoardConfig::default();
    let timing = TimingConfig::default();
    info!(
        "wiring: buttons A=GP{} B=GP{}, matrix=GP{}, oled addr {=u8:#x}",
        board.buttons.a, board.buttons.b, board.matrix_pin, board.oled_addr
    );
    info!(
        "timing: tick {}ms, debounce {}ms",
        timing.tick_interval_ms, timing.debounce_window_ms
    );

    // Status OLED on I2C1 (SDA=GP14, SCL=GP15), 400 kHz
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut oled = Ssd1306::new(bus, board.oled_addr);
    match oled.init() {
        Ok(()) => {
            render::render_boot(&mut oled).ok();
            info!("OLED initialized");
        }
        Err(e) => {
            error!("failed to initialize OLED: {:?}", e);
        }
    }

    // RGB indicator outputs; red is wired but stays off in this demo
    let _red_led = Output::new(p.PIN_13, Level::Low);
    let green_led = Output::new(p.PIN_11, Level::Low);
    let blue_led = Output::new(p.PIN_12, Level::Low);

    // Buttons: pull-up inputs, a press is a falling edge
    let button_a_pin = Input::new(p.PIN_5, Pull::Up);
    let button_b_pin = Input::new(p.PIN_6, Pull::Up);

    let button_a = BUTTON_A.init(ButtonChannel::new(ButtonId::A, timing.debounce_window_ms));
    let button_b = BUTTON_B.init(ButtonChannel::new(ButtonId::B, timing.debounce_window_ms));

    // WS2812 matrix on GP7 via PIO0 + DMA
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    let mut matrix_out = MatrixOutput::new(ws, timing.matrix_settle_us);
    matrix_out.clear().await;
    info!("WS2812 matrix initialized");

    // Console UART0 (RX=GP1), 115200 baud default
    let rx_buf = RX_BUF.init([0u8; 32]);
    let console_rx = BufferedUartRx::new(p.UART0, Irqs, p.PIN_1, rx_buf, UartConfig::default());

    // Spawn input tasks; button A drives the blue channel, B the green one
    spawner
        .spawn(tasks::button_task(button_a_pin, blue_led, button_a))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b_pin, green_led, button_b))
        .unwrap();
    spawner.spawn(tasks::serial_rx_task(console_rx)).unwrap();

    info!("All tasks spawned, entering main loop");

    let mut pixels = PixelBuffer::new();
    let mut ticker = Ticker::every(Duration::from_millis(timing.tick_interval_ms as u64));

    loop {
        // At most one console byte per tick
        if let Ok(byte) = CONSOLE_BYTES.try_receive() {
            match serial::accept(&SHARED, byte) {
                SerialAction::Digit(d) => {
                    debug!("console digit {}", d);
                    // The matrix updates immediately, independent of the
                    // display's dirty-flag cycle
                    if matrix::render_pending(&SHARED, &mut pixels) {
                        matrix_out.show(&pixels).await;
                    }
                }
                SerialAction::Echo(c) => {
                    debug!("console echo {}", c as char);
                }
                SerialAction::Ignored => {}
            }
        }

        if SHARED.is_dirty() {
            if let Err(e) = render::render(&SHARED, &mut oled) {
                warn!("display update failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}
