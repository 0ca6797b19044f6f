//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via blocking I2C.
//! Optimized for text display with 6x8 font (21 chars x 8 rows).

use embedded_hal::i2c::I2c;

use glint_core::traits::StatusDisplay;

use super::font::FONT_6X8;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    addr: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver at the given I2C address.
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self {
            i2c,
            addr,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x02,                  // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::ENTIRE_DISPLAY_RESUME,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.addr, &[0x00, cmd])
    }

    /// Put one glyph into the frame buffer at a character cell.
    fn put_glyph(&mut self, row: u8, col: u8, ch: char) {
        if row >= PAGES as u8 {
            return;
        }
        let page = &mut self.buffer[row as usize];
        let x = (col as usize) * 6;
        if x + 6 > WIDTH {
            return;
        }

        let glyph = get_glyph(ch);
        page[x..x + 6].copy_from_slice(glyph);
    }

    /// Set display contrast (0-255)
    #[allow(dead_code)]
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn display on/off
    #[allow(dead_code)]
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }
}

impl<I2C> StatusDisplay for Ssd1306<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), I2C::Error> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    /// Draw a character at the specified cell (row 0-7, col 0-20)
    fn draw_char(&mut self, row: u8, col: u8, ch: char) -> Result<(), I2C::Error> {
        self.put_glyph(row, col, ch);
        Ok(())
    }

    /// Draw text at the specified position (row 0-7, col 0-20)
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), I2C::Error> {
        for (i, ch) in text.chars().enumerate() {
            self.put_glyph(row, col + i as u8, ch);
        }
        Ok(())
    }

    /// Flush the frame buffer to the display
    fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            // Set page address
            self.command(cmd::SET_PAGE_ADDR | (page as u8))?;
            // Set column address
            self.command(cmd::SET_LOW_COLUMN | 0)?;
            self.command(cmd::SET_HIGH_COLUMN | 0)?;

            // Send page data
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(self.addr, &data)?;
        }

        Ok(())
    }
}

/// Get the 6x8 glyph for a character
fn get_glyph(ch: char) -> &'static [u8; 6] {
    let idx = ch as usize;
    if (32..128).contains(&idx) {
        &FONT_6X8[idx - 32]
    } else {
        &FONT_6X8[0] // Space for unknown chars
    }
}
