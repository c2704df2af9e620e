//! SSD1306 OLED presented as a 16x2 character display.
//!
//! Menu code writes into a [`CharGrid`]; `present` repaints the OLED from
//! the grid's visible cells, one 8x16 cell per character.  Custom glyphs are
//! drawn from their 5x8 bitmaps.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use encmenu::config::{CELL_HEIGHT_PX, CELL_WIDTH_PX, DISPLAY_COLS, DISPLAY_ROWS, GRID_TOP_PX};
use encmenu::io::{CharDisplay, Glyph, ScrollDirection};
use encmenu::CharGrid;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 and blank the panel.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    oled.init().map_err(|_| Error::Display)?;
    oled.clear_buffer();
    oled.flush().map_err(|_| Error::Display)?;
    Ok(oled)
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Top-left pixel of a character cell.
fn cell_origin(col: usize, row: usize) -> Point {
    Point::new(
        col as i32 * CELL_WIDTH_PX,
        GRID_TOP_PX + row as i32 * CELL_HEIGHT_PX,
    )
}

/// Character grid backed by an OLED.
pub struct OledCharDisplay<I2C> {
    oled: Oled<I2C>,
    grid: CharGrid,
}

impl<I2C> OledCharDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(oled: Oled<I2C>) -> Self {
        Self {
            oled,
            grid: CharGrid::new(),
        }
    }

    fn draw_cell(&mut self, byte: u8, origin: Point) {
        if let Some(glyph) = Glyph::from_code(byte) {
            // ImageRaw rows are MSB-first; glyph pixels sit in the low 5 bits.
            let rows = glyph.bitmap().map(|r| r << 3);
            let raw = ImageRaw::<BinaryColor>::new(&rows, 5);
            let _ = Image::new(&raw, origin + Point::new(1, 4)).draw(&mut self.oled);
        } else if byte.is_ascii_graphic() {
            let buf = [byte];
            if let Ok(s) = core::str::from_utf8(&buf) {
                let _ = Text::with_baseline(s, origin + Point::new(1, 3), text_style(), Baseline::Top)
                    .draw(&mut self.oled);
            }
        }
    }

    fn repaint(&mut self) {
        self.oled.clear_buffer();
        for row in 0..DISPLAY_ROWS {
            for col in 0..DISPLAY_COLS {
                let byte = self.grid.visible(col, row);
                self.draw_cell(byte, cell_origin(col, row));
            }
        }
        let _ = self.oled.flush();
    }
}

impl<I2C> CharDisplay for OledCharDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.grid.clear();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.grid.set_cursor(col, row);
    }

    fn write_str(&mut self, text: &str) {
        self.grid.write_str(text);
    }

    fn write_glyph(&mut self, glyph: Glyph) {
        self.grid.write_glyph(glyph);
    }

    fn scroll(&mut self, direction: ScrollDirection) {
        self.grid.scroll(direction);
    }

    fn present(&mut self) {
        if self.grid.take_dirty() {
            self.repaint();
        }
    }
}
