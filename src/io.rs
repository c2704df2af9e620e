//! Collaborator contracts between the menu core and the board.
//!
//! The core never touches a peripheral directly. It talks to:
//!
//! - a [`CharDisplay`] - 16x2 character grid (rows 0-1, columns 0-15)
//! - a [`LedBank`] - the four board LEDs, driven as a mask
//! - [`EncoderPins`] - raw encoder pin snapshot
//! - a blocking [`embedded_hal::delay::DelayNs`] for pacing
//!
//! The firmware implements these on top of embassy-nrf; the tests implement
//! them with recording fakes.

use crate::encoder::PinSnapshot;

/// Custom glyphs registered with the display at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Right-pointing arrow used as the menu indicator.
    RightArrow,
    /// Heart used by the scroll sequence.
    Heart,
}

impl Glyph {
    /// Character code of the glyph in CGRAM.
    pub const fn code(self) -> u8 {
        match self {
            Glyph::RightArrow => 0x03,
            Glyph::Heart => 0x04,
        }
    }

    /// Look up a glyph by its character code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x03 => Some(Glyph::RightArrow),
            0x04 => Some(Glyph::Heart),
            _ => None,
        }
    }

    /// 5x8 bitmap, one row per byte, pixels in the low five bits.
    pub const fn bitmap(self) -> [u8; 8] {
        match self {
            Glyph::RightArrow => [
                0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000, 0b00000,
            ],
            Glyph::Heart => [
                0b00000, 0b01010, 0b11111, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000,
            ],
        }
    }
}

/// Whole-display shift direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Character-grid display.
///
/// Coordinates outside the visible grid are accepted; characters that land
/// outside it are simply not shown.
pub trait CharDisplay {
    /// Blank every cell, home the write cursor and undo any scroll.
    fn clear(&mut self);

    /// Move the write cursor.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write ASCII text at the write cursor, advancing it.
    fn write_str(&mut self, text: &str);

    /// Write a custom glyph at the write cursor, advancing it.
    fn write_glyph(&mut self, glyph: Glyph);

    /// Shift the whole display one column.
    fn scroll(&mut self, direction: ScrollDirection);

    /// Push buffered changes to the panel.
    ///
    /// Displays that update immediately keep the default no-op.
    fn present(&mut self) {}
}

/// LED output mask; bit `n` drives LED `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(pub u8);

impl LedMask {
    pub const ALL_OFF: LedMask = LedMask(0b0000);
    pub const ALL_ON: LedMask = LedMask(0b1111);

    /// Returns `true` if LED `index` is lit in this mask.
    pub const fn is_on(self, index: usize) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }
}

/// Bank of on/off LEDs.
pub trait LedBank {
    fn set(&mut self, mask: LedMask);
}

/// Source of raw encoder pin levels.
pub trait EncoderPins {
    /// Read phase A, phase B and the button as one snapshot.
    fn read_pins(&mut self) -> PinSnapshot;
}
