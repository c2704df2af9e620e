//! In-memory 16x2 character grid.
//!
//! Models the parts of an HD44780-style controller the menu relies on:
//! a cell buffer, a write cursor that advances after each character, and a
//! whole-display horizontal shift.  Characters written past the last
//! column are dropped.  `clear` homes the cursor and undoes the shift.
//!
//! The OLED renderer draws from [`CharGrid::visible`]; tests use the grid
//! directly to check what a user would see.

use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};
use crate::io::{CharDisplay, Glyph, ScrollDirection};

const BLANK: u8 = b' ';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    cells: [[u8; DISPLAY_COLS]; DISPLAY_ROWS],
    col: usize,
    row: usize,
    shift: i32,
    dirty: bool,
}

impl CharGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; DISPLAY_COLS]; DISPLAY_ROWS],
            col: 0,
            row: 0,
            shift: 0,
            dirty: true,
        }
    }

    /// Columns the content is shifted right by (negative = left).
    pub fn shift(&self) -> i32 {
        self.shift
    }

    /// Write cursor as `(col, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Stored character at a buffer position, ignoring the shift.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(BLANK)
    }

    /// Character visible at a screen position, after the shift.
    pub fn visible(&self, screen_col: usize, row: usize) -> u8 {
        let col = screen_col as i32 - self.shift;
        if col < 0 {
            return BLANK;
        }
        self.cell(col as usize, row)
    }

    /// Visible row as bytes.
    pub fn visible_row(&self, row: usize) -> [u8; DISPLAY_COLS] {
        let mut out = [BLANK; DISPLAY_COLS];
        for (col, c) in out.iter_mut().enumerate() {
            *c = self.visible(col, row);
        }
        out
    }

    /// `true` if every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == BLANK)
    }

    /// Returns and clears the "changed since last call" flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    fn put(&mut self, byte: u8) {
        if let Some(cell) = self
            .cells
            .get_mut(self.row)
            .and_then(|r| r.get_mut(self.col))
        {
            *cell = byte;
            self.dirty = true;
        }
        self.col = self.col.saturating_add(1);
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for CharGrid {
    fn clear(&mut self) {
        self.cells = [[BLANK; DISPLAY_COLS]; DISPLAY_ROWS];
        self.col = 0;
        self.row = 0;
        self.shift = 0;
        self.dirty = true;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = row as usize;
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.put(byte);
        }
    }

    fn write_glyph(&mut self, glyph: Glyph) {
        self.put(glyph.code());
    }

    fn scroll(&mut self, direction: ScrollDirection) {
        self.shift += match direction {
            ScrollDirection::Right => 1,
            ScrollDirection::Left => -1,
        };
        self.dirty = true;
    }
}
