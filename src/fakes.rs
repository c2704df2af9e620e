//! Recording collaborators for unit tests.
//!
//! Display, LEDs and delay share one call log so tests can assert on the
//! interleaving of screen writes, LED writes and waits.

use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::io::{CharDisplay, Glyph, LedBank, LedMask, ScrollDirection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Clear,
    SetCursor(u8, u8),
    Text(String),
    Glyph(Glyph),
    Scroll(ScrollDirection),
    Present,
    Leds(LedMask),
    DelayMs(u32),
}

impl Call {
    pub fn text(s: &str) -> Self {
        Call::Text(s.into())
    }

    pub fn is_display(&self) -> bool {
        !matches!(self, Call::Leds(_) | Call::DelayMs(_))
    }
}

type Log = Rc<RefCell<Vec<Call>>>;

pub struct FakeDisplay {
    log: Log,
}

impl CharDisplay for FakeDisplay {
    fn clear(&mut self) {
        self.log.borrow_mut().push(Call::Clear);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.log.borrow_mut().push(Call::SetCursor(col, row));
    }

    fn write_str(&mut self, text: &str) {
        self.log.borrow_mut().push(Call::text(text));
    }

    fn write_glyph(&mut self, glyph: Glyph) {
        self.log.borrow_mut().push(Call::Glyph(glyph));
    }

    fn scroll(&mut self, direction: ScrollDirection) {
        self.log.borrow_mut().push(Call::Scroll(direction));
    }

    fn present(&mut self) {
        self.log.borrow_mut().push(Call::Present);
    }
}

pub struct FakeLeds {
    log: Log,
}

impl LedBank for FakeLeds {
    fn set(&mut self, mask: LedMask) {
        self.log.borrow_mut().push(Call::Leds(mask));
    }
}

pub struct FakeDelay {
    log: Log,
    elapsed_ms: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms as u64;
        self.log.borrow_mut().push(Call::DelayMs(ms));
    }
}

pub struct Recorder {
    pub display: FakeDisplay,
    pub leds: FakeLeds,
    pub delay: FakeDelay,
    log: Log,
}

impl Recorder {
    pub fn new() -> Self {
        let log: Log = Rc::default();
        Self {
            display: FakeDisplay { log: log.clone() },
            leds: FakeLeds { log: log.clone() },
            delay: FakeDelay {
                log: log.clone(),
                elapsed_ms: 0,
            },
            log,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn display_calls(&self) -> usize {
        self.log.borrow().iter().filter(|c| c.is_display()).count()
    }

    pub fn clear_log(&mut self) {
        self.log.borrow_mut().clear();
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.delay.elapsed_ms
    }
}
