//! Board side of the menu - OLED, encoder inputs and LEDs.
//!
//! Each module implements one of the `encmenu::io` contracts on top of
//! embassy-nrf.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, shown as a 16x2 character grid
//! - **Encoder**: quadrature phases + push button, sampled every 1 ms
//! - **LEDs**: the four board LEDs (active-low)

pub mod display;
pub mod encoder;
pub mod leds;
