//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and menu bounds live here so
//! they can be tuned in one place.

// Menu

/// Highest menu index; the cursor is clamped to `0..=MAX_INDEX`.
pub const MAX_INDEX: u8 = 7;

/// Number of entries in the menu table.
pub const MENU_LEN: usize = MAX_INDEX as usize + 1;

// Timing

/// Encoder sampling period (ms). The sampler runs once per tick.
pub const SAMPLE_PERIOD_MS: u64 = 1;

/// Pause between main-loop passes (ms). Paces redraw polling only.
pub const LOOP_PERIOD_MS: u32 = 100;

/// Number of on/off cycles in the LED blink sequence.
pub const BLINK_CYCLES: u32 = 6;

/// Time the LEDs stay on, then off, in each blink cycle (ms).
pub const BLINK_HALF_PERIOD_MS: u32 = 500;

/// Scroll steps per direction in the heart sequence.
pub const HEART_SCROLL_STEPS: u32 = 16;

/// Delay after each heart scroll step (ms).
pub const HEART_STEP_MS: u32 = 500;

/// Pause after each heart sweep (ms).
pub const HEART_SETTLE_MS: u32 = 500;

/// How long the info message stays on screen (ms).
pub const INFO_HOLD_MS: u32 = 3000;

// Display geometry (HD44780-style 16x2 character grid)

/// Visible character columns.
pub const DISPLAY_COLS: usize = 16;

/// Visible character rows.
pub const DISPLAY_ROWS: usize = 2;

/// Width of one character cell on the OLED (pixels).
pub const CELL_WIDTH_PX: i32 = 8;

/// Height of one character cell on the OLED (pixels).
pub const CELL_HEIGHT_PX: i32 = 16;

/// Vertical offset of the first character row on the OLED (pixels).
pub const GRID_TOP_PX: i32 = 16;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your wiring.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Encoder button → P0.28
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   LED1..LED4     → P0.13..P0.16 (active-low)

/// Encoder push-button reads high when pressed.
///
/// The PMOD-style encoder drives the switch high; set to `false` for a bare
/// encoder switching to ground against the internal pull-up.
pub const BUTTON_ACTIVE_HIGH: bool = true;

/// Board LEDs light when the pin is driven low.
pub const LED_ACTIVE_LOW: bool = true;

/// Number of LEDs in the bank.
pub const LED_COUNT: usize = 4;
