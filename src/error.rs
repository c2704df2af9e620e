//! Unified error type for board bring-up.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The menu core itself has no failure paths: bad quadrature transitions,
//! cursor overflow and repeated presses are absorbed silently.

use defmt::Format;

/// Top-level error type used by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,
}
