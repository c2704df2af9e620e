//! Quadrature decoding and button edge detection.
//!
//! Phases are packed as `AB` (A in bit 1, B in bit 0).  A valid single step
//! changes exactly one phase; the direction follows the Gray-code order
//! `00 → 01 → 11 → 10 → 00` (forward).
//!
//! ```text
//!            cur: 00  01  10  11
//! prev 00:         0  +1  -1   0
//! prev 01:        -1   0   0  +1
//! prev 10:        +1   0   0  -1
//! prev 11:         0  -1  +1   0
//! ```
//!
//! No-change and double-step (both phases flipped) transitions map to 0,
//! which rejects contact bounce without a debounce timer.

/// Transition table indexed by `(prev_ab << 2) | cur_ab`.
const QUADRATURE_TABLE: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0, //
];

/// One sample of the three encoder inputs.
///
/// `button` is the logical level (true = pressed); pin polarity is handled
/// by whoever reads the pins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSnapshot {
    pub a: bool,
    pub b: bool,
    pub button: bool,
}

impl PinSnapshot {
    pub const fn new(a: bool, b: bool, button: bool) -> Self {
        Self { a, b, button }
    }

    /// Phase pair packed as `AB`.
    pub const fn phase(&self) -> u8 {
        ((self.a as u8) << 1) | self.b as u8
    }

    /// Same phases, different button level.
    pub const fn with_button(self, button: bool) -> Self {
        Self { button, ..self }
    }
}

/// Rotation step between two phase pairs: -1, 0 or +1.
pub fn quadrature_delta(prev: PinSnapshot, cur: PinSnapshot) -> i8 {
    QUADRATURE_TABLE[((prev.phase() << 2) | cur.phase()) as usize]
}

/// `true` iff the button went from released to pressed.
pub fn press_edge(prev: PinSnapshot, cur: PinSnapshot) -> bool {
    cur.button && !prev.button
}

/// Phase pairs of one full forward detent, starting from `00`.
pub const FORWARD_CYCLE: [(bool, bool); 4] =
    [(false, true), (true, true), (true, false), (false, false)];
