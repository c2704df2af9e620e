//! Shared menu state: bounded cursor plus a one-shot selection flag.
//!
//! Written by the encoder sampler (interrupt priority), read and consumed
//! by the dispatcher (thread mode).  The sampler is the only writer of the
//! cursor and the only setter of the flag; the dispatcher is the only
//! clearer.  Writes are published with `Release` and observed with
//! `Acquire`, so a selection raised in a tick is never seen without the
//! cursor value written in that same tick.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::MAX_INDEX;

/// Clamp `cursor + delta` to `0..=MAX_INDEX`.
pub fn step_cursor(cursor: u8, delta: i32) -> u8 {
    (cursor as i32).saturating_add(delta).clamp(0, MAX_INDEX as i32) as u8
}

pub struct MenuState {
    cursor: AtomicU8,
    pending: AtomicBool,
}

impl MenuState {
    /// Cursor at 0, nothing pending.
    pub const fn new() -> Self {
        Self {
            cursor: AtomicU8::new(0),
            pending: AtomicBool::new(false),
        }
    }

    /// Current cursor, always within `0..=MAX_INDEX`.
    pub fn cursor(&self) -> u8 {
        self.cursor.load(Ordering::Acquire)
    }

    /// Move the cursor by `delta`, saturating at both ends.
    ///
    /// Sampler context only.
    pub fn apply_rotation(&self, delta: i32) {
        if delta == 0 {
            return;
        }
        let cur = self.cursor.load(Ordering::Relaxed);
        self.cursor.store(step_cursor(cur, delta), Ordering::Release);
    }

    /// Mark a selection as pending.  A selection already pending absorbs
    /// this one.
    ///
    /// Sampler context only.
    pub fn raise_selection(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// `true` while a selection waits for the dispatcher.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consume the pending selection, returning whether there was one.
    ///
    /// The flag is cleared in the same atomic step, so a press raised after
    /// this call stays pending for the next pass.
    pub fn take_selection(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
