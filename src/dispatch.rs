//! Menu dispatcher: the cooperative main loop.
//!
//! Each pass:
//!
//! 1. Snapshot the cursor once.  If it differs from the last rendered
//!    value, redraw the menu from that snapshot.
//! 2. Take the pending selection.  If there was one, read the cursor again
//!    (a rotation after the press wins) and run that entry's action to
//!    completion.
//! 3. If the action drew on the display, forget the rendered value so the
//!    menu comes back on the next pass.

use embedded_hal::delay::DelayNs;

use crate::actions::{self, entry_at, Action};
use crate::config::LOOP_PERIOD_MS;
use crate::io::{CharDisplay, LedBank};
use crate::menu::MenuState;

/// What a single pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pass {
    /// Cursor value the menu was redrawn for.
    pub redrawn: Option<u8>,
    /// Cursor value and action that ran.
    pub executed: Option<(u8, Action)>,
}

pub struct Dispatcher {
    rendered: Option<u8>,
}

impl Dispatcher {
    /// Nothing rendered yet, so the first pass always draws.
    pub const fn new() -> Self {
        Self { rendered: None }
    }

    /// Cursor value currently on screen, if the menu is showing.
    pub fn rendered(&self) -> Option<u8> {
        self.rendered
    }

    /// Run one pass without the pacing delay.
    pub fn poll<D, L, W>(
        &mut self,
        state: &MenuState,
        display: &mut D,
        leds: &mut L,
        delay: &mut W,
    ) -> Pass
    where
        D: CharDisplay,
        L: LedBank,
        W: DelayNs,
    {
        let mut pass = Pass::default();

        let cursor = state.cursor();
        if self.rendered != Some(cursor) {
            let entry = entry_at(cursor);
            actions::render_entry(display, entry);
            self.rendered = Some(cursor);
            pass.redrawn = Some(cursor);
            crate::log_debug!("menu: show {} \"{}\"", cursor, entry.label);
        }

        if state.take_selection() {
            let cursor = state.cursor();
            let action = entry_at(cursor).action;
            crate::log_info!("menu: select {} -> {}", cursor, action);

            actions::run(action, display, leds, delay);

            if action.uses_display() {
                self.rendered = None;
            }
            pass.executed = Some((cursor, action));
        }

        pass
    }

    /// One pass followed by the loop pacing delay.
    pub fn step<D, L, W>(
        &mut self,
        state: &MenuState,
        display: &mut D,
        leds: &mut L,
        delay: &mut W,
    ) -> Pass
    where
        D: CharDisplay,
        L: LedBank,
        W: DelayNs,
    {
        let pass = self.poll(state, display, leds, delay);
        delay.delay_ms(LOOP_PERIOD_MS);
        pass
    }

    /// Run forever.
    pub fn run<D, L, W>(mut self, state: &MenuState, display: &mut D, leds: &mut L, delay: &mut W) -> !
    where
        D: CharDisplay,
        L: LedBank,
        W: DelayNs,
    {
        loop {
            self.step(state, display, leds, delay);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
