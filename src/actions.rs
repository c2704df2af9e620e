//! Menu table and the actions bound to each entry.
//!
//! Actions block the caller until they finish: there is no way to stop a
//! blink or scroll sequence once it has started.  The encoder sampler keeps
//! running underneath, so rotation and one press are still recorded.

use embedded_hal::delay::DelayNs;

use crate::config::{
    BLINK_CYCLES, BLINK_HALF_PERIOD_MS, DISPLAY_COLS, HEART_SCROLL_STEPS, HEART_SETTLE_MS,
    HEART_STEP_MS, INFO_HOLD_MS, MAX_INDEX, MENU_LEN,
};
use crate::io::{CharDisplay, Glyph, LedBank, LedMask, ScrollDirection};

/// Things a menu entry can do when selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Turn every LED off.
    LedsOff,
    /// Turn every LED on.
    LedsOn,
    /// Flash all LEDs on and off.
    Blink,
    /// Scroll a heart across the top row and back along the bottom row.
    HeartSequence,
    /// Show a fixed two-line message, then clear.
    DisplayInfo,
}

impl Action {
    /// `true` if running the action draws over the menu.
    pub const fn uses_display(self) -> bool {
        matches!(self, Action::HeartSequence | Action::DisplayInfo)
    }
}

/// One row of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub action: Action,
}

const fn entry(label: &'static str, action: Action) -> MenuEntry {
    MenuEntry { label, action }
}

/// The menu, indexed by cursor.
///
/// Entries 1 and 2 share an action; entry 4 is a plain blink of its own.
pub const MENU: [MenuEntry; MENU_LEN] = [
    entry("TURN OFF LEDS", Action::LedsOff),
    entry("TURN ON ALL LEDS", Action::LedsOn),
    entry("TURN ON LEDS", Action::LedsOn),
    entry("1FLASH LEDS", Action::Blink),
    entry("2FLASH LEDS", Action::Blink),
    entry("1Heart_Sequence", Action::HeartSequence),
    entry("2Heart_Sequence", Action::HeartSequence),
    entry("DISPLAY_INFO", Action::DisplayInfo),
];

/// Entry for a cursor value; out-of-range values pin to the last entry.
pub fn entry_at(cursor: u8) -> &'static MenuEntry {
    &MENU[cursor.min(MAX_INDEX) as usize]
}

/// Draw the menu screen for one entry: indicator at (0,0), label after it.
pub fn render_entry<D: CharDisplay>(display: &mut D, entry: &MenuEntry) {
    display.clear();
    display.set_cursor(0, 0);
    display.write_glyph(Glyph::RightArrow);
    display.set_cursor(1, 0);
    display.write_str(entry.label);
    display.present();
}

/// Run an action to completion.
pub fn run<D, L, W>(action: Action, display: &mut D, leds: &mut L, delay: &mut W)
where
    D: CharDisplay,
    L: LedBank,
    W: DelayNs,
{
    match action {
        Action::LedsOff => leds.set(LedMask::ALL_OFF),
        Action::LedsOn => leds.set(LedMask::ALL_ON),
        Action::Blink => blink(leds, delay),
        Action::HeartSequence => heart_sequence(display, delay),
        Action::DisplayInfo => display_info(display, delay),
    }
}

/// `BLINK_CYCLES` × (all on, wait, all off, wait).
pub fn blink<L: LedBank, W: DelayNs>(leds: &mut L, delay: &mut W) {
    for _ in 0..BLINK_CYCLES {
        leds.set(LedMask::ALL_ON);
        delay.delay_ms(BLINK_HALF_PERIOD_MS);
        leds.set(LedMask::ALL_OFF);
        delay.delay_ms(BLINK_HALF_PERIOD_MS);
    }
}

/// Heart enters top-left and scrolls right, then enters bottom-right and
/// scrolls left.
pub fn heart_sequence<D: CharDisplay, W: DelayNs>(display: &mut D, delay: &mut W) {
    heart_sweep(display, delay, 0, 0, ScrollDirection::Right);
    heart_sweep(display, delay, (DISPLAY_COLS - 1) as u8, 1, ScrollDirection::Left);
}

fn heart_sweep<D: CharDisplay, W: DelayNs>(
    display: &mut D,
    delay: &mut W,
    col: u8,
    row: u8,
    direction: ScrollDirection,
) {
    display.clear();
    display.set_cursor(col, row);
    display.write_glyph(Glyph::Heart);
    display.present();
    for _ in 0..HEART_SCROLL_STEPS {
        display.scroll(direction);
        display.present();
        delay.delay_ms(HEART_STEP_MS);
    }
    delay.delay_ms(HEART_SETTLE_MS);
}

/// "DISPLAY" over "TEST" for `INFO_HOLD_MS`, then a blank screen.
pub fn display_info<D: CharDisplay, W: DelayNs>(display: &mut D, delay: &mut W) {
    display.clear();
    display.set_cursor(0, 0);
    display.write_str("DISPLAY");
    display.set_cursor(0, 1);
    display.write_str("TEST");
    display.present();
    delay.delay_ms(INFO_HOLD_MS);
    display.clear();
    display.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{Call, Recorder};

    #[test]
    fn table_matches_menu_bounds() {
        assert_eq!(MENU.len(), MAX_INDEX as usize + 1);
        assert!(MENU.iter().all(|e| !e.label.is_empty()));
    }

    #[test]
    fn duplicate_on_entries_are_preserved() {
        assert_eq!(MENU[1].action, Action::LedsOn);
        assert_eq!(MENU[2].action, Action::LedsOn);
    }

    #[test]
    fn entry_four_is_independent_blink() {
        assert_eq!(MENU[3].action, Action::Blink);
        assert_eq!(MENU[4].action, Action::Blink);
    }

    #[test]
    fn entry_at_pins_out_of_range() {
        assert_eq!(entry_at(200), &MENU[MAX_INDEX as usize]);
    }

    #[test]
    fn render_draws_arrow_then_label() {
        let mut rec = Recorder::new();
        render_entry(&mut rec.display, &MENU[3]);
        assert_eq!(
            rec.calls(),
            &[
                Call::Clear,
                Call::SetCursor(0, 0),
                Call::Glyph(Glyph::RightArrow),
                Call::SetCursor(1, 0),
                Call::text("1FLASH LEDS"),
                Call::Present,
            ]
        );
    }

    #[test]
    fn leds_off_is_a_single_led_write() {
        let mut rec = Recorder::new();
        run(Action::LedsOff, &mut rec.display, &mut rec.leds, &mut rec.delay);
        assert_eq!(rec.calls(), &[Call::Leds(LedMask::ALL_OFF)]);
    }

    #[test]
    fn blink_alternates_six_times_with_half_second_pacing() {
        let mut rec = Recorder::new();
        run(Action::Blink, &mut rec.display, &mut rec.leds, &mut rec.delay);

        let calls = rec.calls();
        assert_eq!(calls.len(), 24);
        for cycle in calls.chunks(4) {
            assert_eq!(
                cycle,
                &[
                    Call::Leds(LedMask::ALL_ON),
                    Call::DelayMs(500),
                    Call::Leds(LedMask::ALL_OFF),
                    Call::DelayMs(500),
                ]
            );
        }
        assert_eq!(rec.elapsed_ms(), 6_000);
    }

    #[test]
    fn heart_sequence_scrolls_sixteen_each_way() {
        let mut rec = Recorder::new();
        heart_sequence(&mut rec.display, &mut rec.delay);

        let calls = rec.calls();
        let right = calls
            .iter()
            .filter(|c| **c == Call::Scroll(ScrollDirection::Right))
            .count();
        let left = calls
            .iter()
            .filter(|c| **c == Call::Scroll(ScrollDirection::Left))
            .count();
        assert_eq!((right, left), (16, 16));
        assert_eq!(rec.elapsed_ms(), 17_000);
        assert!(calls.contains(&Call::SetCursor(15, 1)));
        assert_eq!(
            calls.iter().filter(|c| **c == Call::Glyph(Glyph::Heart)).count(),
            2
        );
    }

    #[test]
    fn display_info_holds_then_clears() {
        let mut rec = Recorder::new();
        display_info(&mut rec.display, &mut rec.delay);
        assert_eq!(
            rec.calls(),
            &[
                Call::Clear,
                Call::SetCursor(0, 0),
                Call::text("DISPLAY"),
                Call::SetCursor(0, 1),
                Call::text("TEST"),
                Call::Present,
                Call::DelayMs(3000),
                Call::Clear,
                Call::Present,
            ]
        );
    }

    #[test]
    fn only_screen_actions_use_display() {
        assert!(!Action::LedsOff.uses_display());
        assert!(!Action::LedsOn.uses_display());
        assert!(!Action::Blink.uses_display());
        assert!(Action::HeartSequence.uses_display());
        assert!(Action::DisplayInfo.uses_display());
    }
}
