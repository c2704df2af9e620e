//! Encoder sampler: the 1 ms tick handler.
//!
//! Each tick compares the new pin snapshot with the previous one, moves the
//! cursor by the decoded step and raises a selection on a press edge.  The
//! handler never blocks and never logs; it is the only code that runs in
//! interrupt context.

use crate::config::SAMPLE_PERIOD_MS;
use crate::encoder::{press_edge, quadrature_delta, PinSnapshot};
use crate::io::EncoderPins;
use crate::menu::MenuState;

/// What one tick observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Decoded rotation step (-1, 0, +1).
    pub delta: i8,
    /// A released→pressed transition was seen.
    pub pressed: bool,
}

pub struct EncoderSampler {
    previous: PinSnapshot,
}

impl EncoderSampler {
    /// Seed with the pins as they read before the tick is started, so the
    /// first tick does not report a spurious edge.
    pub const fn new(initial: PinSnapshot) -> Self {
        Self { previous: initial }
    }

    /// Last snapshot seen.
    pub fn previous(&self) -> PinSnapshot {
        self.previous
    }

    /// Process one snapshot.
    pub fn tick(&mut self, now: PinSnapshot, state: &MenuState) -> TickOutcome {
        let delta = quadrature_delta(self.previous, now);
        let pressed = press_edge(self.previous, now);

        state.apply_rotation(delta as i32);
        if pressed {
            state.raise_selection();
        }

        self.previous = now;
        TickOutcome { delta, pressed }
    }
}

/// A job run on a fixed period by whatever timer the platform provides.
///
/// The firmware drives implementors from an embassy `Ticker`; tests call
/// [`Periodic::on_tick`] directly.
pub trait Periodic {
    /// Tick period in milliseconds.
    const PERIOD_MS: u64;

    fn on_tick(&mut self);
}

/// The sampler bound to its pins and the shared state.
pub struct SamplerTask<'a, P> {
    pins: P,
    sampler: EncoderSampler,
    state: &'a MenuState,
}

impl<'a, P: EncoderPins> SamplerTask<'a, P> {
    /// Read the pins once to seed the sampler.
    pub fn new(mut pins: P, state: &'a MenuState) -> Self {
        let initial = pins.read_pins();
        Self {
            pins,
            sampler: EncoderSampler::new(initial),
            state,
        }
    }
}

impl<P: EncoderPins> Periodic for SamplerTask<'_, P> {
    const PERIOD_MS: u64 = SAMPLE_PERIOD_MS;

    fn on_tick(&mut self) {
        let now = self.pins.read_pins();
        self.sampler.tick(now, self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_INDEX;
    use crate::encoder::FORWARD_CYCLE;

    const REST: PinSnapshot = PinSnapshot::new(false, false, false);

    /// Feed one full forward detent.
    fn detent_forward(sampler: &mut EncoderSampler, state: &MenuState) {
        for (a, b) in FORWARD_CYCLE {
            sampler.tick(PinSnapshot::new(a, b, false), state);
        }
    }

    #[test]
    fn forward_detent_moves_cursor_four_steps() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        detent_forward(&mut sampler, &state);
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn rotation_saturates_at_max() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        for _ in 0..5 {
            detent_forward(&mut sampler, &state);
            assert!(state.cursor() <= MAX_INDEX);
        }
        assert_eq!(state.cursor(), MAX_INDEX);
    }

    #[test]
    fn reverse_from_zero_stays_at_zero() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        // 00 -> 10 is one reverse step.
        let out = sampler.tick(PinSnapshot::new(true, false, false), &state);
        assert_eq!(out.delta, -1);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn invalid_transition_is_ignored_but_remembered() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        let jump = PinSnapshot::new(true, true, false);
        let out = sampler.tick(jump, &state);
        assert_eq!(out, TickOutcome::default());
        assert_eq!(state.cursor(), 0);
        assert_eq!(sampler.previous(), jump);

        // 11 -> 10 is a valid forward step from the remembered snapshot.
        sampler.tick(PinSnapshot::new(true, false, false), &state);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn press_raises_selection_once_per_edge() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        let held = REST.with_button(true);

        assert!(sampler.tick(held, &state).pressed);
        assert!(state.take_selection());

        // Holding the button does not repeat.
        for _ in 0..10 {
            assert!(!sampler.tick(held, &state).pressed);
        }
        assert!(!state.is_pending());
    }

    #[test]
    fn press_while_pending_is_coalesced() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST);
        for _ in 0..3 {
            sampler.tick(REST.with_button(true), &state);
            sampler.tick(REST, &state);
        }
        assert!(state.take_selection());
        assert!(!state.take_selection());
    }

    #[test]
    fn seeded_with_pressed_button_does_not_fire() {
        let state = MenuState::new();
        let mut sampler = EncoderSampler::new(REST.with_button(true));
        sampler.tick(REST.with_button(true), &state);
        assert!(!state.is_pending());
    }

    struct Scripted {
        samples: &'static [PinSnapshot],
        next: usize,
    }

    impl EncoderPins for Scripted {
        fn read_pins(&mut self) -> PinSnapshot {
            let s = self.samples[self.next.min(self.samples.len() - 1)];
            self.next += 1;
            s
        }
    }

    #[test]
    fn sampler_task_seeds_from_first_read() {
        static SAMPLES: [PinSnapshot; 3] = [
            PinSnapshot::new(false, false, true),
            PinSnapshot::new(false, false, true),
            PinSnapshot::new(false, true, false),
        ];
        let state = MenuState::new();
        let mut task = SamplerTask::new(
            Scripted {
                samples: &SAMPLES,
                next: 0,
            },
            &state,
        );
        task.on_tick();
        assert!(!state.is_pending());
        task.on_tick();
        assert_eq!(state.cursor(), 1);
        assert_eq!(<SamplerTask<'_, Scripted> as Periodic>::PERIOD_MS, 1);
    }
}
