//! Encoder GPIO inputs and the 1 ms sampling task.
//!
//! Three inputs:
//!   - A, B   - quadrature phases, internal pull-ups
//!   - BUTTON - push switch, polarity from `config::BUTTON_ACTIVE_HIGH`
//!
//! The sampling task runs on the high-priority interrupt executor so that
//! the blocking main loop never delays it.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Ticker};
use encmenu::config::{BUTTON_ACTIVE_HIGH, SAMPLE_PERIOD_MS};
use encmenu::io::EncoderPins;
use encmenu::{MenuState, Periodic, PinSnapshot, SamplerTask};

/// Encoder pins configured as inputs.
pub struct EncoderInputs {
    a: Input<'static>,
    b: Input<'static>,
    button: Input<'static>,
}

impl EncoderInputs {
    pub fn new(a: AnyPin, b: AnyPin, button: AnyPin) -> Self {
        let button_pull = if BUTTON_ACTIVE_HIGH { Pull::Down } else { Pull::Up };
        Self {
            a: Input::new(a, Pull::Up),
            b: Input::new(b, Pull::Up),
            button: Input::new(button, button_pull),
        }
    }
}

impl EncoderPins for EncoderInputs {
    fn read_pins(&mut self) -> PinSnapshot {
        PinSnapshot::new(
            self.a.is_high(),
            self.b.is_high(),
            self.button.is_high() == BUTTON_ACTIVE_HIGH,
        )
    }
}

/// Drive a periodic job from an embassy ticker.
async fn drive<T: Periodic>(mut job: T) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(T::PERIOD_MS));
    loop {
        ticker.next().await;
        job.on_tick();
    }
}

/// Sample the encoder every tick and publish into `state`.
#[embassy_executor::task]
pub async fn sampler_task(pins: EncoderInputs, state: &'static MenuState) {
    info!("Encoder: sampling every {} ms", SAMPLE_PERIOD_MS);
    drive(SamplerTask::new(pins, state)).await
}
