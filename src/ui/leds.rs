//! Board LED bank (LED1..LED4 on the nRF52840-DK).

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use encmenu::config::{LED_ACTIVE_LOW, LED_COUNT};
use encmenu::io::{LedBank, LedMask};

pub struct BoardLeds {
    pins: [Output<'static>; LED_COUNT],
}

impl BoardLeds {
    /// Configure the pins with every LED off.
    pub fn new(pins: [AnyPin; LED_COUNT]) -> Self {
        let off = if LED_ACTIVE_LOW { Level::High } else { Level::Low };
        Self {
            pins: pins.map(|p| Output::new(p, off, OutputDrive::Standard)),
        }
    }
}

impl LedBank for BoardLeds {
    fn set(&mut self, mask: LedMask) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            let lit = mask.is_on(i);
            if lit != LED_ACTIVE_LOW {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }
}
