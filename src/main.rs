//! encmenu firmware for the nRF52840-DK.
//!
//! Two execution contexts:
//!
//! - **Sampler**: `sampler_task` on a high-priority interrupt executor,
//!   ticking every 1 ms.  Sole writer of the cursor and the pending flag.
//! - **Main loop**: thread mode, runs the [`Dispatcher`] forever.  Actions
//!   block it with busy-wait delays; the sampler keeps preempting it.

#![no_std]
#![no_main]

mod error;
mod ui;

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_nrf::gpio::Pin;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Delay;
use encmenu::{Dispatcher, MenuState};
use {defmt_rtt as _, panic_probe as _};

use crate::ui::display::{self, OledCharDisplay};
use crate::ui::encoder::{sampler_task, EncoderInputs};
use crate::ui::leds::BoardLeds;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Cursor and pending selection, shared by both contexts.
static MENU_STATE: MenuState = MenuState::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("encmenu starting");

    let mut leds = BoardLeds::new([
        p.P0_13.degrade(),
        p.P0_14.degrade(),
        p.P0_15.degrade(),
        p.P0_16.degrade(),
    ]);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = unwrap!(display::init(i2c));
    let mut screen = OledCharDisplay::new(oled);
    info!("Display: ready");

    let pins = EncoderInputs::new(p.P0_03.degrade(), p.P0_04.degrade(), p.P0_28.degrade());

    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let spawner = EXECUTOR_HIGH.start(interrupt::EGU1_SWI1);
    unwrap!(spawner.spawn(sampler_task(pins, &MENU_STATE)));

    let mut delay = Delay;
    Dispatcher::new().run(&MENU_STATE, &mut screen, &mut leds, &mut delay)
}
