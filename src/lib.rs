//! Rotary-encoder menu core.
//!
//! Everything here is pure logic over the collaborator traits in [`io`],
//! so it builds for the host and is tested there.  The firmware in
//! `main.rs` (feature `embedded`) wires it to the nRF52840-DK.
//!
//! Usage: `cargo test` for the host tests.
//!
//! Layout, leaves first:
//!
//! - [`encoder`]: quadrature table and press-edge detection
//! - [`menu`]: shared cursor + pending-selection state (atomics)
//! - [`sampler`]: 1 ms tick handler and the [`sampler::Periodic`] seam
//! - [`actions`]: menu table, LED and display sequences
//! - [`dispatch`]: redraw-and-dispatch main loop
//! - [`grid`]: 16x2 character grid model used by the OLED renderer

#![cfg_attr(not(test), no_std)]

// defmt logging; compiles to nothing on host builds.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}

macro_rules! log_info {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    };
}

pub(crate) use log_debug;
pub(crate) use log_info;

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod encoder;
pub mod grid;
pub mod io;
pub mod menu;
pub mod sampler;

#[cfg(test)]
mod fakes;

pub use actions::{Action, MenuEntry, MENU};
pub use dispatch::{Dispatcher, Pass};
pub use encoder::PinSnapshot;
pub use grid::CharGrid;
pub use menu::MenuState;
pub use sampler::{EncoderSampler, Periodic, SamplerTask};
