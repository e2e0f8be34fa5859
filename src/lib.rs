//! Clock / voltmeter panel for a 4-digit common-anode 7-segment display
//! driven through a pair of chained 74HC595 shift registers.
//!
//! The library is `no_std` and generic over the `embedded-hal` 0.2 traits.
//! The RP2040 firmware in `main.rs` wires it to real pins.
#![cfg_attr(not(test), no_std)]

use core::convert::Infallible;

pub mod clock;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod segment;
pub mod shift;
pub mod voltage;

#[cfg(test)]
mod mock;

pub use clock::ClockState;
pub use controller::{Controller, Mode, StepReport};
pub use display::{DisplayValue, Multiplexer};
pub use error::{Error, Result};
pub use input::{AnalogInput, Button};
pub use shift::ShiftRegister;
pub use voltage::VoltageTracker;

/// Unwraps the result of a pin operation that cannot fail.
#[inline]
pub(crate) fn infallible<T>(result: core::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
