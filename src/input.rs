//! Push buttons and the potentiometer.

use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

use crate::config::{ADC_FULL_SCALE, ADC_REFERENCE_VOLTS};
use crate::infallible;

/// Button wired to ground with the input pulled up: pressed reads low.
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin<Error = Infallible>> Button<P> {
    pub fn active_low(pin: P) -> Self {
        Self { pin }
    }

    /// Live level, no latching.
    pub fn is_pressed(&self) -> bool {
        infallible(self.pin.is_low())
    }
}

/// Analog input read as a fraction of full scale.
pub trait AnalogInput {
    /// Returns 0.0 ..= 1.0
    fn read_normalized(&mut self) -> f32;
}

/// Maps a raw 12-bit ADC reading to 0.0 ..= 1.0.
pub fn normalize_adc(raw: u16) -> f32 {
    f32::from(raw.min(ADC_FULL_SCALE)) / f32::from(ADC_FULL_SCALE)
}

pub fn volts_from_normalized(normalized: f32) -> f32 {
    normalized * ADC_REFERENCE_VOLTS
}
