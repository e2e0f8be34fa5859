//! Main-loop logic: buttons, potentiometer and display.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use rtic_core::Mutex;

use crate::clock::ClockState;
use crate::config::DEBOUNCE_MS;
use crate::display::{DisplayValue, Multiplexer};
use crate::input::{volts_from_normalized, AnalogInput, Button};
use crate::voltage::VoltageTracker;

/// What the display shows, chosen every pass by the live level of S3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    ShowTime,
    ShowVoltage,
}

/// Outcome of one [`Controller::step`], for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub mode: Mode,
    /// The clock was reset this pass
    pub reset: bool,
    pub volts: f32,
    pub shown: DisplayValue,
}

pub struct Controller<DATA, CLOCK, LATCH, RESET, SELECT, POT, DELAY> {
    display: Multiplexer<DATA, CLOCK, LATCH>,
    reset_button: Button<RESET>,
    mode_button: Button<SELECT>,
    pot: POT,
    delay: DELAY,
    voltage: VoltageTracker,
}

impl<DATA, CLOCK, LATCH, RESET, SELECT, POT, DELAY>
    Controller<DATA, CLOCK, LATCH, RESET, SELECT, POT, DELAY>
where
    DATA: OutputPin<Error = Infallible>,
    CLOCK: OutputPin<Error = Infallible>,
    LATCH: OutputPin<Error = Infallible>,
    RESET: InputPin<Error = Infallible>,
    SELECT: InputPin<Error = Infallible>,
    POT: AnalogInput,
    DELAY: DelayMs<u32>,
{
    pub fn new(
        display: Multiplexer<DATA, CLOCK, LATCH>,
        reset_button: Button<RESET>,
        mode_button: Button<SELECT>,
        pot: POT,
        delay: DELAY,
    ) -> Self {
        Self {
            display,
            reset_button,
            mode_button,
            pot,
            delay,
            voltage: VoltageTracker::new(),
        }
    }

    /// One iteration of the main loop.
    ///
    /// The clock is only touched inside `lock`, so the tick interrupt never
    /// sees or produces a half-updated value. Blocks for the debounce time
    /// after a reset and for the digit settle time while rendering.
    pub fn step<M>(&mut self, clock: &mut M) -> StepReport
    where
        M: Mutex<T = ClockState>,
    {
        let reset = self.reset_button.is_pressed();
        if reset {
            clock.lock(|c| c.reset());
            self.delay.delay_ms(DEBOUNCE_MS);
        }

        let volts = volts_from_normalized(self.pot.read_normalized());
        self.voltage.sample(volts);

        let (mode, shown) = if self.mode_button.is_pressed() {
            (Mode::ShowVoltage, DisplayValue::from_volts(volts))
        } else {
            let time = clock.lock(|c| c.as_time_value());
            (Mode::ShowTime, DisplayValue::plain(u32::from(time)))
        };
        self.display.render(shown, &mut self.delay);

        StepReport {
            mode,
            reset,
            volts,
            shown,
        }
    }

    pub fn voltage(&self) -> &VoltageTracker {
        &self.voltage
    }
}
