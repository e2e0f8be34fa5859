//! Bit-banged link to two chained 74HC595 shift registers.
//!
//! Wire order per frame: latch low, segment byte MSB first, digit-select
//! byte MSB first, latch high. The segment byte ends up in the far register
//! of the chain; swapping either the byte or the bit order scrambles the
//! display.

use core::convert::Infallible;

use embedded_hal::digital::v2::{OutputPin, PinState};

use crate::infallible;

pub struct ShiftRegister<DATA, CLOCK, LATCH> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
}

impl<DATA, CLOCK, LATCH> ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = Infallible>,
    CLOCK: OutputPin<Error = Infallible>,
    LATCH: OutputPin<Error = Infallible>,
{
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    /// Shifts out one frame and latches both bytes onto the outputs at once.
    pub fn send(&mut self, segments: u8, select: u8) {
        infallible(self.latch.set_low());
        self.shift_out(segments);
        self.shift_out(select);
        infallible(self.latch.set_high());
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            let level = PinState::from(byte & (1 << bit) != 0);
            infallible(self.data.set_state(level));
            // 74HC595 samples data on the rising edge
            infallible(self.clock.set_high());
            infallible(self.clock.set_low());
        }
    }
}
