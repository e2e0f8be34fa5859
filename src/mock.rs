//! Recording stand-ins for pins, delays and the ADC.
//!
//! Output pins and delays share one [`Log`] so the interleaving of Data,
//! Clock, Latch and settle delays can be checked as a single sequence.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::input::AnalogInput;
use crate::shift::ShiftRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    DelayMs(u32),
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }
}

pub struct MockPin {
    line: Line,
    log: Log,
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Pin(self.line, true));
        Ok(())
    }
}

pub struct MockDelay(Log);

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self(log.clone())
    }
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}

/// Pull-up input: released reads high.
#[derive(Clone)]
pub struct MockButton(Rc<Cell<bool>>);

impl MockButton {
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn press(&self) {
        self.0.set(false);
    }

    pub fn release(&self) {
        self.0.set(true);
    }
}

impl InputPin for MockButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

#[derive(Clone)]
pub struct MockAnalog(Rc<Cell<f32>>);

impl MockAnalog {
    pub fn new(normalized: f32) -> Self {
        Self(Rc::new(Cell::new(normalized)))
    }

    pub fn set(&self, normalized: f32) {
        self.0.set(normalized);
    }
}

impl AnalogInput for MockAnalog {
    fn read_normalized(&mut self) -> f32 {
        self.0.get()
    }
}

pub type MockLink = ShiftRegister<MockPin, MockPin, MockPin>;

pub fn link(log: &Log) -> MockLink {
    let pin = |line| MockPin {
        line,
        log: log.clone(),
    };
    ShiftRegister::new(pin(Line::Data), pin(Line::Clock), pin(Line::Latch))
}

/// Data level at every rising clock edge.
pub fn sampled_bits(events: &[Event]) -> Vec<bool> {
    let mut data = false;
    let mut bits = Vec::new();
    for event in events {
        match event {
            Event::Pin(Line::Data, level) => data = *level,
            Event::Pin(Line::Clock, true) => bits.push(data),
            _ => {}
        }
    }
    bits
}

/// Replays the events through a 16-bit register chain and returns the
/// `(segments, select)` pair presented on each latch rising edge.
pub fn frames(events: &[Event]) -> Vec<(u8, u8)> {
    let mut data = false;
    let mut chain: u16 = 0;
    let mut frames = Vec::new();
    for event in events {
        match event {
            Event::Pin(Line::Data, level) => data = *level,
            Event::Pin(Line::Clock, true) => chain = (chain << 1) | u16::from(data),
            Event::Pin(Line::Latch, true) => {
                let [segments, select] = chain.to_be_bytes();
                frames.push((segments, select));
            }
            _ => {}
        }
    }
    frames
}
