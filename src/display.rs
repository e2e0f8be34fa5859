use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::config::DIGIT_SETTLE_MS;
use crate::segment;
use crate::shift::ShiftRegister;

pub const DIGIT_COUNT: usize = 4;

/// One-hot digit select masks, left to right.
pub const DIGIT_SELECT: [u8; DIGIT_COUNT] = [0x01, 0x02, 0x04, 0x08];

/// A number to show on the four digits, with an optional decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    number: u32,
    decimal_point: Option<usize>,
}

impl DisplayValue {
    pub const fn plain(number: u32) -> Self {
        Self {
            number,
            decimal_point: None,
        }
    }

    /// Lights the decimal point of the digit at `position` (0 = leftmost).
    pub const fn with_decimal_point(number: u32, position: usize) -> Self {
        Self {
            number,
            decimal_point: Some(position),
        }
    }

    /// Volts with two decimals, e.g. 2.75 V -> "02.75". Truncates, and
    /// negative or NaN input shows as zero.
    pub fn from_volts(volts: f32) -> Self {
        Self::with_decimal_point((volts * 100.0) as u32, 1)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn decimal_point(&self) -> Option<usize> {
        self.decimal_point
    }

    /// The low four decimal digits, most significant first.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        let n = self.number;
        [
            (n / 1000 % 10) as u8,
            (n / 100 % 10) as u8,
            (n / 10 % 10) as u8,
            (n % 10) as u8,
        ]
    }

    /// Segment pattern for each digit position, decimal point applied.
    pub fn patterns(&self) -> [u8; DIGIT_COUNT] {
        let mut patterns = [segment::BLANK; DIGIT_COUNT];
        for (position, (pattern, digit)) in patterns.iter_mut().zip(self.digits()).enumerate() {
            // digits() is already mod 10, the blank fallback is never shown
            *pattern = segment::pattern_for(digit).unwrap_or(segment::BLANK);
            if self.decimal_point == Some(position) {
                *pattern = segment::with_decimal_point(*pattern);
            }
        }
        patterns
    }
}

/// Lights one digit at a time; persistence of vision does the rest, as long
/// as [`Multiplexer::render`] is called continuously.
pub struct Multiplexer<DATA, CLOCK, LATCH> {
    link: ShiftRegister<DATA, CLOCK, LATCH>,
}

impl<DATA, CLOCK, LATCH> Multiplexer<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = Infallible>,
    CLOCK: OutputPin<Error = Infallible>,
    LATCH: OutputPin<Error = Infallible>,
{
    pub fn new(link: ShiftRegister<DATA, CLOCK, LATCH>) -> Self {
        Self { link }
    }

    /// One pass over the four digits, holding each for the settle time.
    pub fn render<D: DelayMs<u32>>(&mut self, value: DisplayValue, delay: &mut D) {
        for (pattern, select) in value.patterns().into_iter().zip(DIGIT_SELECT) {
            self.link.send(pattern, select);
            delay.delay_ms(DIGIT_SETTLE_MS);
        }
    }
}
