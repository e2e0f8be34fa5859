//! Common-anode 7-segment encoding.
//!
//! Segments are active-low: a cleared bit lights the segment. Bit 7 is the
//! decimal point, bits 6..0 are segments g..a.

use crate::error::{Error, Result};

/// Patterns for the digits 0-9, decimal point off.
pub const DIGIT_PATTERNS: [u8; 10] = [
    0xC0, // 0
    0xF9, // 1
    0xA4, // 2
    0xB0, // 3
    0x99, // 4
    0x92, // 5
    0x82, // 6
    0xF8, // 7
    0x80, // 8
    0x90, // 9
];

/// Decimal point bit.
pub const DECIMAL_POINT: u8 = 0x80;

/// All segments off.
pub const BLANK: u8 = 0xFF;

/// Looks up the pattern for a single decimal digit.
pub fn pattern_for(digit: u8) -> Result<u8> {
    DIGIT_PATTERNS
        .get(usize::from(digit))
        .copied()
        .ok_or(Error::InvalidDigit(digit))
}

/// Turns the decimal point of `pattern` on.
pub const fn with_decimal_point(pattern: u8) -> u8 {
    pattern & !DECIMAL_POINT
}
