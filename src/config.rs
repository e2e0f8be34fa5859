//! Board timing and scaling constants.

/// Period of the clock tick interrupt.
pub const TICK_INTERVAL_US: u32 = 1_000_000;

/// How long each digit stays lit before the next one is selected.
pub const DIGIT_SETTLE_MS: u32 = 2;

/// Pause after a reset press so contact bounce is not seen as more presses.
pub const DEBOUNCE_MS: u32 = 200;

/// Voltage at full scale of the ADC.
pub const ADC_REFERENCE_VOLTS: f32 = 3.3;

/// Largest raw reading of the 12-bit RP2040 ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Crystal fitted on the Pico board.
pub const EXTERNAL_XTAL_FREQ_HZ: u32 = 12_000_000;
