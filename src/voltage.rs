use crate::config::ADC_REFERENCE_VOLTS;

/// Lowest and highest voltage seen since power-up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageTracker {
    min: f32,
    max: f32,
    samples: u32,
}

impl VoltageTracker {
    /// Starts with the extremes inverted so the first sample sets both.
    pub const fn new() -> Self {
        Self {
            min: ADC_REFERENCE_VOLTS,
            max: 0.0,
            samples: 0,
        }
    }

    pub fn sample(&mut self, volts: f32) {
        self.min = self.min.min(volts);
        self.max = self.max.max(volts);
        self.samples = self.samples.saturating_add(1);
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl Default for VoltageTracker {
    fn default() -> Self {
        Self::new()
    }
}
