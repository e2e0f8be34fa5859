/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Minutes wrap here so the value always fits four display digits.
pub const MINUTE_WRAP: u8 = 100;

/// Minutes:seconds counter advanced by the tick interrupt.
///
/// Owned as a shared resource: the tick handler and the main loop only
/// reach it under a lock, so a rollover is never observed half done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    minutes: u8,
    seconds: u8,
}

impl ClockState {
    /// 00:00
    pub const fn new() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
        }
    }

    /// A clock already showing `minutes:seconds`, each wrapped into range.
    pub const fn at(minutes: u8, seconds: u8) -> Self {
        Self {
            minutes: minutes % MINUTE_WRAP,
            seconds: seconds % SECONDS_PER_MINUTE,
        }
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advances by one second, carrying into the minutes on rollover.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= SECONDS_PER_MINUTE {
            self.seconds = 0;
            self.minutes = (self.minutes + 1) % MINUTE_WRAP;
        }
    }

    /// Back to 00:00.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Packs the clock as `MMSS`, e.g. 12:34 -> 1234.
    pub fn as_time_value(&self) -> u16 {
        u16::from(self.minutes) * 100 + u16::from(self.seconds)
    }
}
