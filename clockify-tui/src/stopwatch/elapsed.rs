use std::fmt;

/// Elapsed time shown by the counter, split into hours, minutes and seconds.
///
/// Minutes and seconds stay within `0..60`; hours are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Elapsed {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a whole number of seconds.
    pub fn from_secs(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Advance by one second, rolling seconds into minutes and minutes into hours.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.minutes += 1;
            self.seconds = 0;
        }
        if self.minutes >= 60 {
            self.hours += 1;
            self.minutes = 0;
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// What the counter currently reads.
///
/// `Invalid` comes from a start time that could not be parsed. It stays
/// invalid across ticks until the timer is stopped or a valid time is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Valid(Elapsed),
    Invalid,
}

impl Reading {
    pub fn tick(&mut self) {
        if let Reading::Valid(elapsed) = self {
            elapsed.tick();
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Reading::Valid(Elapsed::ZERO)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Valid(elapsed) => elapsed.fmt(f),
            Reading::Invalid => f.write_str("--:--:--"),
        }
    }
}
