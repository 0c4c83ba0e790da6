use time::{OffsetDateTime, UtcOffset};

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock and shifts it into a fixed local offset.
///
/// The offset is resolved once at startup, before any other thread exists.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
