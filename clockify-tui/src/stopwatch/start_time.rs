use thiserror::Error;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Case-insensitive `am` / `pm`. Anything else is not a meridiem.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }
}

/// A typed start time converted to 24-hour form.
///
/// Fields are not range-checked: hour 25 or minute 75 carry over into the
/// next day/hour when the time is placed on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartTimeError {
    #[error("invalid hour field {0:?}")]
    InvalidHour(String),
    #[error("no minutes in {0:?}")]
    MissingMinutes(String),
    #[error("invalid minute field {0:?}")]
    InvalidMinute(String),
    #[error("start time is outside the supported date range")]
    OutOfRange,
    /// Still after now once moved back to the given day.
    #[error("start time is still ahead of now after moving back to {0}")]
    StillAhead(Date),
}

/// Parse `H:M[:S] [AM|PM]`.
///
/// The time and meridiem are separated by a single space. Empty fields read
/// as 0, and a missing or unreadable seconds field falls back to 0.
pub fn parse_start_time(input: &str) -> Result<TimeOfDay, StartTimeError> {
    let mut words = input.split(' ');
    let time_part = words.next().unwrap_or_default();
    let meridiem = words.next().and_then(Meridiem::parse);

    let mut fields = time_part.split(':');
    let hour_raw = fields.next().unwrap_or_default();
    let hours =
        parse_field(hour_raw).ok_or_else(|| StartTimeError::InvalidHour(hour_raw.to_string()))?;
    let minute_raw = fields
        .next()
        .ok_or_else(|| StartTimeError::MissingMinutes(time_part.to_string()))?;
    let minutes = parse_field(minute_raw)
        .ok_or_else(|| StartTimeError::InvalidMinute(minute_raw.to_string()))?;
    let seconds = fields.next().and_then(parse_field).unwrap_or(0);

    Ok(TimeOfDay {
        hours: to_24_hour(hours, meridiem),
        minutes,
        seconds,
    })
}

/// 12-hour to 24-hour conversion: PM adds 12 below noon, 12 AM is midnight.
pub fn to_24_hour(hours: i32, meridiem: Option<Meridiem>) -> i32 {
    match meridiem {
        Some(Meridiem::Pm) if hours < 12 => hours + 12,
        Some(Meridiem::Am) if hours == 12 => 0,
        _ => hours,
    }
}

/// Decimal and exponent forms are accepted and truncated toward zero.
fn parse_field(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let value = trimmed.parse::<f64>().ok()?.trunc();
    if value.is_finite() && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}
