use std::fmt;

use time::{Date, Duration, OffsetDateTime, Time};

use super::elapsed::Elapsed;
use super::start_time::{StartTimeError, TimeOfDay};
use crate::time_utils::format_us_date;

/// Which calendar day the start instant was placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayLabel {
    #[default]
    Empty,
    Today,
    Date(Date),
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Empty => Ok(()),
            DayLabel::Today => f.write_str("Today"),
            DayLabel::Date(date) => f.write_str(&format_us_date(*date)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStart {
    pub start: OffsetDateTime,
    pub day: DayLabel,
    pub elapsed: Elapsed,
}

/// Place `time_of_day` on today's date. Out-of-range fields carry over.
pub fn candidate_instant(
    now: OffsetDateTime,
    time_of_day: TimeOfDay,
) -> Result<OffsetDateTime, StartTimeError> {
    let since_midnight = Duration::hours(time_of_day.hours.into())
        + Duration::minutes(time_of_day.minutes.into())
        + Duration::seconds(time_of_day.seconds.into());
    now.replace_time(Time::MIDNIGHT)
        .checked_add(since_midnight)
        .ok_or(StartTimeError::OutOfRange)
}

/// Decide the start instant and day label for a candidate, relative to `now`.
///
/// A candidate after `now` moves back one day. A candidate 24 hours or more
/// before `now` stays where it is but is labelled with yesterday's date.
pub fn resolve_start(
    candidate: OffsetDateTime,
    now: OffsetDateTime,
) -> Result<ResolvedStart, StartTimeError> {
    let yesterday = now
        .date()
        .previous_day()
        .ok_or(StartTimeError::OutOfRange)?;

    let (start, day) = if candidate > now {
        let start = candidate
            .checked_sub(Duration::DAY)
            .ok_or(StartTimeError::OutOfRange)?;
        (start, DayLabel::Date(yesterday))
    } else if now - candidate >= Duration::DAY {
        (candidate, DayLabel::Date(yesterday))
    } else {
        (candidate, DayLabel::Today)
    };

    // Still ahead of now after the rollback (hour fields past 48).
    let elapsed_secs = u64::try_from((now - start).whole_seconds())
        .map_err(|_| StartTimeError::StillAhead(yesterday))?;

    Ok(ResolvedStart {
        start,
        day,
        elapsed: Elapsed::from_secs(elapsed_secs),
    })
}

impl StartTimeError {
    /// Label shown next to the invalid reading. Only a start that rolled back
    /// and is still ahead keeps yesterday's date.
    pub fn day_label(&self) -> DayLabel {
        match self {
            StartTimeError::StillAhead(date) => DayLabel::Date(*date),
            _ => DayLabel::Today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    const NOW: OffsetDateTime = datetime!(2026-10-16 14:30:00 +2);

    fn tod(hours: i32, minutes: i32, seconds: i32) -> TimeOfDay {
        TimeOfDay {
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn test_candidate_uses_todays_date() {
        let candidate = candidate_instant(NOW, tod(9, 5, 7)).unwrap();
        assert_eq!(candidate, datetime!(2026-10-16 09:05:07 +2));
    }

    #[test]
    fn test_candidate_carries_overflowing_fields() {
        let candidate = candidate_instant(NOW, tod(25, 0, 0)).unwrap();
        assert_eq!(candidate, datetime!(2026-10-17 01:00:00 +2));
        let candidate = candidate_instant(NOW, tod(-1, 0, 0)).unwrap();
        assert_eq!(candidate, datetime!(2026-10-15 23:00:00 +2));
    }

    #[test]
    fn test_one_hour_ago_is_today() {
        let resolved = resolve_start(NOW - Duration::HOUR, NOW).unwrap();
        assert_eq!(resolved.day, DayLabel::Today);
        assert_eq!(resolved.elapsed.to_string(), "01:00:00");
        assert_eq!(resolved.start, datetime!(2026-10-16 13:30:00 +2));
    }

    #[test]
    fn test_twenty_five_hours_ago_is_yesterday() {
        let resolved = resolve_start(NOW - Duration::hours(25), NOW).unwrap();
        assert_eq!(resolved.day, DayLabel::Date(date!(2026 - 10 - 15)));
        assert_eq!(resolved.day.to_string(), "10/15/2026");
        assert_eq!(resolved.elapsed.to_string(), "25:00:00");
    }

    #[test]
    fn test_future_candidate_rolls_back_one_day() {
        let candidate = datetime!(2026-10-16 15:00:00 +2);
        let resolved = resolve_start(candidate, NOW).unwrap();
        assert_eq!(resolved.start, datetime!(2026-10-15 15:00:00 +2));
        assert_eq!(resolved.day, DayLabel::Date(date!(2026 - 10 - 15)));
        assert_eq!(resolved.elapsed.to_string(), "23:30:00");
    }

    #[test]
    fn test_candidate_equal_to_now_is_today() {
        let resolved = resolve_start(NOW, NOW).unwrap();
        assert_eq!(resolved.day, DayLabel::Today);
        assert_eq!(resolved.elapsed, Elapsed::ZERO);
    }

    #[test]
    fn test_candidate_far_in_future_is_still_ahead() {
        let candidate = NOW + Duration::hours(30);
        let err = resolve_start(candidate, NOW).unwrap_err();
        assert_eq!(err, StartTimeError::StillAhead(date!(2026 - 10 - 15)));
        assert_eq!(err.day_label(), DayLabel::Date(date!(2026 - 10 - 15)));
    }

    #[test]
    fn test_parse_errors_fall_back_to_today() {
        assert_eq!(StartTimeError::OutOfRange.day_label(), DayLabel::Today);
        assert_eq!(
            StartTimeError::InvalidHour("x".to_string()).day_label(),
            DayLabel::Today
        );
    }

    #[test]
    fn test_day_label_display() {
        assert_eq!(DayLabel::Empty.to_string(), "");
        assert_eq!(DayLabel::Today.to_string(), "Today");
        assert_eq!(DayLabel::Date(date!(2026 - 01 - 05)).to_string(), "1/5/2026");
    }
}
