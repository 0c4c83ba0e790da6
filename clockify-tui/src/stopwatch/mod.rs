//! Stopwatch arithmetic: start-time parsing, day resolution and the elapsed counter.

mod clock;
mod elapsed;
mod resolve;
mod start_time;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::FixedClock;
#[cfg(test)]
pub use elapsed::Elapsed;
pub use elapsed::Reading;
pub use resolve::{candidate_instant, resolve_start, DayLabel, ResolvedStart};
pub use start_time::{parse_start_time, StartTimeError};

use time::OffsetDateTime;

/// Parse typed start-time text and resolve it against `now`.
pub fn resolve_typed_start(
    text: &str,
    now: OffsetDateTime,
) -> Result<ResolvedStart, StartTimeError> {
    let time_of_day = parse_start_time(text)?;
    let candidate = candidate_instant(now, time_of_day)?;
    resolve_start(candidate, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_typed_time_earlier_today() {
        let now = datetime!(2026-10-16 15:30:00 +1);
        let resolved = resolve_typed_start("2:30:00 PM", now).unwrap();
        assert_eq!(resolved.day, DayLabel::Today);
        assert_eq!(resolved.elapsed.to_string(), "01:00:00");
    }

    #[test]
    fn test_typed_time_later_today_means_yesterday() {
        let now = datetime!(2026-10-16 08:00:00 +1);
        let resolved = resolve_typed_start("11:15:30 PM", now).unwrap();
        assert_eq!(resolved.start, datetime!(2026-10-15 23:15:30 +1));
        assert_eq!(resolved.day, DayLabel::Date(date!(2026 - 10 - 15)));
        assert_eq!(resolved.elapsed.to_string(), "08:44:30");
    }

    #[test]
    fn test_typed_midnight() {
        let now = datetime!(2026-10-16 00:00:10 +0);
        let resolved = resolve_typed_start("12:00:00 AM", now).unwrap();
        assert_eq!(resolved.day, DayLabel::Today);
        assert_eq!(resolved.elapsed, Elapsed::from_secs(10));
    }

    #[test]
    fn test_negative_hour_lands_more_than_a_day_back() {
        // 00:00 minus 15h is 09:00 yesterday, 25h before 10:00 today.
        let now = datetime!(2026-10-16 10:00:00 +0);
        let resolved = resolve_typed_start("-15:00:00", now).unwrap();
        assert_eq!(resolved.start, datetime!(2026-10-15 09:00:00 +0));
        assert_eq!(resolved.day, DayLabel::Date(date!(2026 - 10 - 15)));
        assert_eq!(resolved.elapsed.to_string(), "25:00:00");
    }

    #[test]
    fn test_malformed_text_is_an_error() {
        let now = datetime!(2026-10-16 10:00:00 +0);
        assert!(resolve_typed_start("half past", now).is_err());
    }
}
