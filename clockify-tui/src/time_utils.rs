use time::{Date, Time, UtcOffset};

/// Local UTC offset, falling back to UTC when it can't be determined.
///
/// Call before spawning threads; the lookup refuses to run in a
/// multi-threaded process on some platforms.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// 12-hour wall-clock time, e.g. `3:04:05 PM`.
pub fn format_clock_time(t: Time) -> String {
    let (hour, period) = match t.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{}:{:02}:{:02} {}", hour, t.minute(), t.second(), period)
}

/// Numeric month/day/year without padding, e.g. `10/5/2026`.
pub fn format_us_date(date: Date) -> String {
    format!("{}/{}/{}", date.month() as u8, date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn test_clock_time_formatting() {
        assert_eq!(format_clock_time(time!(00:00:00)), "12:00:00 AM");
        assert_eq!(format_clock_time(time!(09:05:07)), "9:05:07 AM");
        assert_eq!(format_clock_time(time!(12:30:00)), "12:30:00 PM");
        assert_eq!(format_clock_time(time!(15:04:05)), "3:04:05 PM");
        assert_eq!(format_clock_time(time!(23:59:59)), "11:59:59 PM");
    }

    #[test]
    fn test_us_date_formatting() {
        assert_eq!(format_us_date(date!(2026 - 10 - 16)), "10/16/2026");
        assert_eq!(format_us_date(date!(2026 - 01 - 05)), "1/5/2026");
    }
}
