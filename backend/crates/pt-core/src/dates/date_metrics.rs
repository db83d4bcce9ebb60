use std::fmt::Write;

use chrono::format::StrftimeItems;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Display pattern used by [`DateMetrics::format_date`], e.g. `5/1/2025`
pub const DEFAULT_DISPLAY_FORMAT: &str = "%-d/%-m/%Y";

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Date arithmetic for project cards and timelines.
///
/// Every operation degrades to a sentinel on malformed input instead of
/// failing: `0` for counts, `false` for checks and the untouched input for
/// formatting. Use [`DateMetrics::is_valid_date`] when the difference matters.
pub struct DateMetrics;

impl DateMetrics {
    /// Parse a user supplied date.
    ///
    /// ISO `YYYY-MM-DD` is the canonical form and resolves to midnight. RFC 3339
    /// timestamps, naive `YYYY-MM-DDTHH:MM[:SS]` and `YYYY/MM/DD` are accepted too.
    pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        for format in NAIVE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(value, format) {
                return date.and_hms_opt(0, 0, 0);
            }
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Some(timestamp.naive_utc());
        }

        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    }

    /// True iff `value` parses to a representable calendar date
    pub fn is_valid_date(value: &str) -> bool {
        Self::parse_date(value).is_some()
    }

    /// Calendar days from `start_date` to `end_date`, rounded up.
    ///
    /// Negative when the range is misordered. `0` if either side is unparseable.
    pub fn total_days(start_date: &str, end_date: &str) -> i64 {
        let (Some(start), Some(end)) = (Self::parse_date(start_date), Self::parse_date(end_date))
        else {
            return 0;
        };

        let seconds = (end - start).num_seconds();
        let whole_days = seconds.div_euclid(SECONDS_PER_DAY);
        if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
            whole_days
        } else {
            whole_days + 1
        }
    }

    /// Weekdays left from today through `end_date`, inclusive.
    ///
    /// Reads the local clock on every call.
    pub fn remaining_working_days(end_date: &str) -> i64 {
        Self::remaining_working_days_on(end_date, Local::now().date_naive())
    }

    /// Same as [`DateMetrics::remaining_working_days`] with an explicit `today`.
    ///
    /// Past deadlines and malformed input both yield `0`.
    pub fn remaining_working_days_on(end_date: &str, today: NaiveDate) -> i64 {
        match Self::parse_date(end_date) {
            Some(end) if end.date() >= today => Self::working_days_between(today, end.date()),
            _ => 0,
        }
    }

    /// Monday-to-Friday days in `[start, end]`. No holiday calendar.
    pub fn working_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
        let count = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| Self::is_working_day(*day))
            .count();

        i64::try_from(count).unwrap_or(i64::MAX)
    }

    pub fn is_working_day(day: NaiveDate) -> bool {
        !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Render for display as `D/M/YYYY`; returns the input when it does not parse
    pub fn format_date(value: &str) -> String {
        Self::format_date_with(value, DEFAULT_DISPLAY_FORMAT)
    }

    /// Render with a strftime `pattern`.
    ///
    /// Falls back to the input when it does not parse or the pattern cannot be
    /// applied to a calendar date.
    pub fn format_date_with(value: &str, pattern: &str) -> String {
        let Some(parsed) = Self::parse_date(value) else {
            return value.to_string();
        };

        let mut rendered = String::new();
        match write!(rendered, "{}", parsed.format_with_items(StrftimeItems::new(pattern))) {
            Ok(()) => rendered,
            Err(_) => value.to_string(),
        }
    }
}
