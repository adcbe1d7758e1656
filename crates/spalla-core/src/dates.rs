//! Date parsing and the process-wide "today" reference.
//!
//! Upstream data mixes locale-formatted dates (`DD/MM/YYYY`) with ISO dates
//! and full timestamps. Everything is normalized to [`jiff::civil::Date`] at
//! the ingestion boundary; relative-day math goes through a [`Clock`] whose
//! "today" is captured once per process so a session that straddles midnight
//! stays internally consistent.

use jiff::civil::Date;
use jiff::{Timestamp, Zoned};

/// Parses a date string in either `DD/MM/YYYY` or an ISO-parseable form.
///
/// Returns `None` for empty, missing-shaped, or unparseable input. Full ISO
/// timestamps are accepted and reduced to their UTC calendar date.
pub fn parse_date(input: &str) -> Option<Date> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(date) = Date::strptime("%d/%m/%Y", input) {
        return Some(date);
    }
    if let Ok(date) = input.parse::<Date>() {
        return Some(date);
    }
    if let Ok(ts) = input.parse::<Timestamp>() {
        return Some(ts.to_zoned(jiff::tz::TimeZone::UTC).date());
    }
    None
}

/// Reduces a timestamp to its UTC calendar date.
pub fn date_of(ts: Timestamp) -> Date {
    ts.to_zoned(jiff::tz::TimeZone::UTC).date()
}

/// A fixed "today" reference.
///
/// Captured once per process ([`Clock::system`]) or pinned explicitly
/// ([`Clock::fixed`]) so tests and long-lived sessions get stable
/// relative-day calculations.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    today: Date,
}

impl Clock {
    /// Captures the current system date.
    pub fn system() -> Self {
        Self {
            today: Zoned::now().date(),
        }
    }

    /// Pins the reference date, for tests and replay.
    pub fn fixed(today: Date) -> Self {
        Self { today }
    }

    /// The reference date.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Whole days elapsed since the given date string, floored.
    ///
    /// `None` for missing or unparseable input; callers must treat `None`
    /// distinctly from zero.
    pub fn days_since(&self, input: &str) -> Option<i64> {
        let date = parse_date(input)?;
        Some(i64::from((self.today - date).get_days()))
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn parses_locale_format() {
        assert_eq!(parse_date("25/12/2025"), Some(date(2025, 12, 25)));
        assert_eq!(parse_date("01/02/2026"), Some(date(2026, 2, 1)));
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2026-02-01"), Some(date(2026, 2, 1)));
    }

    #[test]
    fn parses_iso_timestamp_as_utc_date() {
        assert_eq!(parse_date("2026-02-01T22:15:00Z"), Some(date(2026, 2, 1)));
    }

    #[test]
    fn unparseable_input_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("amanhã"), None);
        assert_eq!(parse_date("32/13/2026"), None);
    }

    #[test]
    fn days_since_floors_the_delta() {
        let clock = Clock::fixed(date(2026, 8, 6));
        assert_eq!(clock.days_since("04/08/2026"), Some(2));
        assert_eq!(clock.days_since("2026-08-06"), Some(0));
        assert_eq!(clock.days_since("2026-08-10"), Some(-4));
    }

    #[test]
    fn days_since_distinguishes_none_from_zero() {
        let clock = Clock::fixed(date(2026, 8, 6));
        assert_eq!(clock.days_since(""), None);
        assert_eq!(clock.days_since("not a date"), None);
    }
}
