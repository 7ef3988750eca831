//! Calendar types: football season keys and match date parsing.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Day-first dates as printed on match pages, e.g. `17. 8. 2024` or `17.08.2024`.
static DAY_FIRST_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.\s*(\d{1,2})\.\s*(\d{4})").expect("valid regex"));

/// Footballing season bucket.
///
/// A season runs July through June, so a date belongs to season
/// `year + (month >= 7 ? 1 : 0)`. The 2024/25 season has key 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonKey(pub i32);

impl SeasonKey {
    pub fn for_date(date: NaiveDate) -> Self {
        let bump = if date.month() >= 7 { 1 } else { 0 };
        Self(date.year() + bump)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.0 - 1, self.0.rem_euclid(100))
    }
}

/// Parse a calendar date in ISO (`2024-08-17`) or day-first (`17. 8. 2024`) order.
///
/// Day-first dates may be embedded in other text (weekday names, kick-off
/// time); the first one found wins. Returns `None` when no valid date is present.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    let caps = DAY_FIRST_DATE.captures(trimmed)?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_key_splits_at_july() {
        assert_eq!(SeasonKey::for_date(date(2024, 6, 30)), SeasonKey(2024));
        assert_eq!(SeasonKey::for_date(date(2024, 7, 1)), SeasonKey(2025));
        assert_eq!(SeasonKey::for_date(date(2025, 1, 15)), SeasonKey(2025));
    }

    #[test]
    fn test_season_key_display() {
        assert_eq!(SeasonKey(2025).to_string(), "2024/25");
        assert_eq!(SeasonKey(2000).to_string(), "1999/00");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_calendar_date("2024-08-17"), Some(date(2024, 8, 17)));
        assert_eq!(parse_calendar_date("  2024-08-17 "), Some(date(2024, 8, 17)));
    }

    #[test]
    fn test_parse_day_first_dates() {
        assert_eq!(parse_calendar_date("17.08.2024"), Some(date(2024, 8, 17)));
        assert_eq!(parse_calendar_date("17. 8. 2024"), Some(date(2024, 8, 17)));
        assert_eq!(
            parse_calendar_date("Sobota 3. 5. 2025 17:00"),
            Some(date(2025, 5, 3))
        );
    }

    #[test]
    fn test_parse_rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("next sunday"), None);
        assert_eq!(parse_calendar_date("31. 2. 2025"), None);
    }
}
