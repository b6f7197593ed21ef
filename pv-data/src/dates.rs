//! Date utility functions

use chrono::{DateTime, Datelike, NaiveDate};

/// Parse the calendar day out of an API date.
///
/// Accepts `YYYY-MM-DD`, compact `YYYYMMDD`, or an RFC 3339 timestamp (the
/// date part is taken as written, without timezone conversion).
pub fn parse_day(s: &str) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y%m%d") {
        return Ok(date);
    }
    match DateTime::parse_from_rfc3339(s) {
        Ok(ts) => Ok(ts.date_naive()),
        Err(e) => anyhow::bail!("unrecognized date {:?}: {}", s, e),
    }
}

/// Two-letter weekday label used under heart-rate bars ("Mo", "Tu", ...).
pub fn day_abbrev(date: &NaiveDate) -> String {
    date.format("%a").to_string().chars().take(2).collect()
}

/// Three-letter weekday label used on the mood graph ("Mon", "Tue", ...).
pub fn week_label(date: &NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Human label for a span of days.
///
/// - same month: `10 – 17 Sep 2024`
/// - same year: `28 Sep – 4 Oct 2024`
/// - otherwise: `28 Dec 2024 – 3 Jan 2025`
pub fn range_label(first: &NaiveDate, last: &NaiveDate) -> String {
    if first == last {
        return first.format("%-d %b %Y").to_string();
    }
    let end = last.format("%-d %b %Y");
    if first.year() != last.year() {
        format!("{} – {}", first.format("%-d %b %Y"), end)
    } else if first.month() != last.month() {
        format!("{} – {}", first.format("%-d %b"), end)
    } else {
        format!("{} – {}", first.day(), end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_formats() {
        assert_eq!(parse_day("2024-09-10").unwrap(), ymd(2024, 9, 10));
        assert_eq!(parse_day("20240910").unwrap(), ymd(2024, 9, 10));
        assert_eq!(parse_day("2024-09-10T23:30:00.000Z").unwrap(), ymd(2024, 9, 10));
        assert_eq!(parse_day("2024-09-10T01:00:00+05:30").unwrap(), ymd(2024, 9, 10));
        assert!(parse_day("next tuesday").is_err());
    }

    #[test]
    fn test_weekday_labels() {
        let date = ymd(2024, 9, 10); // a Tuesday
        assert_eq!(day_abbrev(&date), "Tu");
        assert_eq!(week_label(&date), "Tue");
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(&ymd(2024, 9, 10), &ymd(2024, 9, 17)), "10 – 17 Sep 2024");
        assert_eq!(range_label(&ymd(2024, 9, 28), &ymd(2024, 10, 4)), "28 Sep – 4 Oct 2024");
        assert_eq!(
            range_label(&ymd(2024, 12, 28), &ymd(2025, 1, 3)),
            "28 Dec 2024 – 3 Jan 2025"
        );
        assert_eq!(range_label(&ymd(2024, 9, 10), &ymd(2024, 9, 10)), "10 Sep 2024");
    }
}
