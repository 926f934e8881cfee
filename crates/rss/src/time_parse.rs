// ABOUTME: RFC-822 date handling for RSS pubDate and lastBuildDate elements.
// ABOUTME: Parses the many real-world variants of RFC-822 dates and formats canonical output.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Zone abbreviations allowed by RFC-822 plus the common ones seen in feeds.
const NAMED_ZONES: &[(&str, i32)] = &[
    ("UT", 0),
    ("GMT", 0),
    ("UTC", 0),
    ("Z", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
    ("CET", 1),
    ("CEST", 2),
    ("EET", 2),
    ("EEST", 3),
    ("BST", 1),
    ("JST", 9),
    ("AEST", 10),
    ("AEDT", 11),
];

const ZONED_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%:z",
];

const LOCAL_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses an RFC-822 style timestamp as found in RSS feeds.
///
/// Tolerates single-digit days, missing seconds, two-digit years, missing
/// weekday names, named zones, and falls back to RFC-3339 which some
/// generators emit instead. Returns None when nothing matches.
pub fn parse_rfc822(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let s = expand_two_digit_year(s);

    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Some((base, offset)) = split_named_zone(&s) {
        return parse_local(base).and_then(|naive| {
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        });
    }

    if let Some(naive) = parse_local(&s) {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Formats a timestamp the way RSS 2.0 expects, e.g. `Tue, 10 Jun 2003 04:00:00 GMT`.
pub fn format_rfc822(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn parse_local(s: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn split_named_zone(s: &str) -> Option<(&str, FixedOffset)> {
    let (base, zone) = s.rsplit_once(' ')?;
    let hours = NAMED_ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(zone))
        .map(|(_, hours)| *hours)?;
    Some((base.trim_end(), FixedOffset::east_opt(hours * 3600)?))
}

/// RFC-822 allows `02 Jan 06`; chrono's `%Y` needs four digits.
fn expand_two_digit_year(s: &str) -> String {
    let mut parts: Vec<String> = s.split_whitespace().map(str::to_string).collect();
    // Year follows the month name: "[Mon,] 02 Jan 06 ..."
    let month_idx = parts
        .iter()
        .position(|p| p.len() == 3 && p.chars().all(|c| c.is_ascii_alphabetic()) && is_month(p));
    if let Some(idx) = month_idx {
        if let Some(year) = parts.get_mut(idx + 1) {
            if year.len() == 2 && year.chars().all(|c| c.is_ascii_digit()) {
                *year = format!("20{}", year);
            }
        }
    }
    parts.join(" ")
}

fn is_month(s: &str) -> bool {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS.iter().any(|m| m.eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_rfc822_canonical() {
        let dt = parse_rfc822("Tue, 10 Jun 2003 04:00:00 GMT").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2003, 6, 10));
        assert_eq!(dt.hour(), 4);
    }

    #[test]
    fn test_numeric_offset() {
        let dt = parse_rfc822("Mon, 02 Jan 2006 15:04:05 -0700").unwrap();
        assert_eq!(dt.hour(), 22);
    }

    #[test]
    fn test_named_zone() {
        let dt = parse_rfc822("Mon, 2 Jan 2006 15:04:05 PST").unwrap();
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn test_missing_seconds_and_weekday() {
        let dt = parse_rfc822("02 Jan 2006 15:04 +0000").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (15, 4, 0));
    }

    #[test]
    fn test_two_digit_year() {
        let dt = parse_rfc822("Mon, 02 Jan 06 15:04:05 GMT").unwrap();
        assert_eq!(dt.year(), 2006);
    }

    #[test]
    fn test_rfc3339_fallback() {
        assert!(parse_rfc822("2023-06-15T14:30:00Z").is_some());
    }

    #[test]
    fn test_invalid() {
        assert!(parse_rfc822("").is_none());
        assert!(parse_rfc822("yesterday").is_none());
    }

    #[test]
    fn test_format_round_trip() {
        let dt = parse_rfc822("Sat, 07 Sep 2002 09:42:31 GMT").unwrap();
        let formatted = format_rfc822(&dt);
        assert_eq!(formatted, "Sat, 07 Sep 2002 09:42:31 GMT");
        assert_eq!(parse_rfc822(&formatted), Some(dt));
    }
}
