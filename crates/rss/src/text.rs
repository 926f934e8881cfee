// ABOUTME: Text value utilities shared by the RSS entities.
// ABOUTME: Trimming, case-insensitive comparison, lenient number/weekday parsing, language tags.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

/// Trims a value and maps blank input to None.
pub fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case folding used by both comparison and hashing so the two always agree.
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Ordinal, case-insensitive comparison.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub fn compare_opt_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_ignore_case(a, b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Parses a trimmed unsigned integer, None on any failure.
pub fn parse_number<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse::<T>().ok()
}

/// Parses an English weekday name ("Monday", "monday", "Mon").
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

/// Full English weekday name as written inside `<skipDays>`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A well-formed language identifier such as `en`, `en-us` or `zh-Hant-TW`.
///
/// The primary subtag must be 2 to 8 letters; later subtags 1 to 8
/// alphanumerics, separated by `-` (or `_`, normalized to `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().replace('_', "-");
        let mut subtags = value.split('-');
        let primary = subtags.next()?;
        if !(2..=8).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        let rest_ok = subtags.all(|tag| {
            (1..=8).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
        });
        rest_ok.then_some(LanguageTag(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language part, lowercased (`en` for `en-US`).
    pub fn primary(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
