// ABOUTME: Duration parsing for itunes:duration extension values.
// ABOUTME: Accepts plain seconds, clock notation, and unit strings such as "1h30m".

/// Parses an itunes duration into whole seconds.
///
/// Clock notation may carry one to three fields (`SS`, `MM:SS`, `HH:MM:SS`).
/// Returns None on malformed input or when the value overflows `u32`.
pub fn parse_duration_seconds(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s.contains(':') {
        return parse_clock(s);
    }
    if let Ok(secs) = s.parse::<u64>() {
        return u32::try_from(secs).ok();
    }

    parse_duration::parse(s)
        .ok()
        .and_then(|d| u32::try_from(d.as_secs()).ok())
}

/// Renders seconds in the `HH:MM:SS` form itunes readers expect.
pub fn format_duration(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn parse_clock(s: &str) -> Option<u32> {
    let fields: Vec<u64> = s
        .split(':')
        .map(|f| f.trim().parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if fields.len() > 3 {
        return None;
    }
    let total = fields
        .iter()
        .try_fold(0u64, |acc, f| acc.checked_mul(60)?.checked_add(*f))?;
    u32::try_from(total).ok()
}
