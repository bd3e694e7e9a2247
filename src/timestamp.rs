use anyhow::{Context, Result};
use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// `2000-01-01T00:00:00.000Z`: always exactly three fractional digits,
/// anything finer than a millisecond is truncated.
pub fn to_iso_millis(timestamp: Timestamp) -> String {
    format!("{timestamp:.3}")
}

/// Accepts an RFC 3339 instant, or a bare date taken as midnight UTC.
pub fn parse(value: &str) -> Result<Timestamp> {
    if !value.contains('T') {
        if let Ok(date) = value.parse::<Date>() {
            return Ok(date.to_zoned(TimeZone::UTC)?.timestamp());
        }
    }
    value
        .parse::<Timestamp>()
        .with_context(|| format!("{value:?} is not an ISO-8601 timestamp"))
}

/// Removes every `-` and `:` and the first `.` from the ISO-8601 form.
pub fn to_compact(timestamp: Timestamp) -> String {
    let iso: String = to_iso_millis(timestamp)
        .chars()
        .filter(|c| *c != '-' && *c != ':')
        .collect();
    iso.replacen('.', "", 1)
}
