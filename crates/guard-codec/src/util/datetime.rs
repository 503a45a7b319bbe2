//! RFC 3339 conversion for guard timestamps.
//!
//! StartDate and EndDate store whole unix seconds. These helpers render them
//! as UTC RFC 3339 strings (`2022-09-05T16:20:20Z`) and parse such strings
//! back, honoring numeric offsets.

use thiserror::Error;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Error type for RFC 3339 parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid RFC 3339 timestamp {input:?}: {reason}")]
pub struct DateTimeParseError {
    pub input: String,
    pub reason: &'static str,
}

fn parse_error(input: &str, reason: &'static str) -> DateTimeParseError {
    DateTimeParseError {
        input: input.to_string(),
        reason,
    }
}

/// Returns true if the given year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since the unix epoch for a civil date (Howard Hinnant's algorithm).
fn date_to_days(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 9 } else { month - 3 } as i64;

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * m + 2) / 5 + day as i64 - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146097 + doe - 719468
}

/// Civil date for days since the unix epoch.
fn days_to_date(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;

    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Formats unix seconds as a UTC RFC 3339 timestamp.
pub fn format_timestamp(unix_seconds: i64) -> String {
    let days = unix_seconds.div_euclid(SECONDS_PER_DAY);
    let secs = unix_seconds.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = days_to_date(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        secs / SECONDS_PER_HOUR,
        secs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        secs % SECONDS_PER_MINUTE
    )
}

/// Parses an RFC 3339 timestamp (`YYYY-MM-DDTHH:MM:SS` followed by `Z` or
/// `±HH:MM`) into unix seconds. Fractional seconds are truncated.
pub fn parse_timestamp(input: &str) -> Result<i64, DateTimeParseError> {
    let bytes = input.as_bytes();
    if bytes.len() < 20 || !input.is_ascii() {
        return Err(parse_error(input, "too short"));
    }
    if bytes[4] != b'-' || bytes[7] != b'-' || bytes[13] != b':' || bytes[16] != b':' {
        return Err(parse_error(input, "bad separators"));
    }
    if !matches!(bytes[10], b'T' | b't' | b' ') {
        return Err(parse_error(input, "missing date/time separator"));
    }

    let field = |range: std::ops::Range<usize>, reason| {
        input[range]
            .parse::<u32>()
            .map_err(|_| parse_error(input, reason))
    };
    let year = field(0..4, "bad year")? as i64;
    let month = field(5..7, "bad month")?;
    let day = field(8..10, "bad day")?;
    let hours = field(11..13, "bad hours")?;
    let minutes = field(14..16, "bad minutes")?;
    let seconds = field(17..19, "bad seconds")?;

    if !(1..=12).contains(&month) {
        return Err(parse_error(input, "bad month"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(parse_error(input, "bad day"));
    }
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(parse_error(input, "time out of range"));
    }

    let mut rest = &input[19..];
    if let Some(frac) = rest.strip_prefix('.') {
        let end = frac
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| parse_error(input, "missing offset"))?;
        if end == 0 {
            return Err(parse_error(input, "empty fraction"));
        }
        rest = &frac[end..];
    }

    let offset = parse_offset(rest).ok_or_else(|| parse_error(input, "bad offset"))?;

    Ok(date_to_days(year, month, day) * SECONDS_PER_DAY
        + hours as i64 * SECONDS_PER_HOUR
        + minutes as i64 * SECONDS_PER_MINUTE
        + seconds as i64
        - offset)
}

/// Parses `Z` or `±HH:MM` into an offset in seconds.
fn parse_offset(offset: &str) -> Option<i64> {
    if offset == "Z" || offset == "z" {
        return Some(0);
    }
    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i64 = offset[1..3].parse().ok()?;
    let minutes: i64 = offset[4..6].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_timestamp(1662394820), "2022-09-05T16:20:20Z");
        assert_eq!(format_timestamp(-1), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("2022-09-05T16:20:20Z").unwrap(), 1662394820);
        assert_eq!(parse_timestamp("2024-02-29T12:00:00+02:00").unwrap(), 1709200800);
        assert_eq!(parse_timestamp("2022-09-05T16:20:20.999Z").unwrap(), 1662394820);
        assert_eq!(parse_timestamp("1969-12-31T23:59:59Z").unwrap(), -1);
    }

    #[test]
    fn test_roundtrip() {
        for ts in [0i64, 1, -86_401, 951_782_400, 1_700_000_000, 4_102_444_800] {
            assert_eq!(parse_timestamp(&format_timestamp(ts)).unwrap(), ts, "ts {ts}");
        }
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(parse_timestamp("2022-09-05").is_err());
        assert!(parse_timestamp("2023-02-29T00:00:00Z").is_err());
        assert!(parse_timestamp("2022-13-01T00:00:00Z").is_err());
        assert!(parse_timestamp("2022-09-05T24:00:00Z").is_err());
        assert!(parse_timestamp("2022-09-05T16:20:20").is_err());
        assert!(parse_timestamp("2022-09-05T16:20:20+2:00").is_err());
        assert!(parse_timestamp("2022-09-05T16:20:20.Z").is_err());
    }
}
