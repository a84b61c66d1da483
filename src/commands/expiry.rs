//! Parsing of `<count><unit>` durations into absolute expiry timestamps.
//!
//! Units are `s` (seconds), `m` (minutes) and `h` (hours), e.g. `30m`.

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use log::debug;
use regex::Regex;

static EXPIRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(s|m|h)").expect("expiry regex should be valid"));

/// Errors that can occur while parsing an expiry token.
#[derive(Debug, PartialEq)]
pub enum ExpiryError {
    /// The token does not contain `<digits><s|m|h>`, digits being ASCII only
    Malformed,
    /// The count in front of the unit is not a valid number, or is too large
    InvalidCount,
    /// The last character is not a known unit
    InvalidUnit(char),
}

/// Parses an expiry token and returns `now` shifted by the duration.
///
/// The count is parsed before the unit is dispatched, so a token such as
/// `10sx` is reported as [`ExpiryError::InvalidCount`].
///
/// # Examples
///
/// ```
/// let expires_at = parse_expiry("2h", Utc::now()).unwrap();
/// ```
pub fn parse_expiry(token: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ExpiryError> {
    if !EXPIRY_REGEX.is_match(token) {
        debug!("malformed expiry {}", token);
        return Err(ExpiryError::Malformed);
    }

    let mut chars = token.chars();
    let Some(unit) = chars.next_back() else {
        return Err(ExpiryError::Malformed);
    };
    let count = chars
        .as_str()
        .parse::<i64>()
        .map_err(|_| ExpiryError::InvalidCount)?;

    let delta = match unit {
        's' => TimeDelta::try_seconds(count),
        'm' => TimeDelta::try_minutes(count),
        'h' => TimeDelta::try_hours(count),
        other => return Err(ExpiryError::InvalidUnit(other)),
    };

    delta
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(ExpiryError::InvalidCount)
}

/// Encodes a timestamp the way the remote service expects it (RFC 3339, UTC).
///
/// Fractional seconds are written with 3, 6 or 9 digits (`.250Z`), not
/// trimmed of their trailing zeros (`.25Z`). The service accepts both.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(
            parse_expiry("10s", now()).unwrap(),
            now() + TimeDelta::seconds(10)
        );
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(
            parse_expiry("30m", now()).unwrap(),
            now() + TimeDelta::minutes(30)
        );
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(
            parse_expiry("2h", now()).unwrap(),
            now() + TimeDelta::hours(2)
        );
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_expiry("0m", now()).unwrap(), now());
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(parse_expiry("abcs", now()), Err(ExpiryError::Malformed));
    }

    #[test]
    fn test_parse_unknown_unit_is_malformed() {
        assert_eq!(parse_expiry("10x", now()), Err(ExpiryError::Malformed));
        assert_eq!(parse_expiry("", now()), Err(ExpiryError::Malformed));
    }

    #[test]
    fn test_parse_non_ascii_digits_is_malformed() {
        assert_eq!(parse_expiry("١٠s", now()), Err(ExpiryError::Malformed));
        assert_eq!(parse_expiry("１０m", now()), Err(ExpiryError::Malformed));
    }

    #[test]
    fn test_parse_prefixed_count() {
        assert_eq!(parse_expiry("x10s", now()), Err(ExpiryError::InvalidCount));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(parse_expiry("10sx", now()), Err(ExpiryError::InvalidCount));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_expiry("99999999999999999999h", now()),
            Err(ExpiryError::InvalidCount)
        );
        assert_eq!(
            parse_expiry("9999999999999h", now()),
            Err(ExpiryError::InvalidCount)
        );
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&now()), "2020-01-05T08:00:00Z");
        assert_eq!(
            format_timestamp(&(now() + TimeDelta::milliseconds(250))),
            "2020-01-05T08:00:00.250Z"
        );
    }
}
