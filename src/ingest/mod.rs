//! Provider clients for the external data sources.
//!
//! Each submodule wraps one third-party API behind typed fetch functions and
//! pure normalizers. Clients do exactly one GET and no retries; failure
//! handling and fallback substitution belong to the aggregator.
//!
//! Submodules:
//! - `swpc`: NOAA Space Weather Prediction Center JSON feeds.
//! - `donki`: NASA DONKI event lists (keyed, trailing 7-day window).
//! - `openweather`: per-city air pollution and current weather.

pub mod donki;
pub mod openweather;
pub mod swpc;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Best-effort parse of the timestamp formats the providers emit: RFC 3339,
/// or the SWPC convention of naive UTC with space separator and optional
/// fractional seconds.
pub(crate) fn parse_time_tag(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%MZ"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_time_tag_accepts_rfc3339() {
        let dt = parse_time_tag("2026-08-30T12:00:00Z").expect("rfc3339 should parse");
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_time_tag_accepts_swpc_space_format() {
        assert!(parse_time_tag("2026-08-30 12:00:00.000").is_some());
        assert!(parse_time_tag("2026-08-30T12:00:00.000").is_some());
    }

    #[test]
    fn test_parse_time_tag_rejects_garbage() {
        assert!(parse_time_tag("not-a-time").is_none());
        assert!(parse_time_tag("").is_none());
    }
}
