//! `ADD_DATE` / `LAST_MODIFIED` handling
//!
//! Netscape exports store instants as decimal Unix seconds. A bad value only
//! loses that one timestamp; extraction carries on.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Parse an epoch-seconds attribute value
///
/// Empty means "no timestamp". Anything that is not a base-10 `i64` inside
/// chrono's representable range is logged and treated as absent.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    let secs: i64 = match value.parse() {
        Ok(secs) => secs,
        Err(err) => {
            tracing::warn!("Error parsing timestamp {:?}: {}", value, err);
            return None;
        }
    };

    let instant = DateTime::from_timestamp(secs, 0);
    if instant.is_none() {
        tracing::warn!("Timestamp {} is out of range", secs);
    }
    instant
}

/// RFC 3339 with second precision, `Z` when the offset is zero
pub fn format_timestamp(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
