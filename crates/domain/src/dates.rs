// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date handling for user-entered timestamps.
//!
//! Delivery dates arrive from clients in whatever shape the form produced:
//! a full ISO-8601 timestamp, a bare date, an empty string, or garbage.
//! A value that does not resolve to a real timestamp is treated as null,
//! which marks the load as active (not yet delivered).

use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// Formats a timestamp as an ISO-8601 string.
///
/// Falls back to a debug rendering if formatting fails, which cannot
/// happen for the well-known ISO-8601 description.
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Iso8601::DEFAULT)
        .unwrap_or_else(|_| format!("{timestamp:?}"))
}

/// Returns the current UTC time as an ISO-8601 string.
#[must_use]
pub fn now_utc_iso() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

/// Resolves a user-supplied delivery date to a canonical ISO-8601 string.
///
/// Returns `None` when the value is missing, empty, or not parseable as a
/// timestamp, which marks the load as active. Accepted shapes, tried in
/// order:
///
/// - full ISO-8601 timestamp with offset (`2026-03-01T14:30:00Z`)
/// - ISO-8601 date-time without offset (assumed UTC)
/// - bare ISO-8601 date (midnight UTC)
#[must_use]
pub fn resolve_delivered_date(raw: Option<&str>) -> Option<String> {
    let value: &str = raw?.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = OffsetDateTime::parse(value, &Iso8601::DEFAULT) {
        return Some(format_timestamp(parsed));
    }

    if let Ok(parsed) = PrimitiveDateTime::parse(value, &Iso8601::DEFAULT) {
        return Some(format_timestamp(parsed.assume_offset(UtcOffset::UTC)));
    }

    if let Ok(parsed) = Date::parse(value, &Iso8601::DEFAULT) {
        let midnight: PrimitiveDateTime = PrimitiveDateTime::new(parsed, Time::MIDNIGHT);
        return Some(format_timestamp(midnight.assume_offset(UtcOffset::UTC)));
    }

    None
}
