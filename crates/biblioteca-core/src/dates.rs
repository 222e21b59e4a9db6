//! Publication-date normalization.
//!
//! Stored publication dates are anchored at exactly 12:00:00 UTC of the
//! intended calendar day. Clients convert the stored instant to a local date
//! string for display; the midday anchor keeps that calendar day stable for
//! every timezone between UTC-12 and UTC+12. This is a permanent contract of
//! the `data_publicacao` field, not an implementation detail.

use crate::{BibliotecaError, BibliotecaResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Re-anchors an instant to midday UTC of its own UTC calendar day.
///
/// Idempotent: normalizing an already-normalized value yields the same
/// instant.
#[must_use]
pub fn normalize_to_midday_utc(instant: DateTime<Utc>) -> DateTime<Utc> {
    midday_utc(instant.date_naive())
}

/// Returns midday UTC on the given calendar day.
#[must_use]
pub fn midday_utc(day: NaiveDate) -> DateTime<Utc> {
    // 12:00:00 exists on every calendar day
    let midday = day.and_hms_opt(12, 0, 0).expect("12:00:00 is a valid time of day");
    Utc.from_utc_datetime(&midday)
}

/// Parses a publication date from its wire representation.
///
/// Accepts a bare `YYYY-MM-DD` calendar date or a full RFC 3339 timestamp;
/// either way the result is normalized to midday UTC of the calendar day.
pub fn parse_publication_date(raw: &str) -> BibliotecaResult<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(midday_utc(day));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(normalize_to_midday_utc(instant.with_timezone(&Utc)));
    }

    Err(BibliotecaError::validation(format!(
        "Invalid publication date '{}': expected YYYY-MM-DD or RFC 3339",
        raw
    )))
}
