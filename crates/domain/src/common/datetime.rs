//! DateTime parsing and formatting for boundary timestamps.
//!
//! Timestamps cross every boundary as ISO-8601 strings and live inside the
//! domain as `DateTime<Utc>`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DomainError;

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use starmap_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2026-02-01T00:00:00.000Z").unwrap();
/// assert_eq!(dt.year(), 2026);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s.trim()).map(|dt| dt.with_timezone(&Utc))
}

/// Parses a named boundary timestamp, reporting failures as
/// `PRESENTATION.INVALID_FIELD`.
pub fn parse_field_datetime(field: &str, s: &str) -> Result<DateTime<Utc>, DomainError> {
    parse_datetime(s).map_err(|err| {
        DomainError::invalid_field(format!("{field} must be an ISO-8601 timestamp: {err}"))
    })
}

/// Optional variant of [`parse_field_datetime`].
pub fn parse_optional_field_datetime(
    field: &str,
    s: Option<&str>,
) -> Result<Option<DateTime<Utc>>, DomainError> {
    s.map(|raw| parse_field_datetime(field, raw)).transpose()
}

/// Formats a timestamp the way boundary payloads carry it
/// (`2026-02-01T00:00:00.000Z`).
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
