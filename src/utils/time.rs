use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant the way JavaScript's `Date.toISOString` does, e.g. `2021-05-01T00:00:00.000Z`
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 / RFC 3339 date-time with an explicit offset into UTC
pub fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serialize an instant with [`to_iso_string`]
pub fn serialize_iso<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&to_iso_string(dt))
}
