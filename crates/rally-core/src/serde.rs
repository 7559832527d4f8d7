// Module name shadows the `serde` crate, so use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serialize `NaiveDate` as `YYYY-MM-DD`, the calendar-day format carried in
/// QR payloads and scan URLs.
pub fn to_ymd<S>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&date.format("%Y-%m-%d").to_string())
}
