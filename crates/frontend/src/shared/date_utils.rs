/// Utilities for date and time formatting and form coercion
///
/// Server timestamps are RFC 3339 (usually UTC) or naive local timestamps.
/// Form inputs use the `datetime-local` format `YYYY-MM-DDTHH:MM`.
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Display;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Server timestamp as wall-clock time in `tz`, `None` when unparsable
fn parse_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
}

/// Format a server timestamp for table cells: `DD/MM/YYYY HH:MM` in `tz`.
/// Unparsable values are shown as-is.
pub fn format_datetime_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_in(value, tz) {
        Some(naive) => naive.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

pub fn format_datetime(value: &str) -> String {
    format_datetime_in(value, &Local)
}

/// Server timestamp to the value of a `datetime-local` input; blank when invalid
pub fn to_datetime_input_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String {
    parse_in(value, tz)
        .map(|naive| naive.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// `datetime-local` input value (wall clock in `tz`) to an RFC 3339 UTC timestamp
/// with millisecond precision. `None` for blank or invalid input.
pub fn datetime_input_to_utc_in<Tz>(value: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(
        local
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Wall-clock fields written in ISO form with a `Z` suffix
pub fn wall_clock_iso(naive: &NaiveDateTime) -> String {
    naive.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Device wall-clock time as sent to the sales API.
///
/// The sales API stores the local time of the point of sale verbatim, so the
/// local fields are sent without conversion to UTC.
pub fn local_wall_clock_iso() -> String {
    wall_clock_iso(&Local::now().naive_local())
}

/// Format a timestamp that already holds wall-clock fields (sales), ignoring
/// any offset or `Z` suffix.
pub fn format_wall_clock(value: &str) -> String {
    format_datetime_in(value, &Utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26.123Z", &Utc),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime_in("2024-12-31 23:59:59", &Utc), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_datetime_converts_zone() {
        let bogota = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26Z", &bogota),
            "15/03/2024 09:02"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime_in("invalid", &Utc), "invalid");
        assert_eq!(format_datetime_in("", &Utc), "");
        assert_eq!(to_datetime_input_in("invalid", &Utc), "");
    }

    #[test]
    fn test_input_round_trip_through_utc() {
        let bogota = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            datetime_input_to_utc_in("2024-05-02T08:30", &bogota).as_deref(),
            Some("2024-05-02T13:30:00.000Z")
        );
        assert_eq!(
            to_datetime_input_in("2024-05-02T13:30:00.000Z", &bogota),
            "2024-05-02T08:30"
        );
    }

    #[test]
    fn test_wall_clock_is_not_shifted() {
        let sold_at = NaiveDateTime::parse_from_str("2024-06-01T10:00", INPUT_FORMAT).unwrap();
        let sent = wall_clock_iso(&sold_at);
        assert_eq!(sent, "2024-06-01T10:00:00.000Z");
        assert_eq!(format_wall_clock(&sent), "01/06/2024 10:00");

        let bogota = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_ne!(format_datetime_in(&sent, &bogota), format_wall_clock(&sent));
    }

    #[test]
    fn test_wall_clock_naive_and_invalid() {
        assert_eq!(format_wall_clock("2024-06-01 18:45:00"), "01/06/2024 18:45");
        assert_eq!(format_wall_clock("ayer"), "ayer");
    }

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(datetime_input_to_utc_in("", &Utc), None);
        assert_eq!(datetime_input_to_utc_in("02/05/2024", &Utc), None);
    }
}
