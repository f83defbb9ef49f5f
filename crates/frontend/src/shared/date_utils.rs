//! Utilities for date and time formatting
//!
//! Renders timestamps the way `toLocaleDateString('ru-RU', { month: 'long' })`
//! does, with a fixed UTC offset so the output does not depend on the browser.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Parse an API timestamp.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC) and a bare
/// `YYYY-MM-DD`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn long_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} {} г.",
        dt.day(),
        MONTHS_GENITIVE[dt.month0() as usize],
        dt.year()
    )
}

/// Format a timestamp as "1 января 2025 г."
/// Unparseable input is returned as is.
pub fn format_date_long(value: &str, offset: FixedOffset) -> String {
    match parse_timestamp(value) {
        Some(dt) => long_date(&dt.with_timezone(&offset)),
        None => value.to_string(),
    }
}

/// Format a timestamp as "1 января 2025 г. в 15:00"
/// Unparseable input is returned as is.
pub fn format_datetime_long(value: &str, offset: FixedOffset) -> String {
    match parse_timestamp(value) {
        Some(dt) => {
            let local = dt.with_timezone(&offset);
            format!(
                "{} в {:02}:{:02}",
                long_date(&local),
                local.hour(),
                local.minute()
            )
        }
        None => value.to_string(),
    }
}

/// True when the timestamp is strictly before `now`. Unparseable input is never past.
pub fn is_past(value: &str, now: DateTime<Utc>) -> bool {
    parse_timestamp(value).is_some_and(|dt| dt < now)
}
