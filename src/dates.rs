//! Date and timezone helpers backed by `chrono` and the IANA database in `chrono-tz`

use crate::error::ArgumentError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc, Weekday};
use chrono_tz::{TZ_VARIANTS, Tz};

pub const DEFAULT_TIMEZONE: &str = "UTC";

const HUMAN_UNITS: [(i64, &str); 6] = [
    (31_536_000, "year"),
    (2_592_000, "month"),
    (604_800, "week"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// All IANA timezone identifiers known to the bundled database
pub fn timezone_identifiers() -> Vec<&'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
}

/// Identifiers under a region prefix such as `"Europe"` or `"America/Argentina"`
pub fn timezones_in_region(region: &str) -> Vec<&'static str> {
    let prefix = format!("{}/", region.trim_end_matches('/'));
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Accepts exactly what [`parse_timezone`] accepts
pub fn is_valid_timezone(name: &str) -> bool {
    parse_timezone(name).is_ok()
}

pub fn parse_timezone(name: &str) -> crate::Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| {
        ArgumentError::UnknownTimezone {
            name: name.to_string(),
        }
        .into()
    })
}

/// Offset from UTC in seconds for `name` at the instant `at`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use toolbelt::dates::timezone_offset;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(timezone_offset("Europe/Paris", winter)?, 3600);
/// # Ok(())
/// # }
/// ```
pub fn timezone_offset(name: &str, at: DateTime<Utc>) -> crate::Result<i32> {
    let tz = parse_timezone(name)?;
    Ok(tz
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc())
}

/// Render an offset in seconds as `+HH:MM`
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}

pub fn now_in(name: &str) -> crate::Result<DateTime<Tz>> {
    let tz = parse_timezone(name)?;
    Ok(Utc::now().with_timezone(&tz))
}

/// The same instant expressed in another timezone
pub fn convert_timezone<T: TimeZone>(datetime: &DateTime<T>, name: &str) -> crate::Result<DateTime<Tz>> {
    let tz = parse_timezone(name)?;
    Ok(datetime.with_timezone(&tz))
}

/// Whether `text` parses with the `chrono` format string `format`,
/// either as a date-time or as a plain date
pub fn is_valid_date(text: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(text, format).is_ok()
        || NaiveDate::parse_from_str(text, format).is_ok()
}

/// Signed number of days from `from` to `to`
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Completed years between `birth` and `on`
pub fn age(birth: NaiveDate, on: NaiveDate) -> crate::Result<u32> {
    if birth > on {
        return Err(ArgumentError::InvalidValue {
            field: "birth".to_string(),
            value: birth.to_string(),
            reason: format!("is after {}", on),
        }
        .into());
    }
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Ok(years.max(0).unsigned_abs())
}

/// Describe `moment` relative to `reference`: "3 days ago", "in 2 hours", "just now"
pub fn human_diff(moment: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let seconds = (moment - reference).num_seconds();
    let magnitude = seconds.abs();

    let Some((count, unit)) = HUMAN_UNITS
        .iter()
        .find(|(size, _)| magnitude >= *size)
        .map(|(size, unit)| (magnitude / size, *unit))
    else {
        return "just now".to_string();
    };

    let plural = if count == 1 { "" } else { "s" };
    if seconds < 0 {
        format!("{} {}{} ago", count, unit, plural)
    } else {
        format!("in {} {}{}", count, unit, plural)
    }
}
