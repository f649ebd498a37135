use crate::data_types::{TimeUnit, Timestamp};
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Determines the best date format based on the visible time range (in seconds).
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

/// Formats a timestamp according to the specified format and unit.
pub fn format_timestamp(value: f64, format: SmartDateFormat, unit: TimeUnit) -> String {
    let seconds = match unit {
        TimeUnit::Seconds => value as i64,
        TimeUnit::Milliseconds => (value / 1000.0).floor() as i64,
    };

    let dt = match Utc.timestamp_opt(seconds, 0) {
        chrono::LocalResult::Single(d) => d,
        chrono::LocalResult::Ambiguous(d, _) => d,
        chrono::LocalResult::None => return format!("{:.2}", value),
    };

    match format {
        SmartDateFormat::Year => dt.format("%Y").to_string(),
        SmartDateFormat::MonthYear => dt.format("%b %Y").to_string(),
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}

/// Axis tag text for a trend-line date, e.g. `Sun 05 Jan' 25 14:30`.
pub fn format_tag_date(ms: Timestamp, tz: Tz) -> String {
    match tz.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(d) | chrono::LocalResult::Ambiguous(d, _) => {
            d.format("%a %d %b' %y %H:%M").to_string()
        }
        chrono::LocalResult::None => ms.to_string(),
    }
}

/// Tooltip date line, RFC 2822 style in UTC.
pub fn format_utc(ms: Timestamp) -> String {
    match Utc.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(d) | chrono::LocalResult::Ambiguous(d, _) => {
            d.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
        }
        chrono::LocalResult::None => ms.to_string(),
    }
}

/// Tag text for a price: at most two decimals, no trailing zeros.
pub fn format_price(price: f64) -> String {
    format!("{}", round_price(price))
}

pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// `1234567.0` -> `1,234,567`.
pub fn format_volume(volume: f64) -> String {
    let rounded = volume.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}
