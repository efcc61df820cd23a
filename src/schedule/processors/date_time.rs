use crate::constants::games::TIME_RANGE_SEPARATOR;
use crate::error::AppError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Month abbreviations as printed by the rink pages.
const MONTHS: [(&str, u32); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Looks up the month number for a three-letter English abbreviation.
pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(abbrev))
        .map(|(_, number)| *number)
}

/// Converts the page's date and time text into a timestamp.
///
/// # Arguments
/// * `raw_date` - Date as "Ddd Mmm dd, yyyy", e.g. "Mon Mar 10, 2025"
/// * `raw_time` - Start time or time range, e.g. "6:00 PM - 7:00 PM".
///   Only the start is used.
///
/// # Returns
/// * `Ok(NaiveDateTime)` - Local rink time with zero seconds
/// * `Err(AppError::DateTimeParse)` - Text did not match the expected layout
///
/// # Examples
/// ```
/// use ice_scraper::schedule::processors::normalize;
///
/// let start = normalize("Mon Mar 10, 2025", "6:00 PM - 7:00 PM").unwrap();
/// assert_eq!(start.to_string(), "2025-03-10 18:00:00");
/// ```
pub fn normalize(raw_date: &str, raw_time: &str) -> Result<NaiveDateTime, AppError> {
    let date = parse_date(raw_date)?;
    let time = parse_start_time(raw_time)?;
    Ok(date.and_time(time))
}

/// Parses "Ddd Mmm dd, yyyy". The weekday must be present but is not checked
/// against the date.
pub fn parse_date(raw_date: &str) -> Result<NaiveDate, AppError> {
    let tokens: Vec<&str> = raw_date.split_whitespace().collect();
    let [_weekday, month, day, year] = tokens.as_slice() else {
        return Err(AppError::datetime_parse_error(format!(
            "Expected 'Ddd Mmm dd, yyyy', got '{raw_date}'"
        )));
    };

    let month = month_number(month).ok_or_else(|| {
        AppError::datetime_parse_error(format!("Unknown month '{month}' in '{raw_date}'"))
    })?;
    let day: u32 = day.trim_end_matches(',').parse().map_err(|_| {
        AppError::datetime_parse_error(format!("Invalid day '{day}' in '{raw_date}'"))
    })?;
    let year: i32 = year.trim_end_matches(',').parse().map_err(|_| {
        AppError::datetime_parse_error(format!("Invalid year '{year}' in '{raw_date}'"))
    })?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::datetime_parse_error(format!("No such calendar date: '{raw_date}'"))
    })
}

/// Parses the start of "hh:mm AM - hh:mm PM" into a 24-hour time.
///
/// 12 AM is midnight and 12 PM is noon.
pub fn parse_start_time(raw_time: &str) -> Result<NaiveTime, AppError> {
    let invalid =
        || AppError::datetime_parse_error(format!("Expected 'hh:mm AM|PM', got '{raw_time}'"));

    let start = raw_time
        .split(TIME_RANGE_SEPARATOR)
        .next()
        .unwrap_or(raw_time)
        .trim()
        .to_ascii_uppercase();

    let (clock, is_pm) = if let Some(clock) = start.strip_suffix("PM") {
        (clock, true)
    } else if let Some(clock) = start.strip_suffix("AM") {
        (clock, false)
    } else {
        return Err(invalid());
    };

    let (hour, minute) = clock.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = minute.trim().parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Canonical text form, "YYYY-MM-DD HH:MM:SS".
pub fn format_canonical(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Renders the date back in the page's style, e.g. "Wed Apr 02, 2025".
pub fn format_source_date(timestamp: &NaiveDateTime) -> String {
    format!(
        "{} {:02}, {}",
        timestamp.format("%a %b"),
        timestamp.day(),
        timestamp.year()
    )
}

/// Renders the time back in the page's style, e.g. "7:30 PM".
pub fn format_source_time(timestamp: &NaiveDateTime) -> String {
    let (is_pm, hour) = timestamp.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {meridiem}", timestamp.minute())
}
