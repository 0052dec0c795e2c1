//! Wall-clock helpers: capturing the current time of day and rendering a
//! stored `HH:MM:SS` timestamp on a 12-hour clock.

use super::error::TimeFormatError;
use chrono::{Local, NaiveTime};

/// Format of the timestamps stored in the daily log.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// 12-hour display format, e.g. `6:05:09 PM`.
const TWELVE_HOUR_FORMAT: &str = "%-I:%M:%S %p";

/// Converts a 24-hour `HH:MM:SS` timestamp to `H:MM:SS AM/PM`.
///
/// Midnight maps to `12 AM` and noon to `12 PM`. Only the time of day is
/// involved, so the output never depends on the current date.
///
/// # Errors
///
/// Returns [`TimeFormatError::Malformed`] when the input is not a valid
/// `HH:MM:SS` time.
///
/// # Examples
///
/// ```rust
/// use headcount::libs::clock::format_12_hour;
///
/// assert_eq!(format_12_hour("18:00:00").unwrap(), "6:00:00 PM");
/// assert_eq!(format_12_hour("00:00:00").unwrap(), "12:00:00 AM");
/// assert!(format_12_hour("not a time").is_err());
/// ```
pub fn format_12_hour(time: &str) -> Result<String, TimeFormatError> {
    let parsed = parse_timestamp(time)?;
    Ok(parsed.format(TWELVE_HOUR_FORMAT).to_string())
}

/// Parses a stored `HH:MM:SS` timestamp.
pub fn parse_timestamp(time: &str) -> Result<NaiveTime, TimeFormatError> {
    NaiveTime::parse_from_str(time, TIMESTAMP_FORMAT).map_err(|_| TimeFormatError::Malformed(time.to_string()))
}

/// Infallible variant of [`format_12_hour`] for display purposes.
///
/// A timestamp that cannot be parsed (for example after a log file was
/// edited by hand) is shown as stored.
pub fn display_time(time: &str) -> String {
    format_12_hour(time).unwrap_or_else(|_| time.to_string())
}

/// Current local time of day as `HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
