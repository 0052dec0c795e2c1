//! Daily log file naming.

use chrono::{Datelike, Local};

pub const LOG_FILE_PREFIX: &str = "groups_log_";
pub const LOG_FILE_EXTENSION: &str = "json";

/// Zero-padded `YYYY_MM_DD` key of a calendar day.
///
/// Accepts anything carrying a calendar date, so a `NaiveDate` and a
/// `DateTime` on the same day produce the same key.
///
/// ```rust
/// use chrono::NaiveDate;
/// use headcount::libs::naming::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(date_key(&date), "2025_01_05");
/// ```
pub fn date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}_{:02}_{:02}", date.year(), date.month(), date.day())
}

/// Log file name for a calendar day: `groups_log_YYYY_MM_DD.json`.
pub fn log_filename<D: Datelike>(date: &D) -> String {
    format!("{}{}.{}", LOG_FILE_PREFIX, date_key(date), LOG_FILE_EXTENSION)
}

pub fn today_key() -> String {
    date_key(&Local::now().date_naive())
}

pub fn today_log_filename() -> String {
    log_filename(&Local::now().date_naive())
}
