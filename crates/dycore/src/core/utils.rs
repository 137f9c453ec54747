use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Layout used for every rendered timestamp
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render epoch seconds as `YYYY-MM-DD HH:MM:SS` in the host's local zone.
///
/// Returns `None` only for timestamps chrono cannot represent.
///
/// # Examples
///
/// ```
/// use dycore::format_epoch_seconds;
///
/// let formatted = format_epoch_seconds(1_700_000_000).unwrap();
/// assert_eq!(formatted.len(), 19);
/// ```
pub fn format_epoch_seconds(secs: i64) -> Option<String> {
    format_epoch_seconds_in(&Local, secs)
}

/// Same as [`format_epoch_seconds`] for an explicit time zone.
pub fn format_epoch_seconds_in<Tz>(tz: &Tz, secs: i64) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(secs, 0)
        .single()
        .map(|datetime| datetime.format(DATE_FORMAT).to_string())
}

/// First `max_chars` characters of `text`, for log lines
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
