//! Display formatting for show start times.
//!
//! Times are rendered in UTC with English day and month names.

use serde::Deserialize;

use crate::types::Timestamp;

/// `Tue 12, 03, 2019 5:00PM`
const MEDIUM_PATTERN: &str = "%a %m, %d, %Y %-I:%M%p";

/// `Tuesday December, 3, 2019 at 5:00PM`
const FULL_PATTERN: &str = "%A %B, %-d, %Y at %-I:%M%p";

/// Named display styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[default]
    Medium,
    Full,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Medium => MEDIUM_PATTERN,
            DateStyle::Full => FULL_PATTERN,
        }
    }
}

/// Render a timestamp in the given style.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use fyyur_core::datetime::{format_datetime, DateStyle};
///
/// let t = chrono::Utc.with_ymd_and_hms(2019, 12, 3, 17, 0, 0).unwrap();
/// assert_eq!(format_datetime(t, DateStyle::Medium), "Tue 12, 03, 2019 5:00PM");
/// ```
pub fn format_datetime(value: Timestamp, style: DateStyle) -> String {
    value.format(style.pattern()).to_string()
}
