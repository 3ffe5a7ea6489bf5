//! Calendar day model.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One day of a reported month.
///
/// Derived purely from the year and month it belongs to; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month, starting at 1.
    pub ordinal: u32,
    /// Three-letter weekday name (e.g., "Sun").
    pub weekday_short_name: String,
    /// True when the day falls on the weekly rest day.
    pub is_rest_day: bool,
    /// The calendar date.
    pub date: NaiveDate,
}

/// Returns the three-letter English name for a weekday.
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
