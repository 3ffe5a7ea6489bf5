//! Calendar generation.
//!
//! This module turns a year and a zero-based month index into the ordered
//! sequence of days for that month, tagging each day with its weekday and
//! whether it is the weekly rest day.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{ReportError, ReportResult};
use crate::models::{CalendarDay, validate_period, weekday_short_name};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a zero-based month index.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::month_name;
///
/// assert_eq!(month_name(1), Some("February"));
/// assert_eq!(month_name(12), None);
/// ```
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Returns the number of days in a month.
///
/// The count is the day-of-month of the day before the first day of the
/// following month, so leap years need no special case.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - Zero-based month index (0 = January)
///
/// # Example
///
/// ```
/// use attendance_engine::engine::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1).unwrap(), 29);
/// assert_eq!(days_in_month(2025, 1).unwrap(), 28);
/// assert_eq!(days_in_month(2025, 11).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> ReportResult<u32> {
    validate_period(year, month)?;

    let (next_year, next_month) = if month == 11 {
        (year + 1, 1)
    } else {
        (year, month + 2)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last_day| last_day.day())
        .ok_or_else(|| ReportError::InvalidPeriod {
            year,
            month,
            message: "month end is outside the supported date range".to_string(),
        })
}

/// Generates the ordered calendar for a month.
///
/// The result holds exactly one entry per day of the month, ordinals
/// `1..=N`, never padded or truncated.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - Zero-based month index (0 = January)
/// * `rest_day` - The weekly rest day
///
/// # Example
///
/// ```
/// use attendance_engine::engine::generate_calendar;
/// use chrono::Weekday;
///
/// let days = generate_calendar(2024, 1, Weekday::Sun).unwrap();
/// assert_eq!(days.len(), 29);
/// assert_eq!(days[0].weekday_short_name, "Thu");
/// assert!(days[3].is_rest_day); // 4 February 2024 was a Sunday
/// ```
pub fn generate_calendar(year: i32, month: u32, rest_day: Weekday) -> ReportResult<Vec<CalendarDay>> {
    let count = days_in_month(year, month)?;

    (1..=count)
        .map(|ordinal| {
            let date = NaiveDate::from_ymd_opt(year, month + 1, ordinal).ok_or_else(|| {
                ReportError::InvalidPeriod {
                    year,
                    month,
                    message: format!("day {} does not exist", ordinal),
                }
            })?;
            let weekday = date.weekday();
            Ok(CalendarDay {
                ordinal,
                weekday_short_name: weekday_short_name(weekday).to_string(),
                is_rest_day: weekday == rest_day,
                date,
            })
        })
        .collect()
}
