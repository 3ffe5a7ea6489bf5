//! Aggregation of status sequences into monthly counters.

use rust_decimal::Decimal;

use crate::config::WorkStoppagePolicy;
use crate::models::{AttendanceStatus, EmployeeMonthSummary};

use super::AttendanceMatrix;

/// Reduces one employee's status sequence into summary counters.
///
/// `Present` counts as present, `HalfDay` as half day, `Absent` and
/// `WorkStoppage` both as absent. `RestDay` is ignored.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::summarize;
/// use attendance_engine::models::AttendanceStatus::*;
///
/// let summary = summarize(7, &[Present, Absent, WorkStoppage, HalfDay, RestDay, Present]);
/// assert_eq!(summary.employee_id, 7);
/// assert_eq!(summary.present_count, 2);
/// assert_eq!(summary.absent_count, 2);
/// assert_eq!(summary.half_day_count, 1);
/// assert_eq!(summary.work_stoppage_count, 1);
/// ```
pub fn summarize(employee_id: u32, statuses: &[AttendanceStatus]) -> EmployeeMonthSummary {
    let mut summary = EmployeeMonthSummary {
        employee_id,
        ..EmployeeMonthSummary::default()
    };

    for status in statuses {
        match status {
            AttendanceStatus::Present => summary.present_count += 1,
            AttendanceStatus::HalfDay => summary.half_day_count += 1,
            AttendanceStatus::Absent => summary.absent_count += 1,
            AttendanceStatus::WorkStoppage => {
                summary.absent_count += 1;
                summary.work_stoppage_count += 1;
            }
            AttendanceStatus::RestDay => {}
        }
    }

    summary
}

/// Summarizes every row of a matrix, in row order.
pub fn summarize_matrix(matrix: &AttendanceMatrix) -> Vec<EmployeeMonthSummary> {
    matrix
        .rows()
        .iter()
        .map(|row| summarize(row.employee_id, &row.statuses))
        .collect()
}

/// Computes an attendance percentage for a summary, rounded to two decimal places.
///
/// Half days are weighted 0.5. Under [`WorkStoppagePolicy::CountAsAbsent`] the
/// denominator is every classified working day; under
/// [`WorkStoppagePolicy::ExcludeFromWorkingDays`] stoppage days are removed
/// from it. Returns `None` when there are no working days to rate.
///
/// # Example
///
/// ```
/// use attendance_engine::config::WorkStoppagePolicy;
/// use attendance_engine::engine::attendance_rate;
/// use attendance_engine::models::EmployeeMonthSummary;
/// use rust_decimal::Decimal;
///
/// let summary = EmployeeMonthSummary {
///     employee_id: 1,
///     present_count: 18,
///     absent_count: 2,
///     half_day_count: 0,
///     work_stoppage_count: 2,
/// };
/// assert_eq!(
///     attendance_rate(&summary, WorkStoppagePolicy::CountAsAbsent),
///     Some(Decimal::new(9000, 2))
/// );
/// assert_eq!(
///     attendance_rate(&summary, WorkStoppagePolicy::ExcludeFromWorkingDays),
///     Some(Decimal::new(10000, 2))
/// );
/// ```
pub fn attendance_rate(
    summary: &EmployeeMonthSummary,
    policy: WorkStoppagePolicy,
) -> Option<Decimal> {
    let working_days = match policy {
        WorkStoppagePolicy::CountAsAbsent => summary.classified_days(),
        WorkStoppagePolicy::ExcludeFromWorkingDays => {
            summary
                .classified_days()
                .saturating_sub(summary.work_stoppage_count)
        }
    };
    if working_days == 0 {
        return None;
    }

    let attended = Decimal::from(summary.present_count)
        + Decimal::from(summary.half_day_count) * Decimal::new(5, 1);
    let rate = attended * Decimal::ONE_HUNDRED / Decimal::from(working_days);
    Some(rate.round_dp(2))
}
