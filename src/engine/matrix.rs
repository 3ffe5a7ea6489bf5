//! Attendance matrix construction.
//!
//! The matrix holds one status per (employee, day) cell. Each employee row
//! is index-aligned with the calendar it was built from: position `i` in a
//! row is the status for `days[i]`. Every constructor enforces that
//! alignment and rejects mismatched rows instead of padding or truncating.

use serde::Serialize;

use crate::error::{ReportError, ReportResult};
use crate::models::{AttendanceStatus, CalendarDay, Roster};

use super::StatusSource;

/// One employee's statuses for a month, aligned with the matrix calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    /// The employee the row belongs to.
    pub employee_id: u32,
    /// One status per calendar day.
    pub statuses: Vec<AttendanceStatus>,
}

/// A calendar plus one aligned status row per employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceMatrix {
    days: Vec<CalendarDay>,
    rows: Vec<MatrixRow>,
}

impl AttendanceMatrix {
    /// Assembles a matrix from precomputed rows.
    ///
    /// Returns [`ReportError::AlignmentMismatch`] if any row length differs
    /// from the calendar length, and [`ReportError::InvalidObservation`] if a
    /// rest day carries an observed status or a working day carries `RestDay`.
    pub fn new(days: Vec<CalendarDay>, rows: Vec<MatrixRow>) -> ReportResult<Self> {
        for row in &rows {
            check_row(&days, row)?;
        }
        Ok(Self { days, rows })
    }

    /// Returns the calendar the matrix is aligned with.
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the employee rows in roster order.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Returns the statuses for one employee.
    pub fn statuses_for(&self, employee_id: u32) -> Option<&[AttendanceStatus]> {
        self.rows
            .iter()
            .find(|row| row.employee_id == employee_id)
            .map(|row| row.statuses.as_slice())
    }

    /// Returns the status for one employee on a 1-based day ordinal.
    pub fn status_on(&self, employee_id: u32, ordinal: u32) -> Option<AttendanceStatus> {
        let index = (ordinal as usize).checked_sub(1)?;
        self.statuses_for(employee_id)?.get(index).copied()
    }
}

fn check_row(days: &[CalendarDay], row: &MatrixRow) -> ReportResult<()> {
    if row.statuses.len() != days.len() {
        return Err(ReportError::AlignmentMismatch {
            employee_id: row.employee_id,
            expected: days.len(),
            actual: row.statuses.len(),
        });
    }

    for (day, status) in days.iter().zip(&row.statuses) {
        if day.is_rest_day != (*status == AttendanceStatus::RestDay) {
            return Err(ReportError::InvalidObservation {
                employee_id: row.employee_id,
                date: day.date,
                message: if day.is_rest_day {
                    format!("rest day carries observed status '{}'", status)
                } else {
                    "rest day status reported for a working day".to_string()
                },
            });
        }
    }
    Ok(())
}

/// Builds the attendance matrix for a roster over a calendar.
///
/// Rest days are filled with [`AttendanceStatus::RestDay`] without consulting
/// the source; every working day is classified by `source`.
///
/// # Arguments
///
/// * `roster` - Employees in report order
/// * `days` - The calendar for the month
/// * `source` - Where working-day statuses come from
///
/// # Example
///
/// ```
/// use attendance_engine::engine::{build_matrix, generate_calendar, RecordedStatusSource};
/// use attendance_engine::models::{AttendanceStatus, Employee, Roster};
/// use chrono::Weekday;
///
/// let roster = Roster::new(vec![Employee {
///     id: 1,
///     display_name: "Ada Lovelace".to_string(),
///     employee_code: "EMP-0001".to_string(),
/// }])
/// .unwrap();
/// let days = generate_calendar(2024, 1, Weekday::Sun).unwrap();
/// let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
///
/// let matrix = build_matrix(&roster, &days, &mut source).unwrap();
/// assert_eq!(matrix.statuses_for(1).unwrap().len(), 29);
/// assert_eq!(matrix.status_on(1, 4), Some(AttendanceStatus::RestDay));
/// ```
pub fn build_matrix<S: StatusSource + ?Sized>(
    roster: &Roster,
    days: &[CalendarDay],
    source: &mut S,
) -> ReportResult<AttendanceMatrix> {
    let mut rows = Vec::with_capacity(roster.len());

    for employee in roster.employees() {
        let mut statuses = Vec::with_capacity(days.len());
        for day in days {
            if day.is_rest_day {
                statuses.push(AttendanceStatus::RestDay);
                continue;
            }

            let status = source.classify(employee.id, day);
            if !status.is_observed() {
                return Err(ReportError::InvalidObservation {
                    employee_id: employee.id,
                    date: day.date,
                    message: "rest day status reported for a working day".to_string(),
                });
            }
            statuses.push(status);
        }
        rows.push(MatrixRow {
            employee_id: employee.id,
            statuses,
        });
    }

    AttendanceMatrix::new(days.to_vec(), rows)
}
