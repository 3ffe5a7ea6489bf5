//! Attendance engine: calendar generation, matrix building and aggregation.
//!
//! This module contains the computation stages that run before a report is
//! serialized: generating the calendar for a month, classifying every
//! (employee, day) cell through a pluggable status source, and reducing each
//! employee's row into summary counters and an attendance rate.

mod aggregation;
mod calendar;
mod matrix;
mod status_source;

pub use aggregation::{attendance_rate, summarize, summarize_matrix};
pub use calendar::{days_in_month, generate_calendar, month_name};
pub use matrix::{AttendanceMatrix, MatrixRow, build_matrix};
pub use status_source::{RandomStatusSource, RecordedStatusSource, StatusSource};
