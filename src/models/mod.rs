//! Core data models for the attendance engine.
//!
//! This module contains the domain models shared by the calendar, matrix,
//! aggregation and report modules.

mod attendance;
mod calendar_day;
mod employee;
mod report_request;
mod summary;

pub use attendance::AttendanceStatus;
pub use calendar_day::{CalendarDay, weekday_short_name};
pub use employee::{Employee, Roster};
pub use report_request::{
    MAX_REPORT_YEAR, MIN_REPORT_YEAR, ReportRequest, ReportScope, validate_period,
};
pub use summary::EmployeeMonthSummary;
