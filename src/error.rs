//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can abort a report request.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// Errors fall into three groups: input errors (bad period, empty or
/// inconsistent roster, bad configuration), alignment errors (a status
/// sequence that does not line up with its calendar), and export-boundary
/// errors (the document could not be serialized or delivered).
///
/// # Example
///
/// ```
/// use attendance_engine::error::ReportError;
///
/// let error = ReportError::InvalidPeriod {
///     year: 2024,
///     month: 12,
///     message: "month index must be between 0 and 11".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid report period 2024/12: month index must be between 0 and 11"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The requested year/month combination cannot be reported on.
    #[error("Invalid report period {year}/{month}: {message}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested zero-based month index.
        month: u32,
        /// Why the period was rejected.
        message: String,
    },

    /// The roster supplied to the pipeline has no employees.
    #[error("Roster is empty: at least one employee is required")]
    EmptyRoster,

    /// Two roster entries share the same employee id.
    #[error("Duplicate employee id in roster: {id}")]
    DuplicateEmployee {
        /// The repeated id.
        id: u32,
    },

    /// A status sequence does not have one entry per calendar day.
    #[error(
        "Status sequence for employee {employee_id} has {actual} entries, calendar has {expected}"
    )]
    AlignmentMismatch {
        /// The employee whose row is misaligned.
        employee_id: u32,
        /// The calendar length.
        expected: usize,
        /// The status sequence length.
        actual: usize,
    },

    /// A status source produced a status that is not valid for the day.
    #[error("Invalid attendance observation for employee {employee_id} on {date}: {message}")]
    InvalidObservation {
        /// The employee the observation belongs to.
        employee_id: u32,
        /// The calendar date of the observation.
        date: NaiveDate,
        /// What was wrong with it.
        message: String,
    },

    /// The report document could not be turned into a spreadsheet.
    #[error("Failed to serialize report: {message}")]
    SerializationError {
        /// A description of the serialization failure.
        message: String,
    },

    /// The finished artifact could not be handed off.
    #[error("Failed to export '{filename}': {message}")]
    ExportError {
        /// The artifact name.
        filename: String,
        /// A description of the failure.
        message: String,
    },
}

impl ReportError {
    /// Returns true for errors caused by the request or the roster rather than by
    /// the engine or its configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReportError::InvalidPeriod { .. }
                | ReportError::EmptyRoster
                | ReportError::DuplicateEmployee { .. }
        )
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
