//! Report request model.
//!
//! A request names the year, a zero-based month index, and whether a single
//! month or the whole year is exported. Request parameters are passed into
//! the pipeline on every invocation.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Earliest year a report can be generated for.
pub const MIN_REPORT_YEAR: i32 = 1900;

/// Latest year a report can be generated for.
pub const MAX_REPORT_YEAR: i32 = 9999;

/// The export range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportScope {
    /// A single month.
    Month,
    /// All twelve months of the year, January to December.
    Year,
}

impl std::fmt::Display for ReportScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportScope::Month => write!(f, "month"),
            ReportScope::Year => write!(f, "year"),
        }
    }
}

/// Parameters of one report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The calendar year.
    pub year: i32,
    /// Zero-based month index (0 = January, 11 = December).
    pub month: u32,
    /// Month or full-year export.
    pub scope: ReportScope,
}

impl ReportRequest {
    /// Creates a single-month request.
    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            scope: ReportScope::Month,
        }
    }

    /// Creates a full-year request.
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: 0,
            scope: ReportScope::Year,
        }
    }

    /// Checks that the year and month can be reported on.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::ReportRequest;
    ///
    /// assert!(ReportRequest::month(2024, 1).validate().is_ok());
    /// assert!(ReportRequest::month(2024, 12).validate().is_err());
    /// ```
    pub fn validate(&self) -> ReportResult<()> {
        validate_period(self.year, self.month)
    }

    /// Returns the zero-based month indices covered by the request, in calendar order.
    pub fn months(&self) -> Vec<u32> {
        match self.scope {
            ReportScope::Month => vec![self.month],
            ReportScope::Year => (0..12).collect(),
        }
    }
}

/// Checks a year and zero-based month index.
pub fn validate_period(year: i32, month: u32) -> ReportResult<()> {
    if month > 11 {
        return Err(ReportError::InvalidPeriod {
            year,
            month,
            message: "month index must be between 0 and 11".to_string(),
        });
    }
    if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
        return Err(ReportError::InvalidPeriod {
            year,
            month,
            message: format!(
                "year must be between {} and {}",
                MIN_REPORT_YEAR, MAX_REPORT_YEAR
            ),
        });
    }
    Ok(())
}
