//! Per-employee monthly summary counters.

use serde::{Deserialize, Serialize};

/// Counters derived from one employee's status sequence for a month.
///
/// `absent_count` includes work stoppage days; `work_stoppage_count` records
/// how many of those absences were stoppages. Half days are counted only in
/// `half_day_count`. Rest days contribute to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthSummary {
    /// The employee the counters belong to.
    pub employee_id: u32,
    /// Days marked present.
    pub present_count: u32,
    /// Days marked absent, including work stoppages.
    pub absent_count: u32,
    /// Days marked as half days.
    pub half_day_count: u32,
    /// Work stoppage days (already included in `absent_count`).
    pub work_stoppage_count: u32,
}

impl EmployeeMonthSummary {
    /// Returns the number of working days classified into a counter.
    pub fn classified_days(&self) -> u32 {
        self.present_count + self.absent_count + self.half_day_count
    }
}
