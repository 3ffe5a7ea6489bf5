//! Attendance status model.

use serde::{Deserialize, Serialize};

/// The status recorded for one employee on one day.
///
/// `RestDay` is never observed; it is emitted for every rest day in place of
/// an observation and is excluded from all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee attended the full day.
    Present,
    /// The employee did not attend.
    Absent,
    /// The employee attended half of the day.
    HalfDay,
    /// Company-wide non-attendance (e.g., machine downtime). Counted as absent.
    WorkStoppage,
    /// The weekly rest day.
    RestDay,
}

impl AttendanceStatus {
    /// Every status that a status source may report for a working day.
    pub const OBSERVED: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
        AttendanceStatus::WorkStoppage,
    ];

    /// Returns the short code written into report cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::Present.short_code(), "P");
    /// assert_eq!(AttendanceStatus::RestDay.short_code(), "OFF");
    /// ```
    pub fn short_code(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::HalfDay => "HD",
            AttendanceStatus::WorkStoppage => "WS",
            AttendanceStatus::RestDay => "OFF",
        }
    }

    /// Returns true for statuses that describe a real observation.
    pub fn is_observed(self) -> bool {
        self != AttendanceStatus::RestDay
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::HalfDay => write!(f, "Half Day"),
            AttendanceStatus::WorkStoppage => write!(f, "Work Stoppage"),
            AttendanceStatus::RestDay => write!(f, "Rest Day"),
        }
    }
}
