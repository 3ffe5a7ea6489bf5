//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::Employee;

/// The organization the report is produced for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationConfig {
    /// Name shown in the report title row.
    pub name: String,
}

/// Per-band probabilities used by the random status source.
///
/// The three bands are drawn in the order work stoppage, absent, half day;
/// whatever probability mass remains is `Present`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::StatusProbabilities;
///
/// let bands = StatusProbabilities {
///     half_day: 0.10,
///     absent: 0.05,
///     work_stoppage: 0.01,
/// };
/// assert!(bands.validate().is_ok());
/// assert!((bands.present() - 0.84).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusProbabilities {
    /// Probability of a half day.
    pub half_day: f64,
    /// Probability of an absence.
    pub absent: f64,
    /// Probability of a work stoppage.
    pub work_stoppage: f64,
}

impl Default for StatusProbabilities {
    fn default() -> Self {
        Self {
            half_day: 0.05,
            absent: 0.05,
            work_stoppage: 0.02,
        }
    }
}

impl StatusProbabilities {
    /// Returns the probability left for `Present`.
    pub fn present(&self) -> f64 {
        1.0 - (self.half_day + self.absent + self.work_stoppage)
    }

    /// Checks that every band lies in `[0, 1]` and that the bands sum to at most 1.
    pub fn validate(&self) -> ReportResult<()> {
        let bands = [
            ("status_probabilities.half_day", self.half_day),
            ("status_probabilities.absent", self.absent),
            ("status_probabilities.work_stoppage", self.work_stoppage),
        ];
        for (field, value) in bands {
            if !(0.0..=1.0).contains(&value) {
                return Err(ReportError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("probability {} is outside [0, 1]", value),
                });
            }
        }

        let total = self.half_day + self.absent + self.work_stoppage;
        if total > 1.0 {
            return Err(ReportError::InvalidConfig {
                field: "status_probabilities".to_string(),
                message: format!("band probabilities sum to {}, must be at most 1", total),
            });
        }
        Ok(())
    }
}

/// How work stoppage days are treated when computing an attendance rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStoppagePolicy {
    /// Stoppage days stay in the denominator as absences.
    #[default]
    CountAsAbsent,
    /// Stoppage days are removed from the working days.
    ExcludeFromWorkingDays,
}

/// Attendance rate settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AttendanceRateConfig {
    /// Treatment of work stoppage days.
    #[serde(default)]
    pub work_stoppage: WorkStoppagePolicy,
}

fn default_rest_day() -> Weekday {
    Weekday::Sun
}

/// Attendance policy from policy.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyConfig {
    /// The weekly rest day.
    #[serde(default = "default_rest_day")]
    pub rest_day: Weekday,
    /// Bands for the random status source.
    #[serde(default)]
    pub status_probabilities: StatusProbabilities,
    /// Attendance rate settings.
    #[serde(default)]
    pub attendance_rate: AttendanceRateConfig,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            rest_day: default_rest_day(),
            status_probabilities: StatusProbabilities::default(),
            attendance_rate: AttendanceRateConfig::default(),
        }
    }
}

/// Roster file structure from roster.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees in report order.
    pub employees: Vec<Employee>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    organization: OrganizationConfig,
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(organization: OrganizationConfig, policy: PolicyConfig) -> Self {
        Self {
            organization,
            policy,
        }
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the attendance policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
