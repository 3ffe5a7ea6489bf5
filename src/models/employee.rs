//! Employee model and the roster that groups employees for a report.
//!
//! A roster is loaded once and treated as read-only input; each report
//! request borrows it for the duration of the pipeline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Represents an employee that appears on the attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, stable identifier for the employee.
    pub id: u32,
    /// The name shown in the report.
    pub display_name: String,
    /// The human-facing employee code (e.g., "EMP-0001").
    pub employee_code: String,
}

/// An ordered list of employees with unique ids.
///
/// Report rows follow roster order.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::{Employee, Roster};
///
/// let roster = Roster::new(vec![Employee {
///     id: 1,
///     display_name: "Ada Lovelace".to_string(),
///     employee_code: "EMP-0001".to_string(),
/// }])
/// .unwrap();
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates a roster, rejecting duplicate employee ids.
    ///
    /// An empty roster is allowed here; the report pipeline rejects it when
    /// a report is requested.
    pub fn new(employees: Vec<Employee>) -> ReportResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !seen.insert(employee.id) {
                return Err(ReportError::DuplicateEmployee { id: employee.id });
            }
        }
        Ok(Self { employees })
    }

    /// Returns the employees in roster order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
