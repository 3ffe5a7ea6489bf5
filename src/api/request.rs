//! Request types for the attendance report API.

use serde::{Deserialize, Serialize};

use crate::models::{ReportRequest, ReportScope};

/// Request body for `POST /reports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The calendar year.
    pub year: i32,
    /// Zero-based month index (0 = January).
    pub month: u32,
    /// Month or full-year export.
    pub scope: ReportScope,
    /// Fixes the synthetic status draw so the same request yields the same report.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl From<&ExportRequest> for ReportRequest {
    fn from(request: &ExportRequest) -> Self {
        ReportRequest {
            year: request.year,
            month: request.month,
            scope: request.scope,
        }
    }
}

/// Query parameters for `GET /attendance/{year}/{month}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthViewQuery {
    /// Fixes the synthetic status draw.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_seed() {
        let json = r#"{"year": 2024, "month": 1, "scope": "month"}"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.seed, None);
        let report: ReportRequest = (&request).into();
        assert_eq!(report, ReportRequest::month(2024, 1));
    }

    #[test]
    fn test_deserialize_with_seed() {
        let json = r#"{"year": 2024, "month": 0, "scope": "year", "seed": 42}"#;
        let request: ExportRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.seed, Some(42));
        assert_eq!(request.scope, ReportScope::Year);
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        let json = r#"{"year": 2024, "month": 0, "scope": "quarter"}"#;
        assert!(serde_json::from_str::<ExportRequest>(json).is_err());
    }
}
