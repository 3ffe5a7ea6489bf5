//! Integration tests for the attendance report engine.
//!
//! This test suite covers the full pipeline:
//! - Calendar generation and rest day marking
//! - Matrix building from recorded and synthetic statuses
//! - Aggregation into month counters
//! - Document layout for month and year exports
//! - Spreadsheet export and delivery
//! - HTTP endpoints

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::{
    ConfigLoader, EngineConfig, OrganizationConfig, PolicyConfig, StatusProbabilities,
};
use attendance_engine::engine::{RandomStatusSource, RecordedStatusSource};
use attendance_engine::error::ReportError;
use attendance_engine::export::{ArtifactSink, DirectorySink};
use attendance_engine::models::{AttendanceStatus, Employee, ReportRequest, Roster};
use attendance_engine::pipeline::ReportPipeline;
use attendance_engine::report::{CellStyle, CellValue, DAY_COLUMNS, RowKind};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_config() -> EngineConfig {
    EngineConfig::new(
        OrganizationConfig {
            name: "ACME".to_string(),
        },
        PolicyConfig::default(),
    )
}

fn create_roster(size: u32) -> Roster {
    Roster::new(
        (1..=size)
            .map(|id| Employee {
                id,
                display_name: format!("Employee {}", id),
                employee_code: format!("EMP-{:04}", id),
            })
            .collect(),
    )
    .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_export(router: Router, body: Value) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reports/attendance")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// =============================================================================
// End-to-end: February 2024
// =============================================================================

#[test]
fn test_february_2024_all_present_single_employee() {
    let config = create_config();
    let roster = create_roster(1);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);

    let report = pipeline.build_month(2024, 1, &mut source).unwrap();

    assert_eq!(report.matrix.days().len(), 29);
    let rest_days: Vec<u32> = report
        .matrix
        .days()
        .iter()
        .filter(|d| d.is_rest_day)
        .map(|d| d.ordinal)
        .collect();
    assert_eq!(rest_days, vec![4, 11, 18, 25]);

    let summary = report.summaries[0];
    assert_eq!(summary.present_count, 25);
    assert_eq!(summary.absent_count, 0);
    assert_eq!(summary.half_day_count, 0);
}

#[test]
fn test_february_2024_document_layout() {
    let config = create_config();
    let roster = create_roster(1);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);

    let document = pipeline
        .build_document(&ReportRequest::month(2024, 1), &mut source)
        .unwrap();

    assert_eq!(document.title().cells[0].as_text(), Some("ACME - ATTENDANCE REPORT 2024"));
    assert_eq!(document.sections().len(), 1);

    let section = &document.sections()[0];
    assert_eq!(section.rows[0].kind, RowKind::SectionTitle);
    assert_eq!(section.rows[0].cells[0].as_text(), Some("FEBRUARY 2024"));

    let row = section.employee_rows().next().unwrap();
    let days = row.day_cells();
    assert_eq!(days.len(), DAY_COLUMNS);

    let populated = days.iter().filter(|c| c.value != CellValue::Empty).count();
    assert_eq!(populated, 29);
    assert!(days[29..].iter().all(|c| c.style == CellStyle::Blank));

    // 4 February 2024 is a Sunday
    assert_eq!(days[3].as_text(), Some("OFF"));
    assert_eq!(days[3].style, CellStyle::RestDay);
    assert_eq!(days[0].as_text(), Some("P"));

    let totals: Vec<&CellValue> = row.total_cells().iter().map(|c| &c.value).collect();
    assert_eq!(
        totals,
        vec![&CellValue::Number(25), &CellValue::Number(0), &CellValue::Number(0)]
    );
}

#[test]
fn test_recorded_statuses_are_counted() {
    let config = create_config();
    let roster = create_roster(2);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
    source.record(1, date(2024, 2, 1), AttendanceStatus::Absent);
    source.record(1, date(2024, 2, 2), AttendanceStatus::HalfDay);
    source.record(1, date(2024, 2, 5), AttendanceStatus::WorkStoppage);
    source.record(2, date(2024, 2, 6), AttendanceStatus::Absent);

    let report = pipeline.build_month(2024, 1, &mut source).unwrap();

    let first = report.summaries[0];
    assert_eq!(first.present_count, 22);
    assert_eq!(first.absent_count, 2);
    assert_eq!(first.half_day_count, 1);
    assert_eq!(first.work_stoppage_count, 1);

    let second = report.summaries[1];
    assert_eq!(second.present_count, 24);
    assert_eq!(second.absent_count, 1);
}

// =============================================================================
// Year export
// =============================================================================

#[test]
fn test_year_document_has_twelve_aligned_sections() {
    let config = create_config();
    let roster = create_roster(3);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RandomStatusSource::seeded(StatusProbabilities::default(), 11).unwrap();

    let document = pipeline
        .build_document(&ReportRequest::year(2023), &mut source)
        .unwrap();

    assert_eq!(document.sections().len(), 12);
    for (index, section) in document.sections().iter().enumerate() {
        assert_eq!(section.month, index as u32);
        assert_eq!(section.employee_rows().count(), 3);
        for row in section.employee_rows() {
            assert_eq!(row.day_cells().len(), DAY_COLUMNS);
        }
    }

    let spacers = document
        .rows()
        .iter()
        .filter(|row| row.kind == RowKind::Spacer)
        .count();
    assert_eq!(spacers, 11);
}

#[test]
fn test_counters_never_exceed_working_days() {
    let config = create_config();
    let roster = create_roster(5);
    let pipeline = ReportPipeline::new(&config, &roster);
    let bands = StatusProbabilities {
        half_day: 0.2,
        absent: 0.2,
        work_stoppage: 0.1,
    };
    let mut source = RandomStatusSource::seeded(bands, 2024).unwrap();

    for month in 0..12 {
        let report = pipeline.build_month(2024, month, &mut source).unwrap();
        let working_days = report.matrix.days().iter().filter(|d| !d.is_rest_day).count() as u32;
        for summary in &report.summaries {
            assert_eq!(summary.classified_days(), working_days);
            assert!(
                summary.present_count + summary.absent_count + summary.half_day_count
                    <= working_days
            );
        }
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_produces_identical_documents() {
    let config = create_config();
    let roster = create_roster(4);
    let pipeline = ReportPipeline::new(&config, &roster);

    let build = |seed| {
        let mut source = RandomStatusSource::seeded(StatusProbabilities::default(), seed).unwrap();
        pipeline
            .build_document(&ReportRequest::year(2024), &mut source)
            .unwrap()
    };

    assert_eq!(build(5), build(5));
}

#[test]
fn test_recorded_source_is_idempotent() {
    let config = create_config();
    let roster = create_roster(2);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Absent);
    source.record(2, date(2024, 3, 12), AttendanceStatus::Present);

    let first = pipeline
        .build_document(&ReportRequest::month(2024, 2), &mut source)
        .unwrap();
    let second = pipeline
        .build_document(&ReportRequest::month(2024, 2), &mut source)
        .unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_empty_roster_is_rejected() {
    let config = create_config();
    let roster = Roster::default();
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);

    let result = pipeline.run(&ReportRequest::year(2024), &mut source);
    assert!(matches!(result, Err(ReportError::EmptyRoster)));
}

#[test]
fn test_out_of_range_month_is_rejected() {
    let config = create_config();
    let roster = create_roster(1);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);

    let result = pipeline.run(&ReportRequest::month(2024, 12), &mut source);
    assert!(matches!(result, Err(ReportError::InvalidPeriod { month: 12, .. })));
}

// =============================================================================
// Export and delivery
// =============================================================================

#[test]
fn test_artifact_delivered_to_directory() {
    let dir = TempDir::new().unwrap();

    let config = create_config();
    let roster = create_roster(2);
    let pipeline = ReportPipeline::new(&config, &roster);
    let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
    let artifact = pipeline
        .run(&ReportRequest::month(2024, 1), &mut source)
        .unwrap();

    let sink = DirectorySink::new(dir.path());
    let path = sink.deliver(&artifact).unwrap();

    assert_eq!(path, dir.path().join("Attendance_Report_FEBRUARY_2024.xlsx"));
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, artifact.bytes);
    assert!(written.starts_with(b"PK"));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_http_month_export() {
    let (status, headers, body) = post_export(
        create_router_for_test(),
        json!({"year": 2024, "month": 1, "scope": "month", "seed": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=\"Attendance_Report_FEBRUARY_2024.xlsx\""
    );
    assert!(body.starts_with(b"PK"));
}

#[tokio::test]
async fn test_http_year_export() {
    let (status, headers, body) = post_export(
        create_router_for_test(),
        json!({"year": 2024, "month": 0, "scope": "year"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=\"Attendance_Report_ANNUAL_2024.xlsx\""
    );
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_http_year_out_of_range_returns_400() {
    let (status, _, body) = post_export(
        create_router_for_test(),
        json!({"year": 10000, "month": 0, "scope": "year"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_http_month_view_counters_match_statuses() {
    let (status, view) = get_json(create_router_for_test(), "/attendance/2024/1?seed=8").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["year"], 2024);
    assert_eq!(view["month"], 1);

    for employee in view["employees"].as_array().unwrap() {
        let statuses = employee["statuses"].as_array().unwrap();
        assert_eq!(statuses.len(), 29);

        let count = |name: &str| statuses.iter().filter(|s| *s == name).count() as u64;
        assert_eq!(employee["summary"]["present_count"], count("present"));
        assert_eq!(employee["summary"]["half_day_count"], count("half_day"));
        assert_eq!(
            employee["summary"]["absent_count"],
            count("absent") + count("work_stoppage")
        );
        assert_eq!(count("rest_day"), 4);
    }
}

#[tokio::test]
async fn test_http_month_view_invalid_month_returns_400() {
    let (status, error) = get_json(create_router_for_test(), "/attendance/2024/12").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_PERIOD");
}
