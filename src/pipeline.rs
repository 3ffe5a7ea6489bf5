//! End-to-end report pipeline.
//!
//! Runs calendar generation, matrix building, aggregation, rendering and
//! export for one request. Every invocation builds its own calendar, matrix
//! and summaries; nothing is cached between requests, and the roster is only
//! borrowed for the duration of the call.

use std::time::Instant;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::{
    StatusSource, attendance_rate, build_matrix, generate_calendar, month_name, summarize_matrix,
};
use crate::error::{ReportError, ReportResult};
use crate::export::{ExportArtifact, export_document, report_filename};
use crate::models::{
    AttendanceStatus, CalendarDay, EmployeeMonthSummary, ReportRequest, Roster, validate_period,
};
use crate::report::{MonthReport, ReportDocument, render_range};

/// One employee's row in the live month view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeMonthView {
    /// The employee id.
    pub employee_id: u32,
    /// The employee code.
    pub employee_code: String,
    /// The display name.
    pub display_name: String,
    /// One status per calendar day.
    pub statuses: Vec<AttendanceStatus>,
    /// Counters for the month.
    pub summary: EmployeeMonthSummary,
    /// Attendance percentage under the configured work stoppage rule.
    pub attendance_rate: Option<Decimal>,
}

/// The non-exported view of one month's matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    /// The calendar year.
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    /// English month name.
    pub month_name: String,
    /// The calendar for the month.
    pub days: Vec<CalendarDay>,
    /// One entry per employee, in roster order.
    pub employees: Vec<EmployeeMonthView>,
}

/// Builds reports for a roster under an engine configuration.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::engine::RandomStatusSource;
/// use attendance_engine::models::ReportRequest;
/// use attendance_engine::pipeline::ReportPipeline;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let pipeline = ReportPipeline::new(loader.config(), loader.roster());
/// let mut source = RandomStatusSource::from_entropy(loader.policy().status_probabilities).unwrap();
///
/// let artifact = pipeline.run(&ReportRequest::year(2024), &mut source).unwrap();
/// println!("{} ({} bytes)", artifact.filename, artifact.bytes.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportPipeline<'a> {
    config: &'a EngineConfig,
    roster: &'a Roster,
}

impl<'a> ReportPipeline<'a> {
    /// Creates a pipeline over a configuration and a roster snapshot.
    pub fn new(config: &'a EngineConfig, roster: &'a Roster) -> Self {
        Self { config, roster }
    }

    fn check_roster(&self) -> ReportResult<()> {
        if self.roster.is_empty() {
            return Err(ReportError::EmptyRoster);
        }
        Ok(())
    }

    /// Builds the matrix and summaries for one month.
    pub fn build_month<S: StatusSource + ?Sized>(
        &self,
        year: i32,
        month: u32,
        source: &mut S,
    ) -> ReportResult<MonthReport> {
        self.check_roster()?;
        validate_period(year, month)?;

        let days = generate_calendar(year, month, self.config.policy().rest_day)?;
        let matrix = build_matrix(self.roster, &days, source)?;
        let summaries = summarize_matrix(&matrix);

        debug!(
            year,
            month,
            days = days.len(),
            employees = summaries.len(),
            "Built month matrix"
        );

        Ok(MonthReport {
            year,
            month,
            matrix,
            summaries,
        })
    }

    /// Builds the report document for a request.
    ///
    /// A month request yields one section; a year request yields twelve,
    /// January to December.
    pub fn build_document<S: StatusSource + ?Sized>(
        &self,
        request: &ReportRequest,
        source: &mut S,
    ) -> ReportResult<ReportDocument> {
        request.validate()?;
        self.check_roster()?;

        let months = request
            .months()
            .into_iter()
            .map(|month| self.build_month(request.year, month, &mut *source))
            .collect::<ReportResult<Vec<_>>>()?;

        render_range(
            &self.config.organization().name,
            request.year,
            &months,
            self.roster,
        )
    }

    /// Runs the whole pipeline and returns the downloadable artifact.
    pub fn run<S: StatusSource + ?Sized>(
        &self,
        request: &ReportRequest,
        source: &mut S,
    ) -> ReportResult<ExportArtifact> {
        let started = Instant::now();
        let filename = report_filename(request)?;
        let document = self.build_document(request, source)?;
        let artifact = export_document(&document, &filename)?;

        info!(
            year = request.year,
            month = request.month,
            scope = %request.scope,
            employees = self.roster.len(),
            filename = %artifact.filename,
            bytes = artifact.bytes.len(),
            duration_us = started.elapsed().as_micros() as u64,
            "Attendance report generated"
        );

        Ok(artifact)
    }

    /// Builds the live view of one month.
    pub fn month_view<S: StatusSource + ?Sized>(
        &self,
        year: i32,
        month: u32,
        source: &mut S,
    ) -> ReportResult<MonthView> {
        let report = self.build_month(year, month, source)?;
        let policy = self.config.policy().attendance_rate.work_stoppage;

        let mut employees = Vec::with_capacity(report.summaries.len());
        for (row, summary) in report.matrix.rows().iter().zip(&report.summaries) {
            let employee = self
                .roster
                .get(row.employee_id)
                .ok_or_else(|| ReportError::SerializationError {
                    message: format!("employee {} is not on the roster", row.employee_id),
                })?;
            employees.push(EmployeeMonthView {
                employee_id: employee.id,
                employee_code: employee.employee_code.clone(),
                display_name: employee.display_name.clone(),
                statuses: row.statuses.clone(),
                summary: *summary,
                attendance_rate: attendance_rate(summary, policy),
            });
        }

        Ok(MonthView {
            year,
            month,
            month_name: month_name(month).unwrap_or_default().to_string(),
            days: report.matrix.days().to_vec(),
            employees,
        })
    }
}
