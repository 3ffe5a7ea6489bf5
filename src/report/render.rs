//! Rendering of attendance data into report sections.
//!
//! Each month becomes a section with a title row, a day-number header, a
//! weekday header and one row per employee. Day columns beyond the month
//! length stay in the grid as blank cells, so the totals columns sit in the
//! same position in every section of an annual report.

use tracing::debug;

use crate::engine::{AttendanceMatrix, month_name};
use crate::error::{ReportError, ReportResult};
use crate::models::{AttendanceStatus, EmployeeMonthSummary, Roster};

use super::document::{
    COLUMN_COUNT, Cell, CellStyle, DAY_COLUMNS, MonthSection, ReportDocument, Row, RowKind,
};

/// Everything needed to render one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthReport {
    /// The calendar year.
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    /// The calendar-aligned status matrix.
    pub matrix: AttendanceMatrix,
    /// One summary per matrix row, in the same order.
    pub summaries: Vec<EmployeeMonthSummary>,
}

/// Returns the cell style for a status.
pub fn status_style(status: AttendanceStatus) -> CellStyle {
    match status {
        AttendanceStatus::Present => CellStyle::Present,
        AttendanceStatus::Absent => CellStyle::Absent,
        AttendanceStatus::HalfDay => CellStyle::HalfDay,
        AttendanceStatus::WorkStoppage => CellStyle::WorkStoppage,
        AttendanceStatus::RestDay => CellStyle::RestDay,
    }
}

/// Renders one month into a report section.
///
/// # Arguments
///
/// * `report` - The month's matrix and summaries
/// * `roster` - Supplies employee codes and names for each matrix row
///
/// # Errors
///
/// Returns [`ReportError::SerializationError`] if the calendar is longer than
/// the reserved day columns, the summaries do not line up with the matrix
/// rows, or a row has no roster entry.
pub fn render_month(report: &MonthReport, roster: &Roster) -> ReportResult<MonthSection> {
    let name = month_name(report.month).ok_or_else(|| ReportError::InvalidPeriod {
        year: report.year,
        month: report.month,
        message: "month index must be between 0 and 11".to_string(),
    })?;
    let days = report.matrix.days();
    let rows = report.matrix.rows();

    if days.len() > DAY_COLUMNS {
        return Err(ReportError::SerializationError {
            message: format!(
                "calendar has {} days but only {} day columns are reserved",
                days.len(),
                DAY_COLUMNS
            ),
        });
    }
    if report.summaries.len() != rows.len() {
        return Err(ReportError::SerializationError {
            message: format!(
                "{} summaries supplied for {} matrix rows",
                report.summaries.len(),
                rows.len()
            ),
        });
    }

    let mut section_rows = Vec::with_capacity(rows.len() + 3);
    section_rows.push(Row::spanning(
        RowKind::SectionTitle,
        format!("{} {}", name.to_uppercase(), report.year),
        CellStyle::SectionTitle,
    ));

    let mut header = Vec::with_capacity(COLUMN_COUNT);
    header.push(Cell::text("Employee ID", CellStyle::Header));
    header.push(Cell::text("Employee Name", CellStyle::Header));
    let mut weekdays = Vec::with_capacity(COLUMN_COUNT);
    weekdays.push(Cell::empty(CellStyle::Header));
    weekdays.push(Cell::empty(CellStyle::Header));
    for slot in 0..DAY_COLUMNS {
        match days.get(slot) {
            Some(day) => {
                let style = if day.is_rest_day {
                    CellStyle::RestDayHeader
                } else {
                    CellStyle::Header
                };
                header.push(Cell::text(day.ordinal.to_string(), style));
                weekdays.push(Cell::text(day.weekday_short_name.clone(), style));
            }
            None => {
                header.push(Cell::text((slot + 1).to_string(), CellStyle::Blank));
                weekdays.push(Cell::empty(CellStyle::Blank));
            }
        }
    }
    for label in ["PRESENT", "ABSENT", "HALF"] {
        header.push(Cell::text(label, CellStyle::Header));
        weekdays.push(Cell::empty(CellStyle::Header));
    }
    section_rows.push(Row {
        kind: RowKind::Header,
        cells: header,
    });
    section_rows.push(Row {
        kind: RowKind::WeekdayHeader,
        cells: weekdays,
    });

    for (row, summary) in rows.iter().zip(&report.summaries) {
        if row.employee_id != summary.employee_id {
            return Err(ReportError::SerializationError {
                message: format!(
                    "summary for employee {} found where employee {} was expected",
                    summary.employee_id, row.employee_id
                ),
            });
        }
        let employee = roster
            .get(row.employee_id)
            .ok_or_else(|| ReportError::SerializationError {
                message: format!("employee {} is not on the roster", row.employee_id),
            })?;

        let mut cells = Vec::with_capacity(COLUMN_COUNT);
        cells.push(Cell::text(employee.employee_code.clone(), CellStyle::Employee));
        cells.push(Cell::text(employee.display_name.clone(), CellStyle::Employee));
        for slot in 0..DAY_COLUMNS {
            match row.statuses.get(slot) {
                Some(status) => cells.push(Cell::text(status.short_code(), status_style(*status))),
                None => cells.push(Cell::empty(CellStyle::Blank)),
            }
        }
        cells.push(Cell::number(summary.present_count, CellStyle::Total));
        cells.push(Cell::number(summary.absent_count, CellStyle::Total));
        cells.push(Cell::number(summary.half_day_count, CellStyle::Total));

        section_rows.push(Row {
            kind: RowKind::Employee,
            cells,
        });
    }

    Ok(MonthSection {
        year: report.year,
        month: report.month,
        rows: section_rows,
    })
}

/// Renders a sequence of months into one document under a shared title.
///
/// Months are rendered in the order given, each through [`render_month`].
///
/// # Arguments
///
/// * `organization` - Name shown in the title row
/// * `year` - The report year shown in the title row
/// * `months` - The months to include, in output order
/// * `roster` - Supplies employee codes and names
pub fn render_range(
    organization: &str,
    year: i32,
    months: &[MonthReport],
    roster: &Roster,
) -> ReportResult<ReportDocument> {
    let title = Row::spanning(
        RowKind::Title,
        format!("{} - ATTENDANCE REPORT {}", organization, year),
        CellStyle::Title,
    );

    let sections = months
        .iter()
        .map(|report| render_month(report, roster))
        .collect::<ReportResult<Vec<_>>>()?;

    debug!(
        year,
        sections = sections.len(),
        employees = roster.len(),
        "Rendered report document"
    );

    Ok(ReportDocument::new(title, sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    use crate::engine::{RecordedStatusSource, build_matrix, generate_calendar, summarize_matrix};
    use crate::models::Employee;
    use crate::report::CellValue;

    fn roster() -> Roster {
        Roster::new(vec![
            Employee {
                id: 1,
                display_name: "Priya Raman".to_string(),
                employee_code: "EMP-0001".to_string(),
            },
            Employee {
                id: 2,
                display_name: "Jonas Berg".to_string(),
                employee_code: "EMP-0002".to_string(),
            },
        ])
        .unwrap()
    }

    fn month_report(year: i32, month: u32, source: &mut RecordedStatusSource) -> MonthReport {
        let days = generate_calendar(year, month, Weekday::Sun).unwrap();
        let matrix = build_matrix(&roster(), &days, source).unwrap();
        let summaries = summarize_matrix(&matrix);
        MonthReport {
            year,
            month,
            matrix,
            summaries,
        }
    }

    #[test]
    fn test_section_layout() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let section = render_month(&month_report(2024, 1, &mut source), &roster()).unwrap();

        let kinds: Vec<RowKind> = section.rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::SectionTitle,
                RowKind::Header,
                RowKind::WeekdayHeader,
                RowKind::Employee,
                RowKind::Employee,
            ]
        );
        assert_eq!(section.rows[0].cells[0].as_text(), Some("FEBRUARY 2024"));
    }

    #[test]
    fn test_header_row_geometry() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let section = render_month(&month_report(2024, 1, &mut source), &roster()).unwrap();
        let header = section.header().unwrap();

        assert_eq!(header.cells.len(), COLUMN_COUNT);
        assert_eq!(header.cells[0].as_text(), Some("Employee ID"));
        assert_eq!(header.cells[1].as_text(), Some("Employee Name"));
        assert_eq!(header.day_cells().len(), DAY_COLUMNS);
        assert_eq!(header.day_cells()[0].as_text(), Some("1"));
        assert_eq!(header.day_cells()[28].as_text(), Some("29"));
        assert_eq!(header.day_cells()[29].as_text(), Some("30"));
        assert_eq!(header.day_cells()[30].style, CellStyle::Blank);
        assert_eq!(header.day_cells()[3].style, CellStyle::RestDayHeader);
        let totals: Vec<Option<&str>> = header.total_cells().iter().map(|c| c.as_text()).collect();
        assert_eq!(totals, vec![Some("PRESENT"), Some("ABSENT"), Some("HALF")]);
    }

    #[test]
    fn test_employee_row_cells() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let feb_5 = chrono::NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let feb_6 = chrono::NaiveDate::from_ymd_opt(2024, 2, 6).unwrap();
        let feb_7 = chrono::NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
        source.record(1, feb_5, AttendanceStatus::Absent);
        source.record(1, feb_6, AttendanceStatus::HalfDay);
        source.record(1, feb_7, AttendanceStatus::WorkStoppage);

        let section = render_month(&month_report(2024, 1, &mut source), &roster()).unwrap();
        let row = section.employee_rows().next().unwrap();

        assert_eq!(row.cells.len(), COLUMN_COUNT);
        assert_eq!(row.cells[0].as_text(), Some("EMP-0001"));
        assert_eq!(row.cells[1].as_text(), Some("Priya Raman"));

        let days = row.day_cells();
        assert_eq!(days[0].as_text(), Some("P"));
        assert_eq!(days[3].as_text(), Some("OFF"));
        assert_eq!(days[3].style, CellStyle::RestDay);
        assert_eq!(days[4].style, CellStyle::Absent);
        assert_eq!(days[5].style, CellStyle::HalfDay);
        assert_eq!(days[6].as_text(), Some("WS"));
        assert_eq!(days[6].style, CellStyle::WorkStoppage);
        assert_eq!(days[29].value, CellValue::Empty);
        assert_eq!(days[30].style, CellStyle::Blank);

        let totals: Vec<&CellValue> = row.total_cells().iter().map(|c| &c.value).collect();
        assert_eq!(
            totals,
            vec![
                &CellValue::Number(22),
                &CellValue::Number(2),
                &CellValue::Number(1),
            ]
        );
    }

    #[test]
    fn test_thirty_one_day_month_fills_every_column() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let section = render_month(&month_report(2024, 0, &mut source), &roster()).unwrap();

        for row in section.employee_rows() {
            assert!(row.day_cells().iter().all(|c| c.value != CellValue::Empty));
        }
    }

    #[test]
    fn test_mismatched_summaries_are_rejected() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let mut report = month_report(2024, 1, &mut source);
        report.summaries.pop();

        let result = render_month(&report, &roster());
        assert!(matches!(result, Err(ReportError::SerializationError { .. })));
    }

    #[test]
    fn test_calendar_longer_than_day_columns_is_rejected() {
        let mut days = generate_calendar(2024, 0, Weekday::Sun).unwrap();
        days.extend(generate_calendar(2024, 1, Weekday::Sun).unwrap().into_iter().take(1));
        let report = MonthReport {
            year: 2024,
            month: 0,
            matrix: AttendanceMatrix::new(days, Vec::new()).unwrap(),
            summaries: Vec::new(),
        };

        match render_month(&report, &roster()) {
            Err(ReportError::SerializationError { message }) => {
                assert!(message.contains("32 days"), "unexpected message: {}", message);
            }
            other => panic!("Expected SerializationError, got {:?}", other),
        }
    }

    #[test]
    fn test_swapped_summaries_are_rejected() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let mut report = month_report(2024, 1, &mut source);
        report.summaries.reverse();

        let result = render_month(&report, &roster());
        assert!(matches!(result, Err(ReportError::SerializationError { .. })));
    }

    #[test]
    fn test_render_range_title_and_order() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::Present);
        let months: Vec<MonthReport> = (0..3).map(|m| month_report(2025, m, &mut source)).collect();

        let document = render_range("ACME", 2025, &months, &roster()).unwrap();

        assert_eq!(
            document.title().cells[0].as_text(),
            Some("ACME - ATTENDANCE REPORT 2025")
        );
        let order: Vec<u32> = document.sections().iter().map(|s| s.month).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut source = RecordedStatusSource::new(AttendanceStatus::HalfDay);
        let months = vec![month_report(2024, 1, &mut source)];

        let first = render_range("ACME", 2024, &months, &roster()).unwrap();
        let second = render_range("ACME", 2024, &months, &roster()).unwrap();
        assert_eq!(first, second);
    }
}
