//! Report serialization.
//!
//! Attendance data is first rendered into a format-neutral
//! [`ReportDocument`] with fixed column geometry, then written out as an
//! XLSX workbook by [`write_workbook`].

mod document;
mod render;
mod xlsx;

pub use document::{
    COLUMN_COUNT, Cell, CellStyle, CellValue, DAY_COLUMNS, FIRST_DAY_COLUMN, FIRST_TOTAL_COLUMN,
    MonthSection, ReportDocument, Row, RowKind,
};
pub use render::{MonthReport, render_month, render_range, status_style};
pub use xlsx::{SHEET_NAME, write_workbook};
