//! XLSX writer for report documents.
//!
//! Renders a [`ReportDocument`] into an Office Open XML workbook with a
//! single worksheet. Title rows are merged across the full column width and
//! each [`CellStyle`] maps to one colour-coded format.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::error::{ReportError, ReportResult};

use super::document::{COLUMN_COUNT, CellStyle, CellValue, ReportDocument};
#[cfg(test)]
use super::document::{FIRST_DAY_COLUMN, FIRST_TOTAL_COLUMN};

/// Name of the worksheet holding the report.
pub const SHEET_NAME: &str = "Attendance";

struct ReportFormats {
    title: Format,
    section_title: Format,
    header: Format,
    rest_day_header: Format,
    employee: Format,
    present: Format,
    absent: Format,
    half_day: Format,
    work_stoppage: Format,
    rest_day: Format,
    blank: Format,
    total: Format,
}

impl ReportFormats {
    fn new() -> Self {
        let cell = || {
            Format::new()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
        };
        let status = |rgb: u32| cell().set_background_color(Color::RGB(rgb));

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center),
            section_title: Format::new()
                .set_bold()
                .set_font_size(13)
                .set_align(FormatAlign::Left)
                .set_background_color(Color::RGB(0xD9E1F2)),
            header: cell()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x4472C4)),
            rest_day_header: cell()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(0x7F7F7F)),
            employee: Format::new()
                .set_align(FormatAlign::Left)
                .set_border(FormatBorder::Thin),
            present: status(0xC6EFCE),
            absent: status(0xFFC7CE),
            half_day: status(0xFFEB9C),
            work_stoppage: status(0xD9C3E9),
            rest_day: status(0xD9D9D9).set_font_color(Color::RGB(0x595959)),
            blank: Format::new().set_border(FormatBorder::Thin),
            total: cell().set_bold().set_background_color(Color::RGB(0xFFF2CC)),
        }
    }

    fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Title => &self.title,
            CellStyle::SectionTitle => &self.section_title,
            CellStyle::Header => &self.header,
            CellStyle::RestDayHeader => &self.rest_day_header,
            CellStyle::Employee => &self.employee,
            CellStyle::Present => &self.present,
            CellStyle::Absent => &self.absent,
            CellStyle::HalfDay => &self.half_day,
            CellStyle::WorkStoppage => &self.work_stoppage,
            CellStyle::RestDay => &self.rest_day,
            CellStyle::Blank => &self.blank,
            CellStyle::Total => &self.total,
        }
    }
}

fn xlsx_error(error: XlsxError) -> ReportError {
    ReportError::SerializationError {
        message: format!("Failed to create Excel: {error}"),
    }
}

/// Writes a report document into XLSX bytes.
///
/// The workbook lives only for the duration of the call; the returned buffer
/// is the only thing that survives it.
pub fn write_workbook(document: &ReportDocument) -> ReportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let formats = ReportFormats::new();
    let last_column = (COLUMN_COUNT - 1) as u16;

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    for (col, width) in document.column_widths().iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(xlsx_error)?;
    }

    for (index, row) in document.rows().into_iter().enumerate() {
        let row_num = index as u32;

        if row.spans_all_columns() {
            if let Some(cell) = row.cells.first() {
                worksheet
                    .merge_range(
                        row_num,
                        0,
                        row_num,
                        last_column,
                        cell.as_text().unwrap_or_default(),
                        formats.get(cell.style),
                    )
                    .map_err(xlsx_error)?;
            }
            continue;
        }

        for (col, cell) in row.cells.iter().enumerate() {
            let col = col as u16;
            let format = formats.get(cell.style);
            let written = match &cell.value {
                CellValue::Empty => worksheet.write_blank(row_num, col, format),
                CellValue::Text(text) => {
                    worksheet.write_string_with_format(row_num, col, text, format)
                }
                CellValue::Number(value) => {
                    worksheet.write_number_with_format(row_num, col, *value, format)
                }
            };
            written.map_err(xlsx_error)?;
        }
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}
