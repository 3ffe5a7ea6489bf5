//! Downloadable report artifacts.

use crate::engine::month_name;
use crate::error::{ReportError, ReportResult};
use crate::models::{ReportRequest, ReportScope};
use crate::report::{ReportDocument, write_workbook};

/// MIME type spreadsheet applications recognize for `.xlsx` workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File extension of exported workbooks.
pub const XLSX_EXTENSION: &str = "xlsx";

/// A serialized report ready to be handed to a download boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// File name including extension.
    pub filename: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The workbook contents.
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Returns a `Content-Disposition` value that makes browsers download the artifact.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Returns the file name for a report request.
///
/// Single months are named `Attendance_Report_<MONTHNAME>_<YEAR>.xlsx`, full
/// years `Attendance_Report_ANNUAL_<YEAR>.xlsx`.
///
/// # Example
///
/// ```
/// use attendance_engine::export::report_filename;
/// use attendance_engine::models::ReportRequest;
///
/// assert_eq!(
///     report_filename(&ReportRequest::month(2024, 1)).unwrap(),
///     "Attendance_Report_FEBRUARY_2024.xlsx"
/// );
/// assert_eq!(
///     report_filename(&ReportRequest::year(2024)).unwrap(),
///     "Attendance_Report_ANNUAL_2024.xlsx"
/// );
/// ```
pub fn report_filename(request: &ReportRequest) -> ReportResult<String> {
    request.validate()?;

    let period = match request.scope {
        ReportScope::Month => month_name(request.month)
            .map(str::to_uppercase)
            .ok_or_else(|| ReportError::InvalidPeriod {
                year: request.year,
                month: request.month,
                message: "month index must be between 0 and 11".to_string(),
            })?,
        ReportScope::Year => "ANNUAL".to_string(),
    };

    Ok(format!(
        "Attendance_Report_{}_{}.{}",
        period, request.year, XLSX_EXTENSION
    ))
}

/// Rejects names that are empty or could resolve outside a target directory.
pub(crate) fn check_plain_filename(filename: &str) -> ReportResult<()> {
    if filename.trim().is_empty()
        || filename.contains(|c: char| c == '/' || c == '\\')
        || filename.contains("..")
    {
        return Err(ReportError::ExportError {
            filename: filename.to_string(),
            message: "file name must be a plain, non-empty name".to_string(),
        });
    }
    Ok(())
}

/// Serializes a document into a named spreadsheet artifact.
///
/// The `.xlsx` extension is appended when `filename` does not already carry
/// it. Names that are empty or contain path separators are rejected.
pub fn export_document(document: &ReportDocument, filename: &str) -> ReportResult<ExportArtifact> {
    check_plain_filename(filename)?;

    let filename = if filename.ends_with(&format!(".{}", XLSX_EXTENSION)) {
        filename.to_string()
    } else {
        format!("{}.{}", filename, XLSX_EXTENSION)
    };

    let bytes = write_workbook(document)?;

    Ok(ExportArtifact {
        filename,
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })
}
