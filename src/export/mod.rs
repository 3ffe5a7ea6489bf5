//! Export of serialized reports.
//!
//! This module names report artifacts, packages a [`ReportDocument`] as a
//! spreadsheet download, and hands finished artifacts to a sink.
//!
//! [`ReportDocument`]: crate::report::ReportDocument

mod artifact;
mod sink;

pub use artifact::{
    ExportArtifact, XLSX_CONTENT_TYPE, XLSX_EXTENSION, export_document, report_filename,
};
pub use sink::{ArtifactSink, DirectorySink};
