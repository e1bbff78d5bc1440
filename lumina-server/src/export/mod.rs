//! Export payloads
//!
//! CSV serialization and the structured report document handed to the PDF
//! renderer. File generation mechanics live with the consumers; this module
//! only shapes content.

mod csv;
mod document;

pub use document::{DocumentCard, ReportDocument, build_report_document};
pub use self::csv::{ExportError, dashboard_csv, sales_report_csv};
