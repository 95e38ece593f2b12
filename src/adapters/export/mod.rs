//! Export adapters for session data.

mod json_exporter;
mod xlsx_exporter;

pub use json_exporter::{ExportDocument, JsonExporter};
pub use xlsx_exporter::{SheetLayout, SheetRow, XlsxExporter};
