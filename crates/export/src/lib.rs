pub mod xlsx;

pub use xlsx::{write_workbook, ExportError, REPORT_FILE_NAME, XLSX_CONTENT_TYPE};
