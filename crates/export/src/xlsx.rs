use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use vouchex_core::ReportTable;

/// Download name the transport suggests to the browser.
pub const REPORT_FILE_NAME: &str = "Receipt_Vouchers.xlsx";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write workbook: {0}")]
    Workbook(#[from] XlsxError),
}

/// Encodes the report as a single-sheet workbook, entirely in memory.
/// Row 0 holds the bold column headers; data rows follow in table order.
pub fn write_workbook(table: &ReportTable) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (index, column) in table.columns().iter().enumerate() {
        let col = index as u16;
        worksheet.write_string_with_format(0, col, column.name, &header)?;
        for (row, value) in column.values.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouchex_core::{TransactionRecord, TransactionType, NA};

    fn receipt(number: &str) -> TransactionRecord {
        TransactionRecord {
            date: Some("20240401".to_string()),
            transaction_type: TransactionType::Other,
            voucher_number: number.to_string(),
            reference: NA.to_string(),
            reference_type: NA.to_string(),
            reference_date: NA.to_string(),
            debtor: "Acme Corp".to_string(),
            reference_amount: "500.00".to_string(),
            amount: "500.00".to_string(),
            particulars: "Acme Corp".to_string(),
            amount_verified: "Yes".to_string(),
        }
    }

    #[test]
    fn workbook_bytes_are_a_zip_container() {
        let table = ReportTable::from_records(&[receipt("101")]);
        let bytes = write_workbook(&table).unwrap();
        // XLSX is a ZIP archive; the local-file magic is PK\x03\x04.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn headers_only_table_still_encodes() {
        let table = ReportTable::from_records(&[]);
        let bytes = write_workbook(&table).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn download_name_keeps_spreadsheet_extension() {
        assert!(REPORT_FILE_NAME.ends_with(".xlsx"));
    }
}
