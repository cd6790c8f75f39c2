use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback written into every column whose source tag is absent or empty.
/// Downstream spreadsheets filter on the literal string, so it is never
/// replaced with an empty cell.
pub const NA: &str = "NA";

/// The only voucher type the report covers.
pub const RECEIPT: &str = "Receipt";

/// Report schema, in column order. `ReportTable` and the exporter both
/// iterate this, so the order here is the order in the workbook.
pub const COLUMNS: [&str; 12] = [
    "Date",
    "Transaction Type",
    "Vch No",
    "Ref No",
    "Ref Type",
    "Ref Date",
    "Debtor",
    "Ref Amount",
    "Amount",
    "Particulars",
    "Vch Type",
    "Amount Verified",
];

/// Structural origin of a voucher within the export tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Parent,
    Child,
    Other,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Parent => "Parent",
            TransactionType::Child => "Child",
            TransactionType::Other => "Other",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One receipt voucher, flattened for the report.
///
/// `date` is the only field that may be absent; everything else holds either
/// the extracted text or [`NA`]. `debtor` and `particulars` are read from the
/// same source tag and are always equal, as are `reference_amount` and
/// `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: Option<String>,
    pub transaction_type: TransactionType,
    pub voucher_number: String,
    pub reference: String,
    pub reference_type: String,
    pub reference_date: String,
    pub debtor: String,
    pub reference_amount: String,
    pub amount: String,
    pub particulars: String,
    pub amount_verified: String,
}

impl TransactionRecord {
    /// Cell values in [`COLUMNS`] order. A missing date renders as an empty
    /// cell; the voucher type column is always the [`RECEIPT`] literal.
    pub fn to_row(&self) -> [String; 12] {
        [
            self.date.clone().unwrap_or_default(),
            self.transaction_type.to_string(),
            self.voucher_number.clone(),
            self.reference.clone(),
            self.reference_type.clone(),
            self.reference_date.clone(),
            self.debtor.clone(),
            self.reference_amount.clone(),
            self.amount.clone(),
            self.particulars.clone(),
            RECEIPT.to_string(),
            self.amount_verified.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            date: Some("20240401".to_string()),
            transaction_type: TransactionType::Other,
            voucher_number: "101".to_string(),
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
    fn transaction_type_display() {
        assert_eq!(TransactionType::Parent.to_string(), "Parent");
        assert_eq!(TransactionType::Child.to_string(), "Child");
        assert_eq!(TransactionType::Other.to_string(), "Other");
    }

    #[test]
    fn row_follows_column_order() {
        let row = sample_record().to_row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "20240401");
        assert_eq!(row[1], "Other");
        assert_eq!(row[2], "101");
        assert_eq!(row[10], RECEIPT);
        assert_eq!(row[11], "Yes");
    }

    #[test]
    fn missing_date_renders_empty_cell() {
        let record = TransactionRecord {
            date: None,
            ..sample_record()
        };
        assert_eq!(record.to_row()[0], "");
    }

    #[test]
    fn debtor_and_particulars_share_positions() {
        let row = sample_record().to_row();
        let debtor_idx = COLUMNS.iter().position(|c| *c == "Debtor").unwrap();
        let particulars_idx = COLUMNS.iter().position(|c| *c == "Particulars").unwrap();
        assert_eq!(row[debtor_idx], row[particulars_idx]);
    }
}
