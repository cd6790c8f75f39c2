use serde::Serialize;

use crate::record::{TransactionRecord, COLUMNS};

/// One named column of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportColumn {
    pub name: &'static str,
    pub values: Vec<String>,
}

/// Column-oriented report with the fixed schema from [`COLUMNS`].
///
/// Rows keep the order the records were extracted in; no sorting happens
/// here or anywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    columns: Vec<ReportColumn>,
}

impl ReportTable {
    /// Reshapes records into columns. An empty slice yields a headers-only
    /// table, which is a valid export.
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut columns: Vec<ReportColumn> = COLUMNS
            .iter()
            .map(|name| ReportColumn {
                name,
                values: Vec::with_capacity(records.len()),
            })
            .collect();

        for record in records {
            for (column, value) in columns.iter_mut().zip(record.to_row()) {
                column.values.push(value);
            }
        }

        ReportTable { columns }
    }

    pub fn columns(&self) -> &[ReportColumn] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
