pub mod tally;

pub use tally::{extract, TallyError};

pub mod pipeline {
    use vouchex_core::ReportTable;

    use crate::tally::{self, TallyError};

    /// Full inbound pipeline: raw upload bytes in, column-oriented report out.
    /// Each call owns its input and output; nothing is shared across calls.
    pub fn process(data: &[u8]) -> Result<ReportTable, TallyError> {
        let records = tally::extract(data)?;
        Ok(ReportTable::from_records(&records))
    }

}
