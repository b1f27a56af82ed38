use crate::{
    application::{error::SheetError, ports::SheetParser},
    domain::model::ExpenseSheet,
};
use fxhash::FxHashSet;

/// CSV-backed expense sheet parser.
///
/// The header row names the participants; every following record is one
/// expense event with one amount per column. Blank fields and missing
/// trailing fields are zero. Records wider than the header are rejected.
#[derive(Default)]
pub struct CsvSheetParser;

impl SheetParser for CsvSheetParser {
    fn parse(&self, content: &str) -> Result<ExpenseSheet, SheetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let participants: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for name in &participants {
            if !seen.insert(name.as_str()) {
                return Err(SheetError::DuplicateParticipant { name: name.clone() });
            }
        }

        let expected = participants.len();
        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // The header occupies row 1.
            let row_number = idx + 2;
            if record.len() > expected {
                return Err(SheetError::RowTooLong {
                    row: row_number,
                    len: record.len(),
                    expected,
                });
            }

            let mut row = Vec::with_capacity(expected);
            for (col, field) in record.iter().enumerate() {
                let field = field.trim();
                if field.is_empty() {
                    row.push(0);
                } else {
                    let amount = field.parse::<i64>().map_err(|_| SheetError::InvalidAmount {
                        row: row_number,
                        participant: participants[col].clone(),
                        value: field.to_string(),
                    })?;
                    row.push(amount);
                }
            }
            row.resize(expected, 0);
            rows.push(row);
        }

        Ok(ExpenseSheet::new(participants, rows))
    }
}
