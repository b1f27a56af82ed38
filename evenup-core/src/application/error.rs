use crate::domain::model::AggregationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate participant '{name}' in header")]
    DuplicateParticipant { name: String },
    #[error("row {row}: invalid amount '{value}' for {participant}")]
    InvalidAmount {
        row: usize,
        participant: String,
        value: String,
    },
    #[error("row {row} has {len} fields but the header declares {expected} participants")]
    RowTooLong {
        row: usize,
        len: usize,
        expected: usize,
    },
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}
