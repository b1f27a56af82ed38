#![warn(clippy::uninlined_format_args)]

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ProcessingError, SettlementProcessor, SettlementReport, SheetError, SheetParser,
};
pub use domain::model::{AggregationError, ExpenseSheet, LedgerSummary};
pub use infrastructure::CsvSheetParser;
