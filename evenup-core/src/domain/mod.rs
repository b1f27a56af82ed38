pub mod model;
pub mod services;

pub use model::{AggregationError, ExpenseSheet, LedgerSummary};
pub use services::ExpenseAggregator;
