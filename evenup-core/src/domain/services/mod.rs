pub mod expense_aggregator;

pub use expense_aggregator::ExpenseAggregator;
