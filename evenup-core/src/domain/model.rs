use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

/// Parsed expense table: one column per participant, one row per expense
/// event. Every row holds exactly one amount per participant (whole currency
/// units; blank fields were coerced to zero during parsing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseSheet {
    participants: Vec<String>,
    rows: Vec<Vec<i64>>,
}

impl ExpenseSheet {
    pub fn new(participants: Vec<String>, rows: Vec<Vec<i64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == participants.len()));
        Self { participants, rows }
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Aggregated view of an expense sheet.
///
/// `totals` is keyed by participant name in a `BTreeMap`, so iteration order
/// is stable and downstream tie-breaks are deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary<'a> {
    pub totals: BTreeMap<&'a str, i64>,
    pub group_total: i64,
    pub fair_share: Decimal,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("ledger has no participants")]
    NoParticipants,
}
