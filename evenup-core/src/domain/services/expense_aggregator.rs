use crate::domain::model::{AggregationError, ExpenseSheet, LedgerSummary};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Expense aggregation service
pub struct ExpenseAggregator;

impl ExpenseAggregator {
    /// Reduce an expense sheet to per-participant net totals and the fair
    /// per-person share.
    ///
    /// The sheet is read-only; the summary borrows the participant names.
    /// A sheet with no participants is rejected before the share division.
    pub fn aggregate<'a>(
        &self,
        sheet: &'a ExpenseSheet,
    ) -> Result<LedgerSummary<'a>, AggregationError> {
        let participants = sheet.participants();
        if participants.is_empty() {
            return Err(AggregationError::NoParticipants);
        }

        let mut column_totals = vec![0i64; participants.len()];
        for row in sheet.rows() {
            for (total, amount) in column_totals.iter_mut().zip(row) {
                *total += amount;
            }
        }

        let totals: BTreeMap<&str, i64> = participants
            .iter()
            .map(String::as_str)
            .zip(column_totals.iter().copied())
            .collect();
        let group_total: i64 = column_totals.iter().sum();
        let fair_share = Decimal::from(group_total) / Decimal::from(participants.len() as i64);

        Ok(LedgerSummary {
            totals,
            group_total,
            fair_share,
        })
    }
}
