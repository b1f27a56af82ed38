use crate::{
    application::{error::ProcessingError, ports::SheetParser},
    domain::services::ExpenseAggregator,
};
use rust_decimal::Decimal;
use std::fmt::Write as _;

#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    parser: &'a dyn SheetParser,
}

/// Everything the caller needs to display a settlement run: per-participant
/// totals in name order, the group figures, and the transfer instructions in
/// match order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub totals: Vec<(String, i64)>,
    pub group_total: i64,
    pub fair_share: Decimal,
    pub instructions: Vec<String>,
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(parser: &'a dyn SheetParser) -> Self {
        Self { parser }
    }

    /// Run the full pipeline on raw CSV text: parse, aggregate, plan the
    /// transfers, and capture the result as an owned report.
    pub fn process(&self, content: &str) -> Result<SettlementReport, ProcessingError> {
        let sheet = self.parser.parse(content)?;
        let summary = ExpenseAggregator.aggregate(&sheet)?;

        tracing::info!(
            participants = summary.totals.len(),
            group_total = summary.group_total,
            "aggregated expense sheet"
        );

        let payments = evenup_calc::settle(
            summary.totals.iter().map(|(&name, &total)| (name, total)),
            summary.fair_share,
        );
        tracing::debug!(transfers = payments.len(), "settlement planned");

        Ok(SettlementReport {
            totals: summary
                .totals
                .iter()
                .map(|(&name, &total)| (name.to_string(), total))
                .collect(),
            group_total: summary.group_total,
            fair_share: summary.fair_share,
            instructions: payments
                .iter()
                .map(|payment| payment.to_string())
                .collect(),
        })
    }
}

impl SettlementReport {
    /// Render the report as plain text for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(512);

        let _ = writeln!(&mut out, "{:<15} | {:>10}", "Member", "Paid");
        let _ = writeln!(&mut out, "{:-<15}-+-{:-<10}", "", "");
        for (name, total) in &self.totals {
            let _ = writeln!(&mut out, "{name:<15} | {total:>10}");
        }
        out.push('\n');

        let _ = writeln!(&mut out, "Group total: {}", self.group_total);
        let _ = writeln!(&mut out, "Fair share: {}", self.fair_share);
        out.push('\n');

        if self.instructions.is_empty() {
            out.push_str("Everyone is settled up.\n");
        } else {
            out.push_str("Instructions:\n");
            for instruction in &self.instructions {
                let _ = writeln!(&mut out, "{instruction}");
            }
        }

        out
    }
}
