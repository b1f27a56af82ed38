use rust_decimal::Decimal;
use std::fmt;

/// One pairwise transfer: `from` (a debtor) hands `amount` to `to` (a
/// creditor). The amount is always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payment<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Decimal,
}

impl fmt::Display for Payment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} to {}", self.from, self.amount, self.to)
    }
}

/// Participants split by the sign of their balance against the fair share.
/// Both sides carry positive magnitudes: a creditor's entry is how much it is
/// owed, a debtor's entry is how much it owes. Settled participants appear on
/// neither side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances<'a> {
    pub creditors: Vec<(&'a str, Decimal)>,
    pub debtors: Vec<(&'a str, Decimal)>,
}
