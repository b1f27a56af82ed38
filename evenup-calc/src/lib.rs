#![warn(clippy::uninlined_format_args)]

mod model;

use rust_decimal::Decimal;

pub use model::{Balances, Payment};

/// Partition participants into creditors and debtors against the fair share.
///
/// A participant's balance is `net total - fair_share`; exact-zero balances
/// land on neither side. Input order is preserved within each side.
pub fn classify<'a>(
    totals: impl IntoIterator<Item = (&'a str, i64)>,
    fair_share: Decimal,
) -> Balances<'a> {
    let mut balances = Balances::default();

    for (name, total) in totals {
        let balance = Decimal::from(total) - fair_share;
        if balance > Decimal::ZERO {
            balances.creditors.push((name, balance));
        } else if balance < Decimal::ZERO {
            balances.debtors.push((name, -balance));
        }
    }

    balances
}

/// Match the largest creditor against the largest debtor until one side
/// drains, emitting one payment per (partial) match.
///
/// Each round transfers `min` of the two head magnitudes, so every payment is
/// strictly positive and a partially matched head is reused on the next
/// round. With balanced magnitudes both sides drain together; if rounding in
/// the fair share left the sides unequal, the loop still terminates once the
/// shorter side empties and the residual is dropped.
pub fn plan_transfers(balances: Balances<'_>) -> Vec<Payment<'_>> {
    let Balances {
        mut creditors,
        mut debtors,
    } = balances;

    // Stable sort: equal magnitudes keep the classifier's iteration order.
    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut payments = Vec::with_capacity(creditors.len() + debtors.len());
    let mut creditor_idx = 0;
    let mut debtor_idx = 0;

    while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
        let amount = creditors[creditor_idx].1.min(debtors[debtor_idx].1);
        debug_assert!(amount > Decimal::ZERO);

        payments.push(Payment {
            from: debtors[debtor_idx].0,
            to: creditors[creditor_idx].0,
            amount,
        });

        creditors[creditor_idx].1 -= amount;
        debtors[debtor_idx].1 -= amount;

        if creditors[creditor_idx].1.is_zero() {
            creditor_idx += 1;
        }
        if debtors[debtor_idx].1.is_zero() {
            debtor_idx += 1;
        }
    }

    payments
}

/// Plan the transfers that settle a ledger of per-participant net totals.
pub fn settle<'a>(
    totals: impl IntoIterator<Item = (&'a str, i64)>,
    fair_share: Decimal,
) -> Vec<Payment<'a>> {
    plan_transfers(classify(totals, fair_share))
}

#[cfg(test)]
mod tests {
    use super::{classify, settle, Payment};
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn assert_settled(totals: &[(&str, i64)], fair_share: Decimal, payments: &[Payment<'_>]) {
        let mut balances: HashMap<&str, Decimal> = totals
            .iter()
            .map(|&(name, total)| (name, Decimal::from(total) - fair_share))
            .collect();
        for payment in payments {
            *balances.get_mut(payment.from).expect("unknown debtor") += payment.amount;
            *balances.get_mut(payment.to).expect("unknown creditor") -= payment.amount;
        }
        for (name, balance) in balances {
            assert_eq!(balance, Decimal::ZERO, "residual balance for {name}");
        }
    }

    #[rstest]
    #[case::reference_ledger(
        vec![("Alice", 127), ("Bob", 209), ("Charlie", 303)],
        213,
        vec![("Alice", "Charlie", 86), ("Bob", "Charlie", 4)]
    )]
    #[case::already_settled(
        vec![("Alice", 100), ("Bob", 100)],
        100,
        vec![]
    )]
    #[case::single_creditor_two_debtors(
        vec![("Ava", 250), ("Ben", 50), ("Cleo", 0)],
        100,
        vec![("Cleo", "Ava", 100), ("Ben", "Ava", 50)]
    )]
    #[case::equal_magnitudes_tie_break_by_input_order(
        vec![("Ana", 30), ("Bea", 30), ("Cal", 12)],
        24,
        vec![("Cal", "Ana", 6), ("Cal", "Bea", 6)]
    )]
    #[case::partial_debtor_spans_creditors(
        vec![("Ana", 30), ("Bea", 25), ("Cal", 5)],
        20,
        vec![("Cal", "Ana", 10), ("Cal", "Bea", 5)]
    )]
    #[case::empty_ledger(vec![], 0, vec![])]
    fn settle_cases(
        #[case] totals: Vec<(&'static str, i64)>,
        #[case] fair_share: i64,
        #[case] expected: Vec<(&'static str, &'static str, i64)>,
    ) {
        let fair_share = Decimal::from(fair_share);
        let payments = settle(totals.iter().copied(), fair_share);

        let expected: Vec<Payment<'_>> = expected
            .into_iter()
            .map(|(from, to, amount)| Payment {
                from,
                to,
                amount: Decimal::from(amount),
            })
            .collect();
        assert_eq!(payments, expected);
        assert_settled(&totals, fair_share, &payments);
    }

    #[rstest]
    #[case::mixed_signs(
        vec![("Alice", 127), ("Bob", 209), ("Charlie", 303)],
        213,
        vec![("Charlie", 90)],
        vec![("Alice", 86), ("Bob", 4)]
    )]
    #[case::zero_balances_excluded(
        vec![("Alice", 100), ("Bob", 100)],
        100,
        vec![],
        vec![]
    )]
    #[case::empty_input(vec![], 0, vec![], vec![])]
    fn classify_cases(
        #[case] totals: Vec<(&'static str, i64)>,
        #[case] fair_share: i64,
        #[case] expected_creditors: Vec<(&'static str, i64)>,
        #[case] expected_debtors: Vec<(&'static str, i64)>,
    ) {
        let balances = classify(totals.iter().copied(), Decimal::from(fair_share));

        let creditors: Vec<(&str, Decimal)> = expected_creditors
            .into_iter()
            .map(|(name, magnitude)| (name, Decimal::from(magnitude)))
            .collect();
        let debtors: Vec<(&str, Decimal)> = expected_debtors
            .into_iter()
            .map(|(name, magnitude)| (name, Decimal::from(magnitude)))
            .collect();
        assert_eq!(balances.creditors, creditors);
        assert_eq!(balances.debtors, debtors);
    }

    #[test]
    fn payment_displays_as_instruction() {
        let payment = Payment {
            from: "Alice",
            to: "Charlie",
            amount: Decimal::from(86),
        };
        assert_eq!(payment.to_string(), "Alice pays 86 to Charlie");
    }

    #[test]
    fn rounding_residue_terminates_and_stays_negligible() {
        let totals = [("Ava", 100), ("Ben", 0), ("Cleo", 0)];
        let fair_share = Decimal::from(100) / Decimal::from(3);

        let payments = settle(totals.iter().copied(), fair_share);

        assert_eq!(payments.len(), 2);
        assert!(payments
            .iter()
            .all(|payment| payment.amount > Decimal::ZERO && payment.to == "Ava"));

        let owed = Decimal::from(100) - fair_share;
        let received: Decimal = payments.iter().map(|payment| payment.amount).sum();
        let residue = owed - received;
        assert!(residue >= Decimal::ZERO);
        assert!(residue < Decimal::new(1, 20));
    }

    proptest! {
        #[test]
        fn greedy_settles_zero_sum_balances(
            people_count in 2usize..=6,
            balances in prop::collection::vec(-200i64..=200, 1..=5),
        ) {
            let names = ["A", "B", "C", "D", "E", "F"];
            let mut totals = Vec::with_capacity(people_count);
            let mut sum = 0i64;
            for idx in 0..people_count - 1 {
                let balance = *balances.get(idx).unwrap_or(&0);
                sum += balance;
                totals.push((names[idx], balance));
            }
            totals.push((names[people_count - 1], -sum));

            let payments = settle(totals.iter().copied(), Decimal::ZERO);

            for payment in &payments {
                prop_assert!(payment.amount > Decimal::ZERO);
                prop_assert_ne!(payment.from, payment.to);
            }

            let creditors = totals.iter().filter(|&&(_, total)| total > 0).count();
            let debtors = totals.iter().filter(|&&(_, total)| total < 0).count();
            if creditors == 0 || debtors == 0 {
                prop_assert!(payments.is_empty());
            } else {
                prop_assert!(payments.len() <= creditors + debtors - 1);
            }

            let paid: Decimal = payments.iter().map(|payment| payment.amount).sum();
            let owed: i64 = totals.iter().map(|&(_, total)| total.max(0)).sum();
            prop_assert_eq!(paid, Decimal::from(owed));

            let mut residual: HashMap<&str, Decimal> = totals
                .iter()
                .map(|&(name, total)| (name, Decimal::from(total)))
                .collect();
            for payment in &payments {
                *residual.get_mut(payment.from).unwrap() += payment.amount;
                *residual.get_mut(payment.to).unwrap() -= payment.amount;
            }
            for (name, balance) in residual {
                prop_assert_eq!(balance, Decimal::ZERO, "residual balance for {}", name);
            }
        }

        #[test]
        fn settled_groups_produce_no_payments(
            people_count in 1usize..=6,
            total in 0i64..=500,
        ) {
            let names = ["A", "B", "C", "D", "E", "F"];
            let totals: Vec<(&str, i64)> = names[..people_count]
                .iter()
                .map(|&name| (name, total))
                .collect();

            let payments = settle(totals.iter().copied(), Decimal::from(total));
            prop_assert!(payments.is_empty());
        }
    }
}
