//! Participant balance calculation.
//!
//! For every expense the payer is credited the full amount and each distinct
//! participant is debited an equal share. A payer who is not listed as a
//! participant therefore ends up with the full amount as credit.
//!
//! Shares are rounded to [`SHARE_SCALE`] decimal places before they are
//! accumulated. Every term then has bounded scale, so the running sums are
//! exact and the result does not depend on the order of the expenses.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::types::Expense;

/// Balances with an absolute value at or below this are settled (0.01).
pub const SETTLEMENT_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Decimal places kept for each participant share.
pub const SHARE_SCALE: u32 = 10;

/// Net position of one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Net creditor.
    ShouldReceive,
    /// Net debtor.
    ShouldPay,
    /// Within the settlement threshold of zero.
    Settled,
}

impl BalanceStatus {
    /// Classifies a balance against a settlement threshold.
    #[must_use]
    pub fn classify(balance: Decimal, threshold: Decimal) -> Self {
        if balance > threshold {
            Self::ShouldReceive
        } else if balance < -threshold {
            Self::ShouldPay
        } else {
            Self::Settled
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShouldReceive => "Should receive",
            Self::ShouldPay => "Should pay",
            Self::Settled => "Settled",
        }
    }
}

/// Settled participant balances: name to signed amount.
///
/// Positive means the participant should receive money, negative means they
/// should pay. Settled participants are not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Balances(BTreeMap<String, Decimal>);

impl Balances {
    /// Drops every balance at or below [`SETTLEMENT_THRESHOLD`].
    #[must_use]
    pub fn settle(raw: BTreeMap<String, Decimal>) -> Self {
        Self::settle_with_threshold(raw, SETTLEMENT_THRESHOLD)
    }

    /// Drops every balance whose absolute value is at or below `threshold`.
    #[must_use]
    pub fn settle_with_threshold(raw: BTreeMap<String, Decimal>, threshold: Decimal) -> Self {
        Self(
            raw.into_iter()
                .filter(|(_, balance)| balance.abs() > threshold)
                .collect(),
        )
    }

    /// Returns the balance for `name`, if not settled.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.0.get(name).copied()
    }

    /// Classifies `name`. Absent names are settled.
    #[must_use]
    pub fn status(&self, name: &str) -> BalanceStatus {
        self.get(name).map_or(BalanceStatus::Settled, |balance| {
            BalanceStatus::classify(balance, Decimal::ZERO)
        })
    }

    /// Number of unsettled participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if everyone is settled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over balances in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(name, balance)| (name.as_str(), *balance))
    }

    /// Returns balances for display: creditors first, largest amount first.
    ///
    /// Ties are broken by name so the order is stable.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, Decimal)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Decimal> {
        self.0
    }
}

/// Computes every participant's net balance before the settlement filter.
///
/// The values sum to zero up to share rounding.
#[must_use]
pub fn raw_balances<'a, I>(expenses: I) -> BTreeMap<String, Decimal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut balances: BTreeMap<String, Decimal> = BTreeMap::new();

    for expense in expenses {
        let participants = expense.effective_participants();
        let share = (expense.amount / Decimal::from(participants.len()))
            .round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::MidpointNearestEven);

        *balances.entry(expense.paid_by.clone()).or_default() += expense.amount;

        for participant in participants {
            *balances.entry(participant.to_string()).or_default() -= share;
        }
    }

    balances
}

/// Computes settled balances for a set of expenses.
///
/// Input is assumed valid (positive amounts, non-empty payers); an empty
/// set yields empty balances.
#[must_use]
pub fn compute_balances<'a, I>(expenses: I) -> Balances
where
    I: IntoIterator<Item = &'a Expense>,
{
    Balances::settle(raw_balances(expenses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::{ExpenseCategory, NewExpense};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn expense(amount: Decimal, paid_by: &str, participants: &[&str]) -> Expense {
        Expense::record(
            NewExpense {
                description: "test".to_string(),
                amount,
                category: ExpenseCategory::Other,
                paid_by: paid_by.to_string(),
                participants: participants.iter().map(ToString::to_string).collect(),
                group_id: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_ledger() {
        let expenses: Vec<Expense> = Vec::new();
        assert!(compute_balances(&expenses).is_empty());
        assert!(raw_balances(&expenses).is_empty());
    }

    #[test]
    fn test_single_expense_three_way_split() {
        let expenses = [expense(dec!(90), "Alice", &["Alice", "Bob", "Carol"])];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.len(), 3);
        assert_eq!(balances.get("Alice"), Some(dec!(60.00)));
        assert_eq!(balances.get("Bob"), Some(dec!(-30.00)));
        assert_eq!(balances.get("Carol"), Some(dec!(-30.00)));
    }

    #[test]
    fn test_two_expenses_net_out() {
        let expenses = [
            expense(dec!(100), "A", &["A", "B"]),
            expense(dec!(40), "B", &["A", "B"]),
        ];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.get("A"), Some(dec!(30.00)));
        assert_eq!(balances.get("B"), Some(dec!(-30.00)));
    }

    #[test]
    fn test_self_pay_with_no_participants() {
        let expenses = [expense(dec!(55), "Alice", &[])];
        let raw = raw_balances(&expenses);

        assert_eq!(raw.len(), 1);
        assert_eq!(raw["Alice"], Decimal::ZERO);
        assert!(compute_balances(&expenses).is_empty());
    }

    #[test]
    fn test_self_pay_with_only_payer_listed() {
        let expenses = [expense(dec!(55), "Alice", &["Alice"])];
        assert!(compute_balances(&expenses).is_empty());
    }

    #[test]
    fn test_payer_not_listed_keeps_full_credit() {
        let expenses = [expense(dec!(50), "Alice", &["Bob", "Carol"])];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.get("Alice"), Some(dec!(50)));
        assert_eq!(balances.get("Bob"), Some(dec!(-25)));
        assert_eq!(balances.get("Carol"), Some(dec!(-25)));
    }

    #[test]
    fn test_duplicate_participants_counted_once() {
        let expenses = [expense(dec!(60), "Alice", &["Alice", "Bob", "Bob"])];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.get("Alice"), Some(dec!(30)));
        assert_eq!(balances.get("Bob"), Some(dec!(-30)));
    }

    #[test]
    fn test_threshold_drops_half_cent_balances() {
        // 0.01 split two ways leaves +0.005 / -0.005
        let expenses = [expense(dec!(0.01), "A", &["A", "B"])];
        assert!(compute_balances(&expenses).is_empty());

        // 0.04 split two ways leaves +0.02 / -0.02
        let expenses = [expense(dec!(0.04), "A", &["A", "B"])];
        let balances = compute_balances(&expenses);
        assert_eq!(balances.get("A"), Some(dec!(0.02)));
        assert_eq!(balances.get("B"), Some(dec!(-0.02)));
    }

    #[test]
    fn test_settle_boundary_is_inclusive() {
        let raw = BTreeMap::from([
            ("exact".to_string(), dec!(0.01)),
            ("below".to_string(), dec!(-0.005)),
            ("above".to_string(), dec!(0.02)),
        ]);
        let balances = Balances::settle(raw);

        assert_eq!(balances.get("exact"), None);
        assert_eq!(balances.get("below"), None);
        assert_eq!(balances.get("above"), Some(dec!(0.02)));
    }

    #[test]
    fn test_settle_with_custom_threshold() {
        let raw = BTreeMap::from([("A".to_string(), dec!(0.04)), ("B".to_string(), dec!(-0.5))]);
        let balances = Balances::settle_with_threshold(raw, dec!(0.05));
        assert_eq!(balances.len(), 1);
        assert_eq!(balances.get("B"), Some(dec!(-0.5)));
    }

    #[test]
    fn test_thirds_sum_to_zero() {
        let expenses = [expense(dec!(100), "A", &["A", "B", "C"])];
        let total: Decimal = raw_balances(&expenses).values().copied().sum();
        assert!(total.abs() < dec!(0.000001));
    }

    #[test]
    fn test_status_classification() {
        let expenses = [expense(dec!(90), "Alice", &["Alice", "Bob", "Carol"])];
        let balances = compute_balances(&expenses);

        assert_eq!(balances.status("Alice"), BalanceStatus::ShouldReceive);
        assert_eq!(balances.status("Bob"), BalanceStatus::ShouldPay);
        assert_eq!(balances.status("Zed"), BalanceStatus::Settled);
        assert_eq!(BalanceStatus::ShouldPay.label(), "Should pay");
    }

    #[test]
    fn test_classify_uses_threshold() {
        assert_eq!(
            BalanceStatus::classify(dec!(0.01), SETTLEMENT_THRESHOLD),
            BalanceStatus::Settled
        );
        assert_eq!(
            BalanceStatus::classify(dec!(-0.011), SETTLEMENT_THRESHOLD),
            BalanceStatus::ShouldPay
        );
    }

    #[test]
    fn test_ranked_puts_creditors_first() {
        let expenses = [
            expense(dec!(90), "Alice", &["Alice", "Bob", "Carol"]),
            expense(dec!(30), "Bob", &["Bob", "Dave"]),
        ];
        let balances = compute_balances(&expenses);
        let ranked = balances.ranked();
        let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();

        // Alice +60, Bob -15, Dave -15, Carol -30
        assert_eq!(names, vec!["Alice", "Bob", "Dave", "Carol"]);
    }

    #[test]
    fn test_settlement_threshold_constant() {
        assert_eq!(SETTLEMENT_THRESHOLD, dec!(0.01));
    }
}
