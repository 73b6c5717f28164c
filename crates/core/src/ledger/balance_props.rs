//! Property-based tests for balance calculation and group scoping.

use std::collections::BTreeSet;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::balance::{Balances, SETTLEMENT_THRESHOLD, compute_balances, raw_balances};
use super::service::LedgerService;
use super::types::{Expense, ExpenseCategory, NewExpense};

const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"];

/// Strategy for a participant name from a small pool, so names collide.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(ToString::to_string)
}

/// Strategy for a positive amount from 0.01 to 10,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn category_strategy() -> impl Strategy<Value = ExpenseCategory> {
    prop::sample::select(ExpenseCategory::ALL.to_vec())
}

/// Strategy for a valid expense; participant lists may be empty or repeat names.
fn expense_strategy() -> impl Strategy<Value = Expense> {
    (
        amount_strategy(),
        category_strategy(),
        name_strategy(),
        prop::collection::vec(name_strategy(), 0..6),
    )
        .prop_map(|(amount, category, paid_by, participants)| {
            Expense::record(
                NewExpense {
                    description: "generated".to_string(),
                    amount,
                    category,
                    paid_by,
                    participants,
                    group_id: None,
                },
                Utc::now(),
            )
        })
}

fn expenses_strategy(max_len: usize) -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(expense_strategy(), 0..=max_len)
}

fn members_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(name_strategy(), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every amount credited to a payer is offset by participant debits.
    #[test]
    fn prop_raw_balances_sum_to_zero(expenses in expenses_strategy(30)) {
        let total: Decimal = raw_balances(&expenses).values().copied().sum();
        prop_assert!(
            total.abs() < dec!(0.000001),
            "raw balances should sum to zero, got {}",
            total
        );
    }

    /// A payer-only expense has no net effect and touches nobody else.
    #[test]
    fn prop_self_pay_is_noop(
        amount in amount_strategy(),
        payer in name_strategy(),
        list_payer in any::<bool>(),
    ) {
        let participants = if list_payer { vec![payer.clone()] } else { vec![] };
        let expense = Expense::record(
            NewExpense {
                description: "solo".to_string(),
                amount,
                category: ExpenseCategory::Other,
                paid_by: payer.clone(),
                participants,
                group_id: None,
            },
            Utc::now(),
        );
        let raw = raw_balances([&expense]);

        prop_assert_eq!(raw.len(), 1);
        prop_assert_eq!(raw[&payer], Decimal::ZERO);
        prop_assert!(compute_balances([&expense]).is_empty());
    }

    /// Balances do not depend on expense order.
    #[test]
    fn prop_order_independent(
        (expenses, shuffled) in expenses_strategy(20)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let mut reversed = expenses.clone();
        reversed.reverse();

        let expected = compute_balances(&expenses);
        prop_assert_eq!(&compute_balances(&shuffled), &expected);
        prop_assert_eq!(&compute_balances(&reversed), &expected);
    }

    /// Splitting a ledger in two and concatenating gives the same balances.
    #[test]
    fn prop_raw_balances_are_additive(
        left in expenses_strategy(10),
        right in expenses_strategy(10),
    ) {
        let combined = raw_balances(left.iter().chain(right.iter()));

        let mut merged = raw_balances(&left);
        for (name, balance) in raw_balances(&right) {
            *merged.entry(name).or_default() += balance;
        }

        prop_assert_eq!(combined, merged);
    }

    /// Reported balances are all strictly outside the settlement threshold.
    #[test]
    fn prop_settled_entries_are_dropped(expenses in expenses_strategy(20)) {
        let raw = raw_balances(&expenses);
        let balances = Balances::settle(raw.clone());

        for (name, balance) in balances.iter() {
            prop_assert!(balance.abs() > SETTLEMENT_THRESHOLD);
            prop_assert_eq!(raw[name], balance);
        }
        for (name, balance) in &raw {
            if balance.abs() > SETTLEMENT_THRESHOLD {
                prop_assert_eq!(balances.get(name), Some(*balance));
            }
        }
    }

    /// Filtering twice by the same members equals filtering once.
    #[test]
    fn prop_filter_by_group_idempotent(
        expenses in expenses_strategy(20),
        members in members_strategy(),
    ) {
        let once = LedgerService::filter_by_group(&expenses, &members);
        let twice = LedgerService::filter_by_group(once.iter().copied(), &members);
        prop_assert_eq!(once, twice);
    }

    /// Every kept expense involves a member; every dropped one does not.
    #[test]
    fn prop_filter_by_group_is_exact(
        expenses in expenses_strategy(20),
        members in members_strategy(),
    ) {
        let kept: BTreeSet<_> = LedgerService::filter_by_group(&expenses, &members)
            .into_iter()
            .map(|e| e.id)
            .collect();

        for expense in &expenses {
            prop_assert_eq!(kept.contains(&expense.id), expense.involves(&members));
        }
    }

    /// The category breakdown partitions total spend.
    #[test]
    fn prop_breakdown_sums_to_total(expenses in expenses_strategy(30)) {
        let breakdown = LedgerService::category_breakdown(&expenses);
        let sum: Decimal = breakdown.values().copied().sum();

        prop_assert_eq!(sum, LedgerService::total_spend(&expenses));
        prop_assert!(breakdown.values().all(|v| *v > Decimal::ZERO));
    }
}
