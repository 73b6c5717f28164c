//! Ledger aggregation: group scoping, totals, category breakdown.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::balance::{Balances, raw_balances};
use super::types::{Expense, ExpenseCategory, GroupSummary};
use crate::group::TravelGroup;

/// Ledger service for read-only queries over an expense snapshot.
///
/// Every function is pure; callers pass the collection they want queried.
pub struct LedgerService;

impl LedgerService {
    /// Keeps the expenses whose payer or any participant is in `members`.
    ///
    /// Input order is preserved.
    #[must_use]
    pub fn filter_by_group<'a, I>(expenses: I, members: &BTreeSet<String>) -> Vec<&'a Expense>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        expenses
            .into_iter()
            .filter(|expense| expense.involves(members))
            .collect()
    }

    /// Sums all expense amounts.
    #[must_use]
    pub fn total_spend<'a, I>(expenses: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        expenses.into_iter().map(|expense| expense.amount).sum()
    }

    /// Sums spend per category. Categories with no expenses are absent.
    #[must_use]
    pub fn category_breakdown<'a, I>(expenses: I) -> BTreeMap<ExpenseCategory, Decimal>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut breakdown = BTreeMap::new();
        for expense in expenses {
            *breakdown.entry(expense.category).or_insert(Decimal::ZERO) += expense.amount;
        }
        breakdown
    }

    /// Counts expenses per category. Categories with no expenses are absent.
    #[must_use]
    pub fn category_counts<'a, I>(expenses: I) -> BTreeMap<ExpenseCategory, usize>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut counts = BTreeMap::new();
        for expense in expenses {
            *counts.entry(expense.category).or_insert(0) += 1;
        }
        counts
    }

    /// Builds the ledger summary for one travel group.
    ///
    /// Balances at or below `threshold` are treated as settled.
    #[must_use]
    pub fn group_summary<'a, I>(expenses: I, group: &TravelGroup, threshold: Decimal) -> GroupSummary
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let scoped = Self::filter_by_group(expenses, &group.members);

        GroupSummary {
            group_id: group.id,
            name: group.name.clone(),
            member_count: group.members.len(),
            expense_count: scoped.len(),
            total_spend: Self::total_spend(scoped.iter().copied()),
            balances: Balances::settle_with_threshold(raw_balances(scoped.iter().copied()), threshold),
        }
    }
}
