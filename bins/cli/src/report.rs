//! Plain-text ledger reports.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use travelmate_core::ledger::{Balances, BalanceStatus, ExpenseCategory, GroupSummary};
use travelmate_core::store::ImportSummary;

/// Amounts are shown with two decimals.
const DISPLAY_SCALE: u32 = 2;

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(DISPLAY_SCALE))
}

/// Renders balances, creditors first.
#[must_use]
pub fn balances(title: &str, balances: &Balances) -> String {
    let mut out = format!("{title}\n");
    if balances.is_empty() {
        out.push_str("  Everyone is settled up.\n");
        return out;
    }

    let width = balances.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, amount) in balances.ranked() {
        let status = BalanceStatus::classify(amount, Decimal::ZERO);
        out.push_str(&format!(
            "  {name:<width$}  {:<14}  {:>10}\n",
            status.label(),
            money(amount.abs())
        ));
    }
    out
}

/// Renders total spend, the category breakdown, and per-group ledgers.
#[must_use]
pub fn summary(
    total: Decimal,
    breakdown: &BTreeMap<ExpenseCategory, Decimal>,
    groups: &[GroupSummary],
) -> String {
    let mut out = format!("Total spend: {}\n", money(total));

    if !breakdown.is_empty() {
        out.push_str("\nBy category:\n");
        for (category, amount) in breakdown {
            out.push_str(&format!("  {:<16}  {:>10}\n", category.label(), money(*amount)));
        }
    }

    for group in groups {
        out.push_str(&format!(
            "\nGroup {} ({} members, {} expenses, {} spent)\n",
            group.name,
            group.member_count,
            group.expense_count,
            money(group.total_spend)
        ));
        if group.balances.is_empty() {
            out.push_str("  Everyone is settled up.\n");
        }
        for (name, amount) in group.balances.ranked() {
            let sign = if amount.is_sign_negative() { "-" } else { "+" };
            out.push_str(&format!("  {name}: {sign}{}\n", money(amount.abs())));
        }
    }
    out
}

/// Renders the result of an import.
#[must_use]
pub fn import(summary: &ImportSummary) -> String {
    if summary.is_empty() {
        return "Nothing to import.\n".to_string();
    }

    let mut out = String::from("Imported:\n");
    for (collection, count) in &summary.replaced {
        out.push_str(&format!("  {collection}: {count} records\n"));
    }
    out
}
