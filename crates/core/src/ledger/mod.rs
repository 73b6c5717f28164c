//! Expense ledger and balance settlement.
//!
//! This module implements the group cost-splitting logic:
//! - Expense records and categories
//! - Input validation at the form boundary
//! - Participant balance calculation and settlement
//! - Group scoping, totals and per-category breakdown

pub mod balance;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod balance_props;

pub use balance::{
    Balances, BalanceStatus, SETTLEMENT_THRESHOLD, SHARE_SCALE, compute_balances, raw_balances,
};
pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{Expense, ExpenseCategory, GroupSummary, NewExpense};
pub use validation::{ExpenseDraft, MAX_AMOUNT, check_amount, parse_amount, split_participants};
