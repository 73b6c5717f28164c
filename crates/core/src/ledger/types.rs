//! Expense ledger domain types.
//!
//! An [`Expense`] is a validated record: positive amount, non-empty payer.
//! Raw form input goes through [`super::validation::ExpenseDraft`] first.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use travelmate_shared::types::{ExpenseId, GroupId};

use super::balance::Balances;
use super::error::LedgerError;

/// Expense category, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Flights, trains, cabs, fuel.
    Transport,
    /// Hotels and other accommodation.
    Stay,
    /// Food and dining.
    Food,
    /// Tours, tickets, events.
    Activities,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Transport,
        Self::Stay,
        Self::Food,
        Self::Activities,
        Self::Other,
    ];

    /// Returns the stable lowercase key used in stored documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Stay => "stay",
            Self::Food => "food",
            Self::Activities => "activities",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Stay => "Accommodation",
            Self::Food => "Food & Dining",
            Self::Activities => "Activities",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| LedgerError::UnknownCategory(s.to_string()))
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Immutable identifier.
    pub id: ExpenseId,
    /// Free-text label.
    pub description: String,
    /// Amount paid, always positive.
    pub amount: Decimal,
    /// Spending category.
    pub category: ExpenseCategory,
    /// Participant who fronted the money.
    pub paid_by: String,
    /// Names sharing the cost. Empty means the payer carries it alone.
    #[serde(default, alias = "groupMembers")]
    pub participants: Vec<String>,
    /// Creation timestamp, set once.
    pub created_at: DateTime<Utc>,
    /// Travel group the expense was logged under, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl Expense {
    /// Records a validated expense with a fresh ID.
    #[must_use]
    pub fn record(input: NewExpense, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ExpenseId::new(),
            description: input.description,
            amount: input.amount,
            category: input.category,
            paid_by: input.paid_by,
            participants: input.participants,
            created_at,
            group_id: input.group_id,
        }
    }

    /// Returns the distinct names the amount is split between.
    ///
    /// Never empty: with no listed participants the payer is the only one.
    /// The payer is not added when other participants are listed.
    #[must_use]
    pub fn effective_participants(&self) -> BTreeSet<&str> {
        if self.participants.is_empty() {
            return BTreeSet::from([self.paid_by.as_str()]);
        }
        self.participants.iter().map(String::as_str).collect()
    }

    /// Returns true if the payer or any participant is in `members`.
    #[must_use]
    pub fn involves(&self, members: &BTreeSet<String>) -> bool {
        members.contains(&self.paid_by) || self.participants.iter().any(|p| members.contains(p))
    }
}

/// Validated input for a new expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Free-text label.
    pub description: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Spending category.
    pub category: ExpenseCategory,
    /// Non-empty payer name.
    pub paid_by: String,
    /// Participant names, trimmed, blanks removed.
    pub participants: Vec<String>,
    /// Optional travel group.
    pub group_id: Option<GroupId>,
}

/// Ledger figures scoped to one travel group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// The group.
    pub group_id: GroupId,
    /// Group name.
    pub name: String,
    /// Number of members.
    pub member_count: usize,
    /// Number of expenses involving any member.
    pub expense_count: usize,
    /// Total amount of those expenses.
    pub total_spend: Decimal,
    /// Settled balances over those expenses.
    pub balances: Balances,
}
