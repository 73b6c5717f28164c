//! Input validation for new expenses.
//!
//! The expense form hands over strings. All parsing and trimming happens
//! here so the balance engine only ever sees typed, valid records.

use std::str::FromStr;

use rust_decimal::Decimal;
use travelmate_shared::types::GroupId;

use super::error::LedgerError;
use super::types::{ExpenseCategory, NewExpense};

/// Largest accepted expense amount.
///
/// Keeps ledger sums far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Raw expense form input.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    /// Description text.
    pub description: String,
    /// Amount text, e.g. `"42.50"`.
    pub amount: String,
    /// Category key, e.g. `"food"`.
    pub category: String,
    /// Comma-separated participant names.
    pub participants: String,
    /// Payer name.
    pub paid_by: String,
    /// Optional travel group.
    pub group_id: Option<GroupId>,
}

impl ExpenseDraft {
    /// Validates the draft and converts it to a [`NewExpense`].
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft breaks: missing description or payer,
    /// an amount that is not a positive decimal, or an unknown category.
    pub fn validate(&self) -> Result<NewExpense, LedgerError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LedgerError::MissingDescription);
        }

        let paid_by = self.paid_by.trim();
        if paid_by.is_empty() {
            return Err(LedgerError::MissingPayer);
        }

        let amount = parse_amount(&self.amount)?;
        let category = ExpenseCategory::from_str(&self.category)?;

        Ok(NewExpense {
            description: description.to_string(),
            amount,
            category,
            paid_by: paid_by.to_string(),
            participants: split_participants(&self.participants),
            group_id: self.group_id,
        })
    }
}

/// Parses a positive decimal amount.
///
/// # Errors
///
/// Returns `InvalidAmount` for non-numeric text, or the [`check_amount`]
/// error for out-of-range values.
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    let amount = Decimal::from_str(text.trim())
        .map_err(|_| LedgerError::InvalidAmount(text.to_string()))?;
    check_amount(amount)
}

/// Checks that an amount is positive and at most [`MAX_AMOUNT`].
///
/// # Errors
///
/// Returns `ZeroAmount`, `NegativeAmount`, or `AmountTooLarge`.
pub fn check_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_zero() {
        return Err(LedgerError::ZeroAmount);
    }
    if amount.is_sign_negative() {
        return Err(LedgerError::NegativeAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::AmountTooLarge);
    }
    Ok(amount)
}

/// Splits a comma-separated name list, trimming and dropping blanks.
#[must_use]
pub fn split_participants(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            description: "  Museum tickets ".to_string(),
            amount: "45.00".to_string(),
            category: "activities".to_string(),
            participants: "Alice, Bob,, Carol ,".to_string(),
            paid_by: " Alice ".to_string(),
            group_id: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        let input = draft().validate().unwrap();
        assert_eq!(input.description, "Museum tickets");
        assert_eq!(input.amount, dec!(45));
        assert_eq!(input.category, ExpenseCategory::Activities);
        assert_eq!(input.paid_by, "Alice");
        assert_eq!(input.participants, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_blank_participants_become_empty_list() {
        let mut d = draft();
        d.participants = " , ,".to_string();
        assert!(d.validate().unwrap().participants.is_empty());
    }

    #[test]
    fn test_missing_description() {
        let mut d = draft();
        d.description = "   ".to_string();
        assert_eq!(d.validate(), Err(LedgerError::MissingDescription));
    }

    #[test]
    fn test_missing_payer() {
        let mut d = draft();
        d.paid_by = String::new();
        assert_eq!(d.validate(), Err(LedgerError::MissingPayer));
    }

    #[test]
    fn test_unknown_category() {
        let mut d = draft();
        d.category = "gifts".to_string();
        assert_eq!(
            d.validate(),
            Err(LedgerError::UnknownCategory("gifts".to_string()))
        );
    }

    #[rstest]
    #[case("0", LedgerError::ZeroAmount)]
    #[case("0.00", LedgerError::ZeroAmount)]
    #[case("-5", LedgerError::NegativeAmount)]
    #[case("abc", LedgerError::InvalidAmount("abc".to_string()))]
    #[case("", LedgerError::InvalidAmount(String::new()))]
    #[case("1000000000.01", LedgerError::AmountTooLarge)]
    #[case("79228162514264337593543950335", LedgerError::AmountTooLarge)]
    fn test_invalid_amounts(#[case] text: &str, #[case] expected: LedgerError) {
        assert_eq!(parse_amount(text), Err(expected));
    }

    #[rstest]
    #[case("12", dec!(12))]
    #[case(" 12.5 ", dec!(12.5))]
    #[case("0.01", dec!(0.01))]
    #[case("1000000000", MAX_AMOUNT)]
    fn test_valid_amounts(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(text), Ok(expected));
    }
}
