//! Ledger error types.
//!
//! These are boundary errors: raised while turning raw input into an
//! [`super::Expense`]. Balance computation itself has no failure modes.

use thiserror::Error;
use travelmate_shared::AppError;

use super::validation::MAX_AMOUNT;

/// Errors raised while validating expense input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Description is empty.
    #[error("Expense description is required")]
    MissingDescription,

    /// Payer name is empty.
    #[error("Expense payer is required")]
    MissingPayer,

    /// Amount text is not a decimal number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount is zero.
    #[error("Expense amount cannot be zero")]
    ZeroAmount,

    /// Amount is negative.
    #[error("Expense amount cannot be negative")]
    NegativeAmount,

    /// Amount is above [`MAX_AMOUNT`].
    #[error("Expense amount cannot exceed {}", MAX_AMOUNT)]
    AmountTooLarge,

    /// Category is not one of the known categories.
    #[error("Unknown expense category: {0:?}")]
    UnknownCategory(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDescription => "MISSING_DESCRIPTION",
            Self::MissingPayer => "MISSING_PAYER",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
