//! Store and workspace error types.

use std::path::PathBuf;

use thiserror::Error;
use travelmate_shared::AppError;

use crate::group::GroupError;
use crate::itinerary::ItineraryError;
use crate::ledger::LedgerError;
use crate::travel::TravelError;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("storage I/O failed at {}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A stored collection is not valid JSON.
    #[error("stored data for {key} is corrupt: {reason}")]
    Corrupt {
        /// Storage key.
        key: &'static str,
        /// Parser message.
        reason: String,
    },

    /// An import document could not be parsed.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// State could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "STORAGE_IO",
            Self::Corrupt { .. } => "STORAGE_CORRUPT",
            Self::MalformedSnapshot(_) => "MALFORMED_SNAPSHOT",
            Self::Serialization(_) => "SERIALIZATION_FAILED",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedSnapshot(_) => Self::Validation(err.to_string()),
            StoreError::Serialization(_) => Self::Internal(err.to_string()),
            StoreError::Io { .. } | StoreError::Corrupt { .. } => Self::Storage(err.to_string()),
        }
    }
}

/// Errors from workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Expense input rejected.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Group operation failed.
    #[error(transparent)]
    Group(#[from] GroupError),

    /// Trip operation failed.
    #[error(transparent)]
    Itinerary(#[from] ItineraryError),

    /// Booking, alert, favorite, or offline operation failed.
    #[error(transparent)]
    Travel(#[from] TravelError),

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No expense with that ID.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(travelmate_shared::types::ExpenseId),
}

impl WorkspaceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(err) => err.error_code(),
            Self::Group(err) => err.error_code(),
            Self::Itinerary(err) => err.error_code(),
            Self::Travel(err) => err.error_code(),
            Self::Store(err) => err.error_code(),
            Self::ExpenseNotFound(_) => "EXPENSE_NOT_FOUND",
        }
    }
}

impl From<WorkspaceError> for AppError {
    fn from(err: WorkspaceError) -> Self {
        match err {
            WorkspaceError::Ledger(err) => err.into(),
            WorkspaceError::Group(err) => err.into(),
            WorkspaceError::Itinerary(err) => err.into(),
            WorkspaceError::Travel(err) => err.into(),
            WorkspaceError::Store(err) => err.into(),
            WorkspaceError::ExpenseNotFound(id) => Self::NotFound(format!("Expense not found: {id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err: AppError = StoreError::MalformedSnapshot("expected value".into()).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = StoreError::Serialization("boom".into()).into();
        assert!(matches!(err, AppError::Internal(_)));

        let err: AppError = StoreError::Corrupt {
            key: "travelmate_trips",
            reason: "trailing characters".into(),
        }
        .into();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_workspace_error_delegates_codes() {
        let err = WorkspaceError::from(LedgerError::ZeroAmount);
        assert_eq!(err.error_code(), LedgerError::ZeroAmount.error_code());

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 400);
    }

    #[test]
    fn test_io_error_display() {
        let err = StoreError::io(
            "/tmp/data",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/data"));
        assert_eq!(err.error_code(), "STORAGE_IO");
    }
}
