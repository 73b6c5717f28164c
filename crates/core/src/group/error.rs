//! Travel group error types.

use thiserror::Error;
use travelmate_shared::AppError;
use travelmate_shared::types::GroupId;

/// Travel group errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// Group name is empty.
    #[error("Group name is required")]
    EmptyName,

    /// Member name is empty.
    #[error("Member name is required")]
    EmptyMemberName,

    /// Group not found.
    #[error("Group not found: {0}")]
    NotFound(GroupId),
}

impl GroupError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_GROUP_NAME",
            Self::EmptyMemberName => "EMPTY_MEMBER_NAME",
            Self::NotFound(_) => "GROUP_NOT_FOUND",
        }
    }
}

impl From<GroupError> for AppError {
    fn from(err: GroupError) -> Self {
        match err {
            GroupError::NotFound(_) => Self::NotFound(err.to_string()),
            GroupError::EmptyName | GroupError::EmptyMemberName => {
                Self::Validation(err.to_string())
            }
        }
    }
}
