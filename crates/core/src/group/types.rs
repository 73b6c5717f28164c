//! Travel group type.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use travelmate_shared::types::GroupId;

use super::error::GroupError;

/// A named set of travel companions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelGroup {
    /// Group ID.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Member names. Ordering carries no meaning.
    #[serde(default)]
    pub members: BTreeSet<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TravelGroup {
    /// Creates an empty group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyName` if `name` is blank.
    pub fn create(name: &str, created_at: DateTime<Utc>) -> Result<Self, GroupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }

        Ok(Self {
            id: GroupId::new(),
            name: name.to_string(),
            members: BTreeSet::new(),
            created_at,
        })
    }

    /// Adds a member. Returns false if they were already in the group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyMemberName` if `member` is blank.
    pub fn add_member(&mut self, member: &str) -> Result<bool, GroupError> {
        let member = member.trim();
        if member.is_empty() {
            return Err(GroupError::EmptyMemberName);
        }
        Ok(self.members.insert(member.to_string()))
    }

    /// Removes a member. Returns false if they were not in the group.
    pub fn remove_member(&mut self, member: &str) -> bool {
        self.members.remove(member.trim())
    }

    /// Returns true if `name` is a member.
    #[must_use]
    pub fn is_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}
