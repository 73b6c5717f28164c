//! Export and import documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::repository::Collection;
use crate::group::TravelGroup;
use crate::itinerary::Trip;
use crate::ledger::{Expense, check_amount};
use crate::travel::{Alert, Booking, FavoriteDestination, OfflineItem};

/// Full export of a workspace.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    /// Trips.
    pub trips: &'a [Trip],
    /// Bookings.
    pub bookings: &'a [Booking],
    /// Expenses.
    pub expenses: &'a [Expense],
    /// Alerts, newest first.
    pub alerts: &'a [Alert],
    /// Offline items.
    pub offline_items: &'a [OfflineItem],
    /// Favorite destinations.
    pub favorites: &'a [FavoriteDestination],
    /// Travel groups.
    pub groups: &'a [TravelGroup],
    /// Export timestamp.
    pub exported_at: DateTime<Utc>,
}

/// Parsed import document. Absent or null collections are `None`.
///
/// Offline items are not part of an import and are ignored if present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotImport {
    /// Trips.
    #[serde(default)]
    pub trips: Option<Vec<Trip>>,
    /// Bookings.
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
    /// Expenses.
    #[serde(default)]
    pub expenses: Option<Vec<Expense>>,
    /// Alerts, newest first.
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
    /// Favorite destinations.
    #[serde(default)]
    pub favorites: Option<Vec<FavoriteDestination>>,
    /// Travel groups.
    #[serde(default)]
    pub groups: Option<Vec<TravelGroup>>,
}

impl SnapshotImport {
    /// Parses an import document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MalformedSnapshot` if the text is not JSON, a
    /// collection does not have the expected shape, or an expense amount is
    /// out of range.
    pub fn parse(json: &str) -> Result<Self, StoreError> {
        let import: Self =
            serde_json::from_str(json).map_err(|e| StoreError::MalformedSnapshot(e.to_string()))?;

        for expense in import.expenses.iter().flatten() {
            check_amount(expense.amount).map_err(|err| {
                StoreError::MalformedSnapshot(format!("expense {}: {err}", expense.id))
            })?;
        }
        Ok(import)
    }
}

/// Collections replaced by an import, in import order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Collections replaced, with their new record counts.
    pub replaced: Vec<(Collection, usize)>,
}

impl ImportSummary {
    /// Returns true if `collection` was replaced.
    #[must_use]
    pub fn contains(&self, collection: Collection) -> bool {
        self.replaced.iter().any(|(c, _)| *c == collection)
    }

    /// Returns true if nothing was imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replaced.is_empty()
    }
}
