//! In-process application state backed by a repository.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use travelmate_shared::types::{
    AlertId, BookingId, ChecklistItemId, ExpenseId, FavoriteId, GroupId, NoteId, OfflineItemId,
    SegmentId, TripId,
};

use super::error::{StoreError, WorkspaceError};
use super::repository::{Collection, Repository};
use super::snapshot::{ImportSummary, Snapshot, SnapshotImport};
use crate::group::{GroupError, TravelGroup};
use crate::itinerary::{
    ItineraryError, NewSegment, NewTrip, NoteDraft, NoteUpdate, SegmentStatus, Trip,
};
use crate::ledger::{
    Balances, Expense, ExpenseCategory, ExpenseDraft, GroupSummary, LedgerService,
    SETTLEMENT_THRESHOLD, raw_balances,
};
use crate::travel::{
    Alert, AlertFeed, Booking, BookingQuote, FavoriteDestination, NewAlert, OfflineItem,
    OfflinePayload, TravelError,
};

/// Trips, bookings, expenses, and the rest of a traveller's data.
///
/// Every mutation updates memory and then saves the affected collection
/// through the repository. A failed save restores the collection, so memory
/// never holds a change the repository rejected.
#[derive(Debug)]
pub struct TravelWorkspace<R: Repository> {
    repo: R,
    settlement_threshold: Decimal,
    trips: Vec<Trip>,
    bookings: Vec<Booking>,
    expenses: Vec<Expense>,
    alerts: AlertFeed,
    offline_items: Vec<OfflineItem>,
    favorites: Vec<FavoriteDestination>,
    groups: Vec<TravelGroup>,
}

impl<R: Repository> TravelWorkspace<R> {
    /// Loads every collection from `repo`.
    ///
    /// A collection that is missing, unreadable, or has the wrong shape
    /// starts empty.
    #[must_use]
    pub fn open(repo: R) -> Self {
        let workspace = Self {
            trips: load_or_empty(&repo, Collection::Trips),
            bookings: load_or_empty(&repo, Collection::Bookings),
            expenses: load_or_empty(&repo, Collection::Expenses),
            alerts: load_or_empty(&repo, Collection::Alerts),
            offline_items: load_or_empty(&repo, Collection::Offline),
            favorites: load_or_empty(&repo, Collection::Favorites),
            groups: load_or_empty(&repo, Collection::Groups),
            settlement_threshold: SETTLEMENT_THRESHOLD,
            repo,
        };

        info!(
            trips = workspace.trips.len(),
            expenses = workspace.expenses.len(),
            groups = workspace.groups.len(),
            "workspace opened"
        );
        workspace
    }

    /// Uses `threshold` instead of [`SETTLEMENT_THRESHOLD`] for balance queries.
    #[must_use]
    pub fn with_settlement_threshold(mut self, threshold: Decimal) -> Self {
        self.settlement_threshold = threshold.abs();
        self
    }

    /// Backing repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Trips.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Looks up a trip.
    #[must_use]
    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// Bookings.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Expenses in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Alerts, newest first.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        self.alerts.as_slice()
    }

    /// Offline items.
    #[must_use]
    pub fn offline_items(&self) -> &[OfflineItem] {
        &self.offline_items
    }

    /// Favorite destinations.
    #[must_use]
    pub fn favorites(&self) -> &[FavoriteDestination] {
        &self.favorites
    }

    /// Travel groups.
    #[must_use]
    pub fn groups(&self) -> &[TravelGroup] {
        &self.groups
    }

    /// Looks up a group.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&TravelGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Looks up a group by name, ignoring case.
    #[must_use]
    pub fn group_by_name(&self, name: &str) -> Option<&TravelGroup> {
        let name = name.trim();
        self.groups
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    // Expenses

    /// Validates and records an expense.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a bad draft, or a store error.
    pub fn add_expense(
        &mut self,
        draft: &ExpenseDraft,
        now: DateTime<Utc>,
    ) -> Result<ExpenseId, WorkspaceError> {
        let expense = Expense::record(draft.validate()?, now);
        let id = expense.id;
        let backup = self.backup(Collection::Expenses);
        self.expenses.push(expense);
        self.commit(backup)?;
        debug!(expense_id = %id, "expense recorded");
        Ok(id)
    }

    /// Removes an expense.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::ExpenseNotFound` for an unknown ID.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense, WorkspaceError> {
        let backup = self.backup(Collection::Expenses);
        let expense = take(&mut self.expenses, |e| e.id == id)
            .ok_or(WorkspaceError::ExpenseNotFound(id))?;
        self.commit(backup)?;
        Ok(expense)
    }

    // Groups

    /// Creates a group with initial members. Blank member names are skipped.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::EmptyName` for a blank name.
    pub fn create_group<I, S>(
        &mut self,
        name: &str,
        members: I,
        now: DateTime<Utc>,
    ) -> Result<GroupId, WorkspaceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group = TravelGroup::create(name, now)?;
        for member in members {
            match group.add_member(member.as_ref()) {
                Ok(_) | Err(GroupError::EmptyMemberName) => {}
                Err(err) => return Err(err.into()),
            }
        }

        let id = group.id;
        let backup = self.backup(Collection::Groups);
        self.groups.push(group);
        self.commit(backup)?;
        Ok(id)
    }

    /// Deletes a group. Its expenses are kept.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NotFound` for an unknown ID.
    pub fn remove_group(&mut self, id: GroupId) -> Result<TravelGroup, WorkspaceError> {
        let backup = self.backup(Collection::Groups);
        let group = take(&mut self.groups, |g| g.id == id).ok_or(GroupError::NotFound(id))?;
        self.commit(backup)?;
        Ok(group)
    }

    /// Adds a member. Returns false if they were already in the group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NotFound` or `GroupError::EmptyMemberName`.
    pub fn add_member(&mut self, group_id: GroupId, member: &str) -> Result<bool, WorkspaceError> {
        let backup = self.backup(Collection::Groups);
        let added = self.group_mut(group_id)?.add_member(member)?;
        if added {
            self.commit(backup)?;
        }
        Ok(added)
    }

    /// Removes a member. Returns false if they were not in the group.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NotFound` for an unknown group.
    pub fn remove_member(
        &mut self,
        group_id: GroupId,
        member: &str,
    ) -> Result<bool, WorkspaceError> {
        let backup = self.backup(Collection::Groups);
        let removed = self.group_mut(group_id)?.remove_member(member);
        if removed {
            self.commit(backup)?;
        }
        Ok(removed)
    }

    // Ledger queries

    /// Balances across every expense.
    #[must_use]
    pub fn balances(&self) -> Balances {
        Balances::settle_with_threshold(raw_balances(&self.expenses), self.settlement_threshold)
    }

    /// Balances over the expenses that involve a group's members.
    ///
    /// # Errors
    ///
    /// Returns `GroupError::NotFound` for an unknown group.
    pub fn group_balances(&self, group_id: GroupId) -> Result<Balances, WorkspaceError> {
        let group = self.group(group_id).ok_or(GroupError::NotFound(group_id))?;
        let scoped = LedgerService::filter_by_group(&self.expenses, &group.members);
        Ok(Balances::settle_with_threshold(
            raw_balances(scoped),
            self.settlement_threshold,
        ))
    }

    /// One ledger summary per group, in group order.
    #[must_use]
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.groups
            .iter()
            .map(|group| {
                LedgerService::group_summary(&self.expenses, group, self.settlement_threshold)
            })
            .collect()
    }

    /// Sum of every expense.
    #[must_use]
    pub fn total_spend(&self) -> Decimal {
        LedgerService::total_spend(&self.expenses)
    }

    /// Spend per category.
    #[must_use]
    pub fn category_breakdown(&self) -> BTreeMap<ExpenseCategory, Decimal> {
        LedgerService::category_breakdown(&self.expenses)
    }

    // Trips

    /// Plans a trip.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a bad destination or date range.
    pub fn plan_trip(&mut self, input: NewTrip) -> Result<TripId, WorkspaceError> {
        let trip = Trip::plan(input)?;
        let id = trip.id;
        let backup = self.backup(Collection::Trips);
        self.trips.push(trip);
        self.commit(backup)?;
        Ok(id)
    }

    /// Deletes a trip.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` for an unknown ID.
    pub fn remove_trip(&mut self, id: TripId) -> Result<Trip, WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        let trip = take(&mut self.trips, |t| t.id == id).ok_or(ItineraryError::TripNotFound(id))?;
        self.commit(backup)?;
        Ok(trip)
    }

    /// Adds a segment to a trip.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` or the segment validation error.
    pub fn add_segment(
        &mut self,
        trip_id: TripId,
        input: NewSegment,
    ) -> Result<SegmentId, WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        let id = self.trip_mut(trip_id)?.add_segment(input)?;
        self.commit(backup)?;
        Ok(id)
    }

    /// Sets a segment's live status.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` or `ItineraryError::SegmentNotFound`.
    pub fn set_segment_status(
        &mut self,
        trip_id: TripId,
        segment_id: SegmentId,
        status: SegmentStatus,
    ) -> Result<(), WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        self.trip_mut(trip_id)?
            .set_segment_status(segment_id, status)?;
        self.commit(backup)?;
        Ok(())
    }

    /// Removes a segment from a trip.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` or `ItineraryError::SegmentNotFound`.
    pub fn remove_segment(
        &mut self,
        trip_id: TripId,
        segment_id: SegmentId,
    ) -> Result<(), WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        self.trip_mut(trip_id)?.remove_segment(segment_id)?;
        self.commit(backup)?;
        Ok(())
    }

    /// Flips a trip's favorite flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` for an unknown ID.
    pub fn toggle_trip_favorite(&mut self, trip_id: TripId) -> Result<bool, WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        let favorite = self.trip_mut(trip_id)?.toggle_favorite();
        self.commit(backup)?;
        Ok(favorite)
    }

    /// Adds a note to a trip.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` or `ItineraryError::EmptyNote`.
    pub fn add_note(
        &mut self,
        trip_id: TripId,
        draft: NoteDraft,
        today: NaiveDate,
    ) -> Result<NoteId, WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        let id = self.trip_mut(trip_id)?.add_note(draft, today)?;
        self.commit(backup)?;
        Ok(id)
    }

    /// Updates a trip note.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for the trip or note, or the note
    /// validation error.
    pub fn update_note(
        &mut self,
        trip_id: TripId,
        note_id: NoteId,
        update: NoteUpdate,
    ) -> Result<(), WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        self.trip_mut(trip_id)?.update_note(note_id, update)?;
        self.commit(backup)?;
        Ok(())
    }

    /// Removes a trip note.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` or `ItineraryError::NoteNotFound`.
    pub fn remove_note(&mut self, trip_id: TripId, note_id: NoteId) -> Result<(), WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        self.trip_mut(trip_id)?.remove_note(note_id)?;
        self.commit(backup)?;
        Ok(())
    }

    /// Flips a checklist item and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for the trip, note, or item.
    pub fn toggle_checklist_item(
        &mut self,
        trip_id: TripId,
        note_id: NoteId,
        item_id: ChecklistItemId,
    ) -> Result<bool, WorkspaceError> {
        let backup = self.backup(Collection::Trips);
        let checked = self
            .trip_mut(trip_id)?
            .toggle_checklist_item(note_id, item_id)?;
        self.commit(backup)?;
        Ok(checked)
    }

    // Bookings

    /// Confirms a quote and stores the booking.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::NegativePrice` for a bad quote, or a store error.
    pub fn confirm_booking(
        &mut self,
        quote: &BookingQuote,
        now: DateTime<Utc>,
    ) -> Result<Booking, WorkspaceError> {
        let booking = Booking::from_quote(quote, now)?;
        let backup = self.backup(Collection::Bookings);
        self.bookings.push(booking.clone());
        self.commit(backup)?;
        info!(
            confirmation_id = %booking.confirmation_id,
            mode = %booking.mode,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Deletes a booking.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::BookingNotFound` for an unknown ID.
    pub fn remove_booking(&mut self, id: BookingId) -> Result<Booking, WorkspaceError> {
        let backup = self.backup(Collection::Bookings);
        let booking =
            take(&mut self.bookings, |b| b.id == id).ok_or(TravelError::BookingNotFound(id))?;
        self.commit(backup)?;
        Ok(booking)
    }

    /// Flips a booking's favorite flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::BookingNotFound` for an unknown ID.
    pub fn toggle_booking_favorite(&mut self, id: BookingId) -> Result<bool, WorkspaceError> {
        let backup = self.backup(Collection::Bookings);
        let favorite = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(TravelError::BookingNotFound(id))?
            .toggle_favorite();
        self.commit(backup)?;
        Ok(favorite)
    }

    // Alerts

    /// Adds an unread alert at the front of the feed.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::EmptyAlertMessage` or a store error.
    pub fn raise_alert(
        &mut self,
        input: NewAlert,
        now: DateTime<Utc>,
    ) -> Result<AlertId, WorkspaceError> {
        let alert = Alert::raise(input, now)?;
        let id = alert.id;
        let backup = self.backup(Collection::Alerts);
        self.alerts.push(alert);
        self.commit(backup)?;
        Ok(id)
    }

    /// Marks an alert as read.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::AlertNotFound` for an unknown ID.
    pub fn mark_alert_read(&mut self, id: AlertId) -> Result<(), WorkspaceError> {
        let backup = self.backup(Collection::Alerts);
        self.alerts.mark_read(id)?;
        self.commit(backup)?;
        Ok(())
    }

    /// Removes an alert.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::AlertNotFound` for an unknown ID.
    pub fn dismiss_alert(&mut self, id: AlertId) -> Result<Alert, WorkspaceError> {
        let backup = self.backup(Collection::Alerts);
        let alert = self.alerts.dismiss(id)?;
        self.commit(backup)?;
        Ok(alert)
    }

    /// Number of unread alerts.
    #[must_use]
    pub fn unread_alert_count(&self) -> usize {
        self.alerts.unread_count()
    }

    // Favorites

    /// Saves a favorite destination.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::EmptyDestinationName` or a store error.
    pub fn add_favorite(
        &mut self,
        name: &str,
        country: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<FavoriteId, WorkspaceError> {
        let favorite = FavoriteDestination::new(name, country, now)?;
        let id = favorite.id;
        let backup = self.backup(Collection::Favorites);
        self.favorites.push(favorite);
        self.commit(backup)?;
        Ok(id)
    }

    /// Removes a favorite destination.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::FavoriteNotFound` for an unknown ID.
    pub fn remove_favorite(&mut self, id: FavoriteId) -> Result<FavoriteDestination, WorkspaceError> {
        let backup = self.backup(Collection::Favorites);
        let favorite =
            take(&mut self.favorites, |f| f.id == id).ok_or(TravelError::FavoriteNotFound(id))?;
        self.commit(backup)?;
        Ok(favorite)
    }

    // Offline

    /// Saves a copy of a trip or booking for offline use.
    ///
    /// # Errors
    ///
    /// Returns a store error if the collection cannot be saved.
    pub fn save_offline(
        &mut self,
        payload: OfflinePayload,
        now: DateTime<Utc>,
    ) -> Result<OfflineItemId, WorkspaceError> {
        let item = OfflineItem::save(payload, now);
        let id = item.id;
        let label = item.label.clone();
        let backup = self.backup(Collection::Offline);
        self.offline_items.push(item);
        self.commit(backup)?;
        debug!(%label, "saved for offline");
        Ok(id)
    }

    /// Saves a copy of a stored trip for offline use.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::TripNotFound` for an unknown ID.
    pub fn save_trip_offline(
        &mut self,
        trip_id: TripId,
        now: DateTime<Utc>,
    ) -> Result<OfflineItemId, WorkspaceError> {
        let trip = self
            .trip(trip_id)
            .cloned()
            .ok_or(ItineraryError::TripNotFound(trip_id))?;
        self.save_offline(OfflinePayload::Itinerary(trip), now)
    }

    /// Saves a copy of a stored booking for offline use.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::BookingNotFound` for an unknown ID.
    pub fn save_booking_offline(
        &mut self,
        booking_id: BookingId,
        now: DateTime<Utc>,
    ) -> Result<OfflineItemId, WorkspaceError> {
        let booking = self
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or(TravelError::BookingNotFound(booking_id))?;
        self.save_offline(OfflinePayload::Ticket(booking), now)
    }

    /// Removes an offline item.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::OfflineItemNotFound` for an unknown ID.
    pub fn remove_offline_item(&mut self, id: OfflineItemId) -> Result<OfflineItem, WorkspaceError> {
        let backup = self.backup(Collection::Offline);
        let item = take(&mut self.offline_items, |i| i.id == id)
            .ok_or(TravelError::OfflineItemNotFound(id))?;
        self.commit(backup)?;
        Ok(item)
    }

    // Snapshots

    /// Exports everything as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialization` if encoding fails.
    pub fn export_snapshot(&self, exported_at: DateTime<Utc>) -> Result<String, WorkspaceError> {
        let snapshot = Snapshot {
            trips: &self.trips,
            bookings: &self.bookings,
            expenses: &self.expenses,
            alerts: self.alerts.as_slice(),
            offline_items: &self.offline_items,
            favorites: &self.favorites,
            groups: &self.groups,
            exported_at,
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(StoreError::from)?;
        Ok(json)
    }

    /// Replaces collections with those in an exported document.
    ///
    /// The whole document is parsed before anything changes. Collections it
    /// does not mention are kept. Offline items are never imported.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MalformedSnapshot` without touching state if the
    /// document does not parse. If saving any collection fails, every
    /// replaced collection is restored and the store error is returned.
    pub fn import_snapshot(&mut self, json: &str) -> Result<ImportSummary, WorkspaceError> {
        let import = match SnapshotImport::parse(json) {
            Ok(import) => import,
            Err(err) => {
                warn!(error = %err, "snapshot import rejected");
                return Err(err.into());
            }
        };

        let mut summary = ImportSummary::default();
        let mut backups = Vec::new();
        if let Some(trips) = import.trips {
            summary.replaced.push((Collection::Trips, trips.len()));
            backups.push(Backup::Trips(std::mem::replace(&mut self.trips, trips)));
        }
        if let Some(bookings) = import.bookings {
            summary.replaced.push((Collection::Bookings, bookings.len()));
            backups.push(Backup::Bookings(std::mem::replace(&mut self.bookings, bookings)));
        }
        if let Some(expenses) = import.expenses {
            summary.replaced.push((Collection::Expenses, expenses.len()));
            backups.push(Backup::Expenses(std::mem::replace(&mut self.expenses, expenses)));
        }
        if let Some(alerts) = import.alerts {
            summary.replaced.push((Collection::Alerts, alerts.len()));
            backups.push(Backup::Alerts(std::mem::replace(
                &mut self.alerts,
                AlertFeed::from_vec(alerts),
            )));
        }
        if let Some(favorites) = import.favorites {
            summary.replaced.push((Collection::Favorites, favorites.len()));
            backups.push(Backup::Favorites(std::mem::replace(&mut self.favorites, favorites)));
        }
        if let Some(groups) = import.groups {
            summary.replaced.push((Collection::Groups, groups.len()));
            backups.push(Backup::Groups(std::mem::replace(&mut self.groups, groups)));
        }

        for (written, (collection, _)) in summary.replaced.iter().enumerate() {
            if let Err(err) = self.flush(*collection) {
                warn!(%collection, error = %err, "snapshot import failed, rolling back");
                self.roll_back(backups, written);
                return Err(err.into());
            }
        }

        info!(collections = summary.replaced.len(), "snapshot imported");
        Ok(summary)
    }

    fn group_mut(&mut self, id: GroupId) -> Result<&mut TravelGroup, GroupError> {
        self.groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or(GroupError::NotFound(id))
    }

    fn trip_mut(&mut self, id: TripId) -> Result<&mut Trip, ItineraryError> {
        self.trips
            .iter_mut()
            .find(|trip| trip.id == id)
            .ok_or(ItineraryError::TripNotFound(id))
    }

    fn backup(&self, collection: Collection) -> Backup {
        match collection {
            Collection::Trips => Backup::Trips(self.trips.clone()),
            Collection::Bookings => Backup::Bookings(self.bookings.clone()),
            Collection::Expenses => Backup::Expenses(self.expenses.clone()),
            Collection::Alerts => Backup::Alerts(self.alerts.clone()),
            Collection::Offline => Backup::Offline(self.offline_items.clone()),
            Collection::Favorites => Backup::Favorites(self.favorites.clone()),
            Collection::Groups => Backup::Groups(self.groups.clone()),
        }
    }

    fn restore(&mut self, backup: Backup) {
        match backup {
            Backup::Trips(trips) => self.trips = trips,
            Backup::Bookings(bookings) => self.bookings = bookings,
            Backup::Expenses(expenses) => self.expenses = expenses,
            Backup::Alerts(alerts) => self.alerts = alerts,
            Backup::Offline(items) => self.offline_items = items,
            Backup::Favorites(favorites) => self.favorites = favorites,
            Backup::Groups(groups) => self.groups = groups,
        }
    }

    /// Saves the collection `backup` was taken from, restoring it on failure.
    fn commit(&mut self, backup: Backup) -> Result<(), StoreError> {
        let collection = backup.collection();
        if let Err(err) = self.flush(collection) {
            warn!(%collection, error = %err, "save failed, change discarded");
            self.restore(backup);
            return Err(err);
        }
        Ok(())
    }

    /// Restores every backup and rewrites the first `written` of them.
    fn roll_back(&mut self, backups: Vec<Backup>, written: usize) {
        let collections: Vec<Collection> = backups.iter().map(Backup::collection).collect();
        for backup in backups {
            self.restore(backup);
        }
        for collection in &collections[..written] {
            if let Err(err) = self.flush(*collection) {
                warn!(%collection, error = %err, "failed to restore stored collection");
            }
        }
    }

    fn flush(&mut self, collection: Collection) -> Result<(), StoreError> {
        let value = match collection {
            Collection::Trips => serde_json::to_value(&self.trips),
            Collection::Bookings => serde_json::to_value(&self.bookings),
            Collection::Expenses => serde_json::to_value(&self.expenses),
            Collection::Alerts => serde_json::to_value(&self.alerts),
            Collection::Offline => serde_json::to_value(&self.offline_items),
            Collection::Favorites => serde_json::to_value(&self.favorites),
            Collection::Groups => serde_json::to_value(&self.groups),
        }?;
        self.repo.save(collection, value)?;
        debug!(%collection, "collection saved");
        Ok(())
    }
}

/// A collection's contents from before a mutation.
#[derive(Debug)]
enum Backup {
    Trips(Vec<Trip>),
    Bookings(Vec<Booking>),
    Expenses(Vec<Expense>),
    Alerts(AlertFeed),
    Offline(Vec<OfflineItem>),
    Favorites(Vec<FavoriteDestination>),
    Groups(Vec<TravelGroup>),
}

impl Backup {
    const fn collection(&self) -> Collection {
        match self {
            Self::Trips(_) => Collection::Trips,
            Self::Bookings(_) => Collection::Bookings,
            Self::Expenses(_) => Collection::Expenses,
            Self::Alerts(_) => Collection::Alerts,
            Self::Offline(_) => Collection::Offline,
            Self::Favorites(_) => Collection::Favorites,
            Self::Groups(_) => Collection::Groups,
        }
    }
}

fn load_or_empty<R, T>(repo: &R, collection: Collection) -> T
where
    R: Repository,
    T: DeserializeOwned + Default,
{
    match repo.load(collection) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(%collection, error = %err, "stored collection has unexpected shape, starting empty");
            T::default()
        }),
        Ok(None) => {
            debug!(%collection, "no stored data");
            T::default()
        }
        Err(err) => {
            warn!(%collection, error = %err, "failed to load collection, starting empty");
            T::default()
        }
    }
}

fn take<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    let index = items.iter().position(pred)?;
    Some(items.remove(index))
}
