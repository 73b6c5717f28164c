//! Trip planning and segment scheduling.

use chrono::NaiveDate;
use travelmate_shared::types::{ChecklistItemId, NoteId, SegmentId, TripId};

use super::error::ItineraryError;
use super::note::{NoteDraft, NoteUpdate};
use super::types::{NewSegment, NewTrip, Segment, SegmentStatus, Trip, TripNote};

/// Segments scheduled on one trip day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan<'a> {
    /// Trip day, 1-based.
    pub day: u32,
    /// Segments on that day, in time order.
    pub segments: Vec<&'a Segment>,
}

impl Trip {
    /// Plans a new trip with no segments or notes.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::EmptyDestination` for a blank destination and
    /// `ItineraryError::InvalidDateRange` if the trip ends before it starts.
    pub fn plan(input: NewTrip) -> Result<Self, ItineraryError> {
        let destination = input.destination.trim();
        if destination.is_empty() {
            return Err(ItineraryError::EmptyDestination);
        }
        if input.end_date < input.start_date {
            return Err(ItineraryError::InvalidDateRange {
                start: input.start_date,
                end: input.end_date,
            });
        }

        Ok(Self {
            id: TripId::new(),
            destination: destination.to_string(),
            start_date: input.start_date,
            end_date: input.end_date,
            segments: Vec::new(),
            is_favorite: false,
            notes: Vec::new(),
        })
    }

    /// Number of days in the trip, counting both ends.
    ///
    /// Zero for a stored trip whose range is inverted.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }

    /// Trip day numbers, `1..=day_count()`.
    pub fn day_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.day_count()
    }

    /// Calendar date of a trip day, if the day is within the trip.
    #[must_use]
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.day_count() {
            return None;
        }
        self.start_date
            .checked_add_days(chrono::Days::new(u64::from(day - 1)))
    }

    /// Buckets segments by trip day. Unassigned segments and day 0 land on day 1.
    #[must_use]
    pub fn segments_by_day(&self) -> Vec<DayPlan<'_>> {
        self.day_numbers()
            .map(|day| DayPlan {
                day,
                segments: self
                    .segments
                    .iter()
                    .filter(|segment| segment.day.filter(|d| *d != 0).unwrap_or(1) == day)
                    .collect(),
            })
            .collect()
    }

    /// Adds a segment and keeps the list ordered by time.
    ///
    /// Segments with equal times keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::EmptySegmentTitle` for a blank title.
    pub fn add_segment(&mut self, input: NewSegment) -> Result<SegmentId, ItineraryError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ItineraryError::EmptySegmentTitle);
        }

        let id = SegmentId::new();
        self.segments.push(Segment {
            id,
            kind: input.kind,
            title: title.to_string(),
            time: input.time,
            status: input.status,
            day: input.day,
        });
        self.segments.sort_by_key(|segment| segment.time);
        Ok(id)
    }

    /// Sets the live status of a segment.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::SegmentNotFound` if no segment has that ID.
    pub fn set_segment_status(
        &mut self,
        segment_id: SegmentId,
        status: SegmentStatus,
    ) -> Result<(), ItineraryError> {
        let segment = self
            .segments
            .iter_mut()
            .find(|segment| segment.id == segment_id)
            .ok_or(ItineraryError::SegmentNotFound(segment_id))?;
        segment.status = status;
        Ok(())
    }

    /// Removes a segment and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::SegmentNotFound` if no segment has that ID.
    pub fn remove_segment(&mut self, segment_id: SegmentId) -> Result<Segment, ItineraryError> {
        let index = self
            .segments
            .iter()
            .position(|segment| segment.id == segment_id)
            .ok_or(ItineraryError::SegmentNotFound(segment_id))?;
        Ok(self.segments.remove(index))
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Adds a note built from form input.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::EmptyNote` if the content is blank.
    pub fn add_note(&mut self, draft: NoteDraft, today: NaiveDate) -> Result<NoteId, ItineraryError> {
        let note = draft.into_note(today)?;
        let id = note.id;
        self.notes.push(note);
        Ok(id)
    }

    /// Looks up a note.
    #[must_use]
    pub fn note(&self, note_id: NoteId) -> Option<&TripNote> {
        self.notes.iter().find(|note| note.id == note_id)
    }

    /// Applies a partial update to a note.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::NoteNotFound` for an unknown note, or the
    /// validation error from the update.
    pub fn update_note(&mut self, note_id: NoteId, update: NoteUpdate) -> Result<(), ItineraryError> {
        update.apply(self.note_mut(note_id)?)
    }

    /// Removes a note and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::NoteNotFound` if no note has that ID.
    pub fn remove_note(&mut self, note_id: NoteId) -> Result<TripNote, ItineraryError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == note_id)
            .ok_or(ItineraryError::NoteNotFound(note_id))?;
        Ok(self.notes.remove(index))
    }

    /// Flips a checklist item on a note and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::NoteNotFound` or
    /// `ItineraryError::ChecklistItemNotFound`.
    pub fn toggle_checklist_item(
        &mut self,
        note_id: NoteId,
        item_id: ChecklistItemId,
    ) -> Result<bool, ItineraryError> {
        self.note_mut(note_id)?.toggle_item(item_id)
    }

    fn note_mut(&mut self, note_id: NoteId) -> Result<&mut TripNote, ItineraryError> {
        self.notes
            .iter_mut()
            .find(|note| note.id == note_id)
            .ok_or(ItineraryError::NoteNotFound(note_id))
    }
}
