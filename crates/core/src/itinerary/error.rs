//! Itinerary error types.

use chrono::NaiveDate;
use thiserror::Error;
use travelmate_shared::AppError;
use travelmate_shared::types::{ChecklistItemId, NoteId, SegmentId, TripId};

/// Itinerary errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// Trip destination is empty.
    #[error("Trip destination is required")]
    EmptyDestination,

    /// Trip ends before it starts.
    #[error("Trip end date {end} is before start date {start}")]
    InvalidDateRange {
        /// First day.
        start: NaiveDate,
        /// Last day.
        end: NaiveDate,
    },

    /// Segment title is empty.
    #[error("Segment title is required")]
    EmptySegmentTitle,

    /// Note content is empty.
    #[error("Note content is required")]
    EmptyNote,

    /// Trip not found.
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    /// Segment not found on the trip.
    #[error("Segment not found: {0}")]
    SegmentNotFound(SegmentId),

    /// Note not found on the trip.
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Checklist item not found on the note.
    #[error("Checklist item not found: {0}")]
    ChecklistItemNotFound(ChecklistItemId),
}

impl ItineraryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDestination => "EMPTY_DESTINATION",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::EmptySegmentTitle => "EMPTY_SEGMENT_TITLE",
            Self::EmptyNote => "EMPTY_NOTE",
            Self::TripNotFound(_) => "TRIP_NOT_FOUND",
            Self::SegmentNotFound(_) => "SEGMENT_NOT_FOUND",
            Self::NoteNotFound(_) => "NOTE_NOT_FOUND",
            Self::ChecklistItemNotFound(_) => "CHECKLIST_ITEM_NOT_FOUND",
        }
    }

    /// Returns true for lookups that found nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TripNotFound(_)
                | Self::SegmentNotFound(_)
                | Self::NoteNotFound(_)
                | Self::ChecklistItemNotFound(_)
        )
    }
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}
