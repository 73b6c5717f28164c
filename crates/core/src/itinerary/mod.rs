//! Trips, itinerary segments, and trip notes.
//!
//! - Trip planning with a validated date range
//! - Segments kept in time order and bucketed by trip day
//! - Notes with checklists and links

pub mod error;
pub mod note;
pub mod trip;
pub mod types;

pub use error::ItineraryError;
pub use note::{NoteDraft, NoteUpdate};
pub use trip::DayPlan;
pub use types::{
    ChecklistItem, NewSegment, NewTrip, Segment, SegmentStatus, SegmentType, Trip, TripNote,
};
