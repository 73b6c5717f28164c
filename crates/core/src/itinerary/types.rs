//! Itinerary domain types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use travelmate_shared::types::{ChecklistItemId, NoteId, SegmentId, TripId};

/// Kind of itinerary segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    /// Flight, train, bus, transfer.
    Transport,
    /// Hotel check-in or other accommodation.
    Stay,
    /// Sightseeing, tours, events.
    Activity,
}

/// Live status of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentStatus {
    /// Running as planned.
    #[default]
    OnTime,
    /// Running late.
    Delayed,
    /// Will not happen.
    Canceled,
}

/// One scheduled item on a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment ID.
    pub id: SegmentId,
    /// Segment kind.
    #[serde(rename = "type")]
    pub kind: SegmentType,
    /// Title, e.g. "Flight to Lisbon".
    pub title: String,
    /// Scheduled local time.
    pub time: NaiveDateTime,
    /// Live status.
    #[serde(default)]
    pub status: SegmentStatus,
    /// Trip day (1-based). Unassigned segments show on day 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// Input for a new segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSegment {
    /// Segment kind.
    pub kind: SegmentType,
    /// Title.
    pub title: String,
    /// Scheduled local time.
    pub time: NaiveDateTime,
    /// Initial status.
    pub status: SegmentStatus,
    /// Trip day (1-based), if assigned.
    pub day: Option<u32>,
}

/// A checklist entry on a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item ID.
    pub id: ChecklistItemId,
    /// Item text.
    pub text: String,
    /// Whether the item is done.
    #[serde(default)]
    pub checked: bool,
}

/// A dated note attached to a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripNote {
    /// Note ID.
    pub id: NoteId,
    /// Day the note refers to.
    pub date: NaiveDate,
    /// Free text.
    pub content: String,
    /// Checklist entries.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Reference links.
    #[serde(default)]
    pub links: Vec<String>,
}

/// A planned trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Trip ID.
    pub id: TripId,
    /// Destination name.
    pub destination: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
    /// Segments in time order.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Notes in insertion order.
    #[serde(default)]
    pub notes: Vec<TripNote>,
}

/// Input for planning a new trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    /// Destination name.
    pub destination: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day, inclusive.
    pub end_date: NaiveDate,
}
