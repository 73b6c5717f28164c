//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `TripId` where an `ExpenseId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(ExpenseId, "Unique identifier for an expense record.");
typed_id!(GroupId, "Unique identifier for a travel group.");
typed_id!(TripId, "Unique identifier for a trip.");
typed_id!(SegmentId, "Unique identifier for an itinerary segment.");
typed_id!(NoteId, "Unique identifier for a trip note.");
typed_id!(ChecklistItemId, "Unique identifier for a checklist item.");
typed_id!(BookingId, "Unique identifier for a confirmed booking.");
typed_id!(AlertId, "Unique identifier for an alert.");
typed_id!(FavoriteId, "Unique identifier for a favorite destination.");
typed_id!(OfflineItemId, "Unique identifier for an offline-saved item.");
