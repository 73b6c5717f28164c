//! Items saved for offline access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use travelmate_shared::types::OfflineItemId;

use super::booking::Booking;
use crate::itinerary::Trip;

/// Saved content of an offline item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum OfflinePayload {
    /// A full trip itinerary.
    Itinerary(Trip),
    /// A booking ticket.
    Ticket(Booking),
}

impl OfflinePayload {
    /// Display label, e.g. `Itinerary: Lisbon` or `Ticket: TRAIN CONF-AB12CD`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Itinerary(trip) => format!("Itinerary: {}", trip.destination),
            Self::Ticket(booking) => format!(
                "Ticket: {} {}",
                booking.mode.as_str().to_ascii_uppercase(),
                booking.confirmation_id
            ),
        }
    }
}

/// A trip or booking copy kept for offline use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineItem {
    /// Item ID.
    pub id: OfflineItemId,
    /// Display label.
    pub label: String,
    /// Saved content.
    #[serde(flatten)]
    pub payload: OfflinePayload,
    /// When it was saved.
    pub saved_at: DateTime<Utc>,
}

impl OfflineItem {
    /// Saves a payload and derives its label.
    #[must_use]
    pub fn save(payload: OfflinePayload, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: OfflineItemId::new(),
            label: payload.label(),
            payload,
            saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::NewTrip;
    use crate::travel::booking::{BookingMode, BookingQuote};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trip() -> Trip {
        Trip::plan(NewTrip {
            destination: "Lisbon".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
        })
        .unwrap()
    }

    fn booking() -> Booking {
        let mut booking = Booking::from_quote(
            &BookingQuote {
                mode: BookingMode::Flight,
                provider: "TAP".to_string(),
                price: dec!(180),
                details: "LHR to LIS".to_string(),
                rating: None,
                duration: None,
            },
            Utc::now(),
        )
        .unwrap();
        booking.confirmation_id = "CONF-AB12CD".to_string();
        booking
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            OfflinePayload::Itinerary(trip()).label(),
            "Itinerary: Lisbon"
        );
        assert_eq!(
            OfflinePayload::Ticket(booking()).label(),
            "Ticket: FLIGHT CONF-AB12CD"
        );
    }

    #[test]
    fn test_item_wire_format() {
        let item = OfflineItem::save(OfflinePayload::Ticket(booking()), Utc::now());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "ticket");
        assert_eq!(json["label"], "Ticket: FLIGHT CONF-AB12CD");
        assert_eq!(json["data"]["confirmationId"], "CONF-AB12CD");
        assert!(json.get("savedAt").is_some());
    }

    #[test]
    fn test_item_deserializes_itinerary() {
        let item = OfflineItem::save(OfflinePayload::Itinerary(trip()), Utc::now());
        let json = serde_json::to_string(&item).unwrap();
        let back: OfflineItem = serde_json::from_str(&json).unwrap();

        match back.payload {
            OfflinePayload::Itinerary(trip) => assert_eq!(trip.destination, "Lisbon"),
            OfflinePayload::Ticket(_) => panic!("expected itinerary payload"),
        }
    }
}
