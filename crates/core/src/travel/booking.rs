//! Booking quotes and confirmed bookings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use travelmate_shared::types::BookingId;
use uuid::Uuid;

use super::error::TravelError;

const CONFIRMATION_PREFIX: &str = "CONF-";
const CONFIRMATION_LEN: usize = 6;
const CONFIRMATION_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Travel mode of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    /// Flight.
    Flight,
    /// Train.
    Train,
    /// Bus.
    Bus,
    /// Hotel stay.
    Hotel,
    /// Cab ride.
    Cab,
}

impl BookingMode {
    /// All modes.
    pub const ALL: [Self; 5] = [Self::Flight, Self::Train, Self::Bus, Self::Hotel, Self::Cab];

    /// Returns the wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Hotel => "hotel",
            Self::Cab => "cab",
        }
    }
}

impl fmt::Display for BookingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == needle)
            .ok_or_else(|| format!("unknown booking mode: {s}"))
    }
}

/// A search result offered by a booking provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// Travel mode.
    pub mode: BookingMode,
    /// Provider name.
    pub provider: String,
    /// Quoted price.
    pub price: Decimal,
    /// Route or stay details.
    pub details: String,
    /// Provider rating, e.g. 4.3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
    /// Trip duration, e.g. "2h 15m".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Confirmation code, `CONF-XXXXXX`.
    pub confirmation_id: String,
    /// Travel mode.
    pub mode: BookingMode,
    /// Details shown on the ticket.
    pub details: String,
    /// Confirmed price.
    pub price: Decimal,
    /// Confirmation timestamp.
    pub created_at: DateTime<Utc>,
    /// Marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Booking {
    /// Confirms a quote.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::NegativePrice` if the quote price is negative.
    pub fn from_quote(quote: &BookingQuote, created_at: DateTime<Utc>) -> Result<Self, TravelError> {
        if quote.price < Decimal::ZERO {
            return Err(TravelError::NegativePrice(quote.price));
        }

        Ok(Self {
            id: BookingId::new(),
            confirmation_id: confirmation_id(Uuid::new_v4()),
            mode: quote.mode,
            details: quote.details.clone(),
            price: quote.price,
            created_at,
            is_favorite: false,
        })
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }
}

/// Derives a `CONF-XXXXXX` code from random bytes.
fn confirmation_id(seed: Uuid) -> String {
    let mut code = String::with_capacity(CONFIRMATION_PREFIX.len() + CONFIRMATION_LEN);
    code.push_str(CONFIRMATION_PREFIX);
    code.extend(
        seed.as_bytes()
            .iter()
            .take(CONFIRMATION_LEN)
            .map(|byte| char::from(CONFIRMATION_ALPHABET[usize::from(*byte) % CONFIRMATION_ALPHABET.len()])),
    );
    code
}
