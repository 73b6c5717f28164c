//! Travel record error types.

use rust_decimal::Decimal;
use thiserror::Error;
use travelmate_shared::AppError;
use travelmate_shared::types::{AlertId, BookingId, FavoriteId, OfflineItemId};

/// Errors for bookings, alerts, favorites, and offline items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    /// Quoted price is negative.
    #[error("Booking price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// Alert message is empty.
    #[error("Alert message is required")]
    EmptyAlertMessage,

    /// Favorite destination name is empty.
    #[error("Destination name is required")]
    EmptyDestinationName,

    /// Booking not found.
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// Alert not found.
    #[error("Alert not found: {0}")]
    AlertNotFound(AlertId),

    /// Favorite destination not found.
    #[error("Favorite destination not found: {0}")]
    FavoriteNotFound(FavoriteId),

    /// Offline item not found.
    #[error("Offline item not found: {0}")]
    OfflineItemNotFound(OfflineItemId),
}

impl TravelError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativePrice(_) => "NEGATIVE_PRICE",
            Self::EmptyAlertMessage => "EMPTY_ALERT_MESSAGE",
            Self::EmptyDestinationName => "EMPTY_DESTINATION_NAME",
            Self::BookingNotFound(_) => "BOOKING_NOT_FOUND",
            Self::AlertNotFound(_) => "ALERT_NOT_FOUND",
            Self::FavoriteNotFound(_) => "FAVORITE_NOT_FOUND",
            Self::OfflineItemNotFound(_) => "OFFLINE_ITEM_NOT_FOUND",
        }
    }
}

impl From<TravelError> for AppError {
    fn from(err: TravelError) -> Self {
        match err {
            TravelError::NegativePrice(_)
            | TravelError::EmptyAlertMessage
            | TravelError::EmptyDestinationName => Self::Validation(err.to_string()),
            TravelError::BookingNotFound(_)
            | TravelError::AlertNotFound(_)
            | TravelError::FavoriteNotFound(_)
            | TravelError::OfflineItemNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = TravelError::NegativePrice(dec!(-5)).into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = TravelError::AlertNotFound(AlertId::new()).into();
        assert_eq!(err.status_code(), 404);
    }
}
