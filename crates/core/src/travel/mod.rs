//! Bookings, alerts, favorite destinations, and offline items.

pub mod alert;
pub mod booking;
pub mod error;
pub mod favorite;
pub mod offline;

pub use alert::{Alert, AlertFeed, AlertType, NewAlert};
pub use booking::{Booking, BookingMode, BookingQuote};
pub use error::TravelError;
pub use favorite::FavoriteDestination;
pub use offline::{OfflineItem, OfflinePayload};
