//! Core domain logic for TravelMate.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence goes through the [`store::Repository`] port.
//!
//! # Modules
//!
//! - `ledger` - Shared expenses, balance settlement, spend breakdowns
//! - `group` - Travel groups that scope ledger queries
//! - `itinerary` - Trips, segments, and trip notes
//! - `travel` - Bookings, alerts, favorite destinations, offline items
//! - `store` - Repository adapters, workspace state, snapshot import/export

pub mod group;
pub mod itinerary;
pub mod ledger;
pub mod store;
pub mod travel;
