//! Travel groups: named member sets that scope ledger queries.

pub mod error;
pub mod types;

pub use error::GroupError;
pub use types::TravelGroup;
