//! Persistence port, workspace state, and snapshot import/export.
//!
//! The workspace owns every collection in memory and writes each change
//! through a [`Repository`]. Two adapters are provided:
//!
//! - [`InMemoryRepository`] for tests and embedding
//! - [`JsonFileRepository`], one `<key>.json` file per collection

pub mod error;
pub mod repository;
pub mod snapshot;
pub mod workspace;

pub use error::{StoreError, WorkspaceError};
pub use repository::{Collection, InMemoryRepository, JsonFileRepository, Repository};
pub use snapshot::{ImportSummary, Snapshot, SnapshotImport};
pub use workspace::TravelWorkspace;
