//! Snapshot Adapters
//!
//! - **FileSnapshotStore** - Stores a `DataSnapshot` as JSON or YAML on disk

mod file_snapshot_store;

pub use file_snapshot_store::{FileSnapshotStore, SnapshotFormat};
