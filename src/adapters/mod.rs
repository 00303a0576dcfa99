//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to storage:
//! - `memory` - In-memory health store, profile and insight repositories
//! - `snapshot` - File-based JSON/YAML snapshot store
//! - `seed` - Deterministic scenario data written through the ports

pub mod memory;
pub mod seed;
pub mod snapshot;

pub use memory::{InMemoryHealthStore, InMemoryInsightRepository, InMemoryProfileRepository};
pub use seed::{Scenario, ScenarioSeeder, SeedSummary};
pub use snapshot::{FileSnapshotStore, SnapshotFormat};
