//! In-Memory Adapters
//!
//! Port implementations backed by process memory. Used by tests, the
//! scenario seeder and the CLI, which loads a snapshot into them.

mod health_store;
mod insight_repository;
mod profile_repository;

pub use health_store::InMemoryHealthStore;
pub use insight_repository::InMemoryInsightRepository;
pub use profile_repository::InMemoryProfileRepository;
