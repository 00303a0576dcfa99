//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Health Record Ports
//!
//! - `HealthRecordReader` - History the insight engine evaluates
//! - `HealthRecordWriter` - Append-only recording of metrics, entries, trends
//! - `ProfileRepository` - One health profile per user
//!
//! ## Insight Ports
//!
//! - `InsightSink` - Receives generated insights
//! - `InsightRepository` - Queries and read/favorite state
//!
//! ## Snapshot Ports
//!
//! - `SnapshotStore` - Whole-account export and import

mod health_record_reader;
mod health_record_writer;
mod insight_repository;
mod profile_repository;
mod snapshot_store;

pub use health_record_reader::HealthRecordReader;
pub use health_record_writer::HealthRecordWriter;
pub use insight_repository::{InsightFilter, InsightRepository, InsightSink};
pub use profile_repository::ProfileRepository;
pub use snapshot_store::{DataSnapshot, SnapshotStore, StorageError, SNAPSHOT_VERSION};
