//! Snapshot Store Port - whole-account export and import.
//!
//! A snapshot bundles a user's profile, history and insights into a single
//! document so it can be backed up or moved between stores.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::health::{DetailedEntry, HealthTrend, MetricRecord, Profile};
use crate::domain::insights::Insight;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "2.0";

/// Errors from snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),

    #[error("Failed to deserialize snapshot: {0}")]
    Deserialization(String),

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("Snapshot not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::Serialization(_) | StorageError::Deserialization(_) => {
                ErrorCode::SerializationError
            }
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Everything stored for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub profile: Option<Profile>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub metric_history: Vec<MetricRecord>,
    #[serde(default)]
    pub detailed_data: Vec<DetailedEntry>,
    #[serde(default)]
    pub trends: Vec<HealthTrend>,
    pub export_date: Timestamp,
    pub version: String,
}

impl DataSnapshot {
    /// An empty snapshot stamped with the current format version.
    pub fn new(export_date: Timestamp) -> Self {
        Self {
            profile: None,
            insights: Vec::new(),
            metric_history: Vec::new(),
            detailed_data: Vec::new(),
            trends: Vec::new(),
            export_date,
            version: SNAPSHOT_VERSION.to_string(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.insights.len()
            + self.metric_history.len()
            + self.detailed_data.len()
            + self.trends.len()
    }
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: &DataSnapshot) -> Result<(), StorageError>;

    async fn load(&self) -> Result<DataSnapshot, StorageError>;

    async fn exists(&self) -> Result<bool, StorageError>;
}
