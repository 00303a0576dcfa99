//! Health record reader port (read side).
//!
//! Supplies the history the insight engine evaluates. Every list is
//! returned newest first.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::health::{DetailedEntry, EntryKind, HealthTrend, MetricRecord};

/// Reader port for a user's health history.
#[async_trait]
pub trait HealthRecordReader: Send + Sync {
    /// Lists metrics, optionally of one type, newest first.
    ///
    /// The type filter is applied before `limit`.
    async fn list_metrics(
        &self,
        user_id: &UserId,
        metric_type: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<MetricRecord>, DomainError>;

    /// Lists detailed entries, optionally of one kind, newest first.
    async fn list_detailed_entries(
        &self,
        user_id: &UserId,
        kind: Option<EntryKind>,
        limit: Option<usize>,
    ) -> Result<Vec<DetailedEntry>, DomainError>;

    /// Lists precomputed trends, newest first by `created_at`.
    async fn list_trends(
        &self,
        user_id: &UserId,
        metric_type: Option<&str>,
    ) -> Result<Vec<HealthTrend>, DomainError>;
}
