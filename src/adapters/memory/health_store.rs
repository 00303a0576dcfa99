//! In-memory health record store.
//!
//! Append-only lists of metrics, detailed entries and trends, shared behind
//! a tokio `RwLock`. Suitable for tests, demos and the CLI.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::health::{
    sort_newest_first, DetailedEntry, EntryKind, HealthTrend, MetricRecord,
};
use crate::ports::{HealthRecordReader, HealthRecordWriter};

#[derive(Debug, Clone, Default)]
struct Records {
    metrics: Vec<MetricRecord>,
    entries: Vec<DetailedEntry>,
    trends: Vec<HealthTrend>,
}

/// In-memory implementation of both health record ports.
#[derive(Debug, Clone)]
pub struct InMemoryHealthStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryHealthStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Records::default())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        *self.records.write().await = Records::default();
    }

    pub async fn metric_count(&self) -> usize {
        self.records.read().await.metrics.len()
    }

    pub async fn entry_count(&self) -> usize {
        self.records.read().await.entries.len()
    }
}

impl Default for InMemoryHealthStore {
    fn default() -> Self {
        Self::new()
    }
}

fn take_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

#[async_trait]
impl HealthRecordReader for InMemoryHealthStore {
    async fn list_metrics(
        &self,
        user_id: &UserId,
        metric_type: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<MetricRecord>, DomainError> {
        let records = self.records.read().await;
        let mut metrics: Vec<MetricRecord> = records
            .metrics
            .iter()
            .filter(|m| &m.user_id == user_id)
            .filter(|m| metric_type.map_or(true, |t| m.is_type(t)))
            .cloned()
            .collect();
        sort_newest_first(&mut metrics, |m| m.timestamp);
        Ok(take_limit(metrics, limit))
    }

    async fn list_detailed_entries(
        &self,
        user_id: &UserId,
        kind: Option<EntryKind>,
        limit: Option<usize>,
    ) -> Result<Vec<DetailedEntry>, DomainError> {
        let records = self.records.read().await;
        let mut entries: Vec<DetailedEntry> = records
            .entries
            .iter()
            .filter(|e| &e.user_id == user_id)
            .filter(|e| kind.map_or(true, |k| e.kind() == k))
            .cloned()
            .collect();
        sort_newest_first(&mut entries, |e| e.timestamp);
        Ok(take_limit(entries, limit))
    }

    async fn list_trends(
        &self,
        user_id: &UserId,
        metric_type: Option<&str>,
    ) -> Result<Vec<HealthTrend>, DomainError> {
        let records = self.records.read().await;
        let mut trends: Vec<HealthTrend> = records
            .trends
            .iter()
            .filter(|t| &t.user_id == user_id)
            .filter(|t| metric_type.map_or(true, |mt| t.metric_type == mt))
            .cloned()
            .collect();
        sort_newest_first(&mut trends, |t| t.created_at);
        Ok(trends)
    }
}

#[async_trait]
impl HealthRecordWriter for InMemoryHealthStore {
    async fn save_metric(&self, metric: &MetricRecord) -> Result<(), DomainError> {
        self.records.write().await.metrics.push(metric.clone());
        Ok(())
    }

    async fn save_detailed_entry(&self, entry: &DetailedEntry) -> Result<(), DomainError> {
        self.records.write().await.entries.push(entry.clone());
        Ok(())
    }

    async fn save_trend(&self, trend: &HealthTrend) -> Result<(), DomainError> {
        self.records.write().await.trends.push(trend.clone());
        Ok(())
    }
}
