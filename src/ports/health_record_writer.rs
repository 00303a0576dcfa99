//! Health record writer port. Append-only.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::health::{DetailedEntry, HealthTrend, MetricRecord};

#[async_trait]
pub trait HealthRecordWriter: Send + Sync {
    async fn save_metric(&self, metric: &MetricRecord) -> Result<(), DomainError>;

    async fn save_detailed_entry(&self, entry: &DetailedEntry) -> Result<(), DomainError>;

    async fn save_trend(&self, trend: &HealthTrend) -> Result<(), DomainError>;
}
