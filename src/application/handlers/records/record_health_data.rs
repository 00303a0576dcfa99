//! RecordHealthDataHandler - Command handler for appending health records.
//!
//! Validates a metric, detailed entry or trend and appends it through the
//! writer port. Records are never edited after they are written.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::health::{DetailedEntry, HealthTrend, MetricRecord};
use crate::ports::HealthRecordWriter;

/// One record to append.
#[derive(Debug, Clone)]
pub enum RecordHealthDataCommand {
    Metric(MetricRecord),
    Entry(DetailedEntry),
    Trend(HealthTrend),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHealthDataResult {
    pub record_id: RecordId,
}

pub struct RecordHealthDataHandler {
    writer: Arc<dyn HealthRecordWriter>,
}

impl RecordHealthDataHandler {
    pub fn new(writer: Arc<dyn HealthRecordWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: RecordHealthDataCommand,
    ) -> Result<RecordHealthDataResult, DomainError> {
        match cmd {
            RecordHealthDataCommand::Metric(metric) => {
                if metric.metric_type.trim().is_empty() {
                    return Err(DomainError::validation("metric_type", "Metric type is required"));
                }
                if !metric.value.is_finite() {
                    return Err(DomainError::validation(
                        "value",
                        format!("Metric value must be a finite number, got {}", metric.value),
                    ));
                }
                self.writer.save_metric(&metric).await?;
                debug!(
                    user_id = %metric.user_id,
                    metric_type = %metric.metric_type,
                    "Metric recorded"
                );
                Ok(RecordHealthDataResult { record_id: metric.id })
            }
            RecordHealthDataCommand::Entry(entry) => {
                entry
                    .validate()
                    .map_err(|e| DomainError::validation(e.field(), e.to_string()))?;
                self.writer.save_detailed_entry(&entry).await?;
                debug!(user_id = %entry.user_id, kind = %entry.kind(), "Detailed entry recorded");
                Ok(RecordHealthDataResult { record_id: entry.id })
            }
            RecordHealthDataCommand::Trend(trend) => {
                if !trend.change_percent.is_finite() {
                    return Err(DomainError::validation(
                        "change_percent",
                        "Trend change must be a finite number",
                    ));
                }
                self.writer.save_trend(&trend).await?;
                debug!(
                    user_id = %trend.user_id,
                    metric_type = %trend.metric_type,
                    "Trend recorded"
                );
                Ok(RecordHealthDataResult { record_id: trend.id })
            }
        }
    }
}
