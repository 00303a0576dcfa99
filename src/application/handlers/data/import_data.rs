//! ImportDataHandler - Loads a snapshot and writes it back through the ports.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{
    HealthRecordWriter, InsightRepository, ProfileRepository, SnapshotStore, SNAPSHOT_VERSION,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDataResult {
    /// Owner of the imported profile, if the snapshot had one.
    pub profile_id: Option<UserId>,
    pub insights: usize,
    pub metrics: usize,
    pub entries: usize,
    pub trends: usize,
}

pub struct ImportDataHandler {
    store: Arc<dyn SnapshotStore>,
    profiles: Arc<dyn ProfileRepository>,
    writer: Arc<dyn HealthRecordWriter>,
    insights: Arc<dyn InsightRepository>,
}

impl ImportDataHandler {
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        profiles: Arc<dyn ProfileRepository>,
        writer: Arc<dyn HealthRecordWriter>,
        insights: Arc<dyn InsightRepository>,
    ) -> Self {
        Self {
            store,
            profiles,
            writer,
            insights,
        }
    }

    pub async fn handle(&self) -> Result<ImportDataResult, DomainError> {
        let snapshot = self.store.load().await?;
        if snapshot.version != SNAPSHOT_VERSION {
            warn!(
                version = %snapshot.version,
                expected = SNAPSHOT_VERSION,
                "Importing snapshot with a different format version"
            );
        }

        let mut result = ImportDataResult::default();
        if let Some(profile) = &snapshot.profile {
            self.profiles.save(profile).await?;
            result.profile_id = Some(profile.id.clone());
        }
        for metric in &snapshot.metric_history {
            self.writer.save_metric(metric).await?;
        }
        for entry in &snapshot.detailed_data {
            self.writer.save_detailed_entry(entry).await?;
        }
        for trend in &snapshot.trends {
            self.writer.save_trend(trend).await?;
        }
        result.insights = self.insights.save_batch(&snapshot.insights).await?;
        result.metrics = snapshot.metric_history.len();
        result.entries = snapshot.detailed_data.len();
        result.trends = snapshot.trends.len();

        info!(
            profile = result.profile_id.is_some(),
            insights = result.insights,
            metrics = result.metrics,
            entries = result.entries,
            trends = result.trends,
            "Imported user data"
        );
        Ok(result)
    }
}
