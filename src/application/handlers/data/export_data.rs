//! ExportDataHandler - Gathers a user's data into a snapshot and stores it.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{
    DataSnapshot, HealthRecordReader, InsightFilter, InsightRepository, ProfileRepository,
    SnapshotStore,
};

#[derive(Debug, Clone)]
pub struct ExportDataCommand {
    pub user_id: UserId,
}

pub struct ExportDataHandler {
    profiles: Arc<dyn ProfileRepository>,
    reader: Arc<dyn HealthRecordReader>,
    insights: Arc<dyn InsightRepository>,
    store: Arc<dyn SnapshotStore>,
}

impl ExportDataHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        reader: Arc<dyn HealthRecordReader>,
        insights: Arc<dyn InsightRepository>,
        store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            profiles,
            reader,
            insights,
            store,
        }
    }

    /// Writes the snapshot and returns it.
    pub async fn handle(&self, cmd: ExportDataCommand) -> Result<DataSnapshot, DomainError> {
        let user_id = &cmd.user_id;
        let mut snapshot = DataSnapshot::new(Timestamp::now());
        snapshot.profile = self.profiles.get(user_id).await?;
        snapshot.insights = self.insights.list(user_id, &InsightFilter::default()).await?;
        snapshot.metric_history = self.reader.list_metrics(user_id, None, None).await?;
        snapshot.detailed_data = self.reader.list_detailed_entries(user_id, None, None).await?;
        snapshot.trends = self.reader.list_trends(user_id, None).await?;

        self.store.save(&snapshot).await?;

        info!(user_id = %user_id, records = snapshot.record_count(), "Exported user data");
        Ok(snapshot)
    }
}
