//! GenerateInsightsHandler - Command handler for an insight generation pass.
//!
//! Reads the profile and recent history through the ports, runs the
//! engine, and hands the batch to the insight repository.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::health::{DetailedEntry, HealthTrend, MetricRecord};
use crate::domain::insights::{AnalyzerDiagnostic, Insight, InsightEngine};
use crate::ports::{HealthRecordReader, InsightRepository, ProfileRepository};

/// Detailed entries read per pass unless configured otherwise.
pub const DEFAULT_HISTORY_WINDOW: usize = 30;
/// Metrics read per pass unless configured otherwise. Only the newest ten
/// metrics of any type feed the weight trend and blood pressure rules.
pub const DEFAULT_METRIC_WINDOW: usize = 10;

/// Command to generate insights for one user.
#[derive(Debug, Clone)]
pub struct GenerateInsightsCommand {
    pub user_id: UserId,
    /// Evaluation time; `None` means now.
    pub as_of: Option<Timestamp>,
}

impl GenerateInsightsCommand {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, as_of: None }
    }

    pub fn as_of(mut self, at: Timestamp) -> Self {
        self.as_of = Some(at);
        self
    }
}

/// Result of a generation pass.
#[derive(Debug, Clone)]
pub struct GenerateInsightsResult {
    pub insights: Vec<Insight>,
    /// How many the repository actually stored.
    pub saved: usize,
    pub diagnostics: Vec<AnalyzerDiagnostic>,
}

pub struct GenerateInsightsHandler {
    profiles: Arc<dyn ProfileRepository>,
    reader: Arc<dyn HealthRecordReader>,
    insights: Arc<dyn InsightRepository>,
    engine: Arc<InsightEngine>,
    history_window: usize,
    metric_window: usize,
}

impl GenerateInsightsHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        reader: Arc<dyn HealthRecordReader>,
        insights: Arc<dyn InsightRepository>,
        engine: Arc<InsightEngine>,
    ) -> Self {
        Self {
            profiles,
            reader,
            insights,
            engine,
            history_window: DEFAULT_HISTORY_WINDOW,
            metric_window: DEFAULT_METRIC_WINDOW,
        }
    }

    pub fn with_windows(mut self, history_window: usize, metric_window: usize) -> Self {
        self.history_window = history_window;
        self.metric_window = metric_window;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateInsightsCommand,
    ) -> Result<GenerateInsightsResult, DomainError> {
        let profile = self.profiles.get(&cmd.user_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", cmd.user_id),
            )
        })?;

        let (metrics, entries, trends) = self.read_history(&cmd.user_id).await;
        let now = cmd.as_of.unwrap_or_else(Timestamp::now);

        let batch = self
            .engine
            .generate_insights_at(&profile, &metrics, &entries, &trends, now);
        let saved = self.insights.save_batch(&batch.insights).await?;

        info!(
            user_id = %cmd.user_id,
            generated = batch.insights.len(),
            saved,
            failed_analyzers = batch.diagnostics.len(),
            "Generated insights"
        );

        Ok(GenerateInsightsResult {
            insights: batch.insights,
            saved,
            diagnostics: batch.diagnostics,
        })
    }

    /// Reads history; an unavailable source counts as empty.
    async fn read_history(
        &self,
        user_id: &UserId,
    ) -> (Vec<MetricRecord>, Vec<DetailedEntry>, Vec<HealthTrend>) {
        let metrics = self
            .reader
            .list_metrics(user_id, None, Some(self.metric_window))
            .await
            .unwrap_or_else(|err| {
                warn!(user_id = %user_id, error = %err, "Metric history unavailable");
                Vec::new()
            });
        let entries = self
            .reader
            .list_detailed_entries(user_id, None, Some(self.history_window))
            .await
            .unwrap_or_else(|err| {
                warn!(user_id = %user_id, error = %err, "Detailed history unavailable");
                Vec::new()
            });
        let trends = self
            .reader
            .list_trends(user_id, None)
            .await
            .unwrap_or_else(|err| {
                warn!(user_id = %user_id, error = %err, "Trends unavailable");
                Vec::new()
            });
        (metrics, entries, trends)
    }
}
