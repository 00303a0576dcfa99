//! Command handlers for the per-insight read and favorite flags.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{DomainError, InsightId};
use crate::domain::insights::Insight;
use crate::ports::InsightRepository;

#[derive(Debug, Clone)]
pub struct MarkInsightReadCommand {
    pub insight_id: InsightId,
}

pub struct MarkInsightReadHandler {
    repository: Arc<dyn InsightRepository>,
}

impl MarkInsightReadHandler {
    pub fn new(repository: Arc<dyn InsightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: MarkInsightReadCommand) -> Result<Insight, DomainError> {
        let insight = self.repository.mark_read(&cmd.insight_id).await?;
        debug!(insight_id = %cmd.insight_id, "Insight marked read");
        Ok(insight)
    }
}

#[derive(Debug, Clone)]
pub struct ToggleInsightFavoriteCommand {
    pub insight_id: InsightId,
}

pub struct ToggleInsightFavoriteHandler {
    repository: Arc<dyn InsightRepository>,
}

impl ToggleInsightFavoriteHandler {
    pub fn new(repository: Arc<dyn InsightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ToggleInsightFavoriteCommand) -> Result<Insight, DomainError> {
        let insight = self.repository.toggle_favorite(&cmd.insight_id).await?;
        debug!(
            insight_id = %cmd.insight_id,
            is_favorited = insight.is_favorited,
            "Insight favorite toggled"
        );
        Ok(insight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryInsightRepository;
    use crate::domain::foundation::{ErrorCode, Timestamp, UserId};
    use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};
    use crate::ports::InsightSink;

    async fn seeded() -> (Arc<InMemoryInsightRepository>, InsightId) {
        let repo = Arc::new(InMemoryInsightRepository::new());
        let insight = Insight::from_draft(
            InsightDraft::new(
                InsightType::Achievement,
                InsightCategory::Exercise,
                Priority::Low,
                0.9,
                "Nice",
                "Well done",
            ),
            UserId::new("user-1").unwrap(),
            Timestamp::now(),
        );
        let id = insight.id;
        repo.save_batch(&[insight]).await.unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn mark_read_sets_flag() {
        let (repo, id) = seeded().await;
        let insight = MarkInsightReadHandler::new(repo)
            .handle(MarkInsightReadCommand { insight_id: id })
            .await
            .unwrap();
        assert!(insight.is_read);
    }

    #[tokio::test]
    async fn toggle_favorite_flips_each_time() {
        let (repo, id) = seeded().await;
        let handler = ToggleInsightFavoriteHandler::new(repo);

        let first = handler
            .handle(ToggleInsightFavoriteCommand { insight_id: id })
            .await
            .unwrap();
        let second = handler
            .handle(ToggleInsightFavoriteCommand { insight_id: id })
            .await
            .unwrap();

        assert!(first.is_favorited);
        assert!(!second.is_favorited);
    }

    #[tokio::test]
    async fn unknown_insight_is_not_found() {
        let (repo, _) = seeded().await;
        let err = MarkInsightReadHandler::new(repo)
            .handle(MarkInsightReadCommand {
                insight_id: InsightId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsightNotFound);
    }
}
