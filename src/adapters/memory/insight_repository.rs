//! In-memory insight repository.
//!
//! Append-only by default. With deduplication enabled, an insight whose
//! content key already exists for the same user is skipped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, InsightId, UserId};
use crate::domain::insights::Insight;
use crate::ports::{InsightFilter, InsightRepository, InsightSink};

#[derive(Debug, Clone)]
pub struct InMemoryInsightRepository {
    insights: Arc<RwLock<Vec<Insight>>>,
    deduplicate: bool,
}

impl InMemoryInsightRepository {
    pub fn new() -> Self {
        Self {
            insights: Arc::new(RwLock::new(Vec::new())),
            deduplicate: false,
        }
    }

    /// Skip insights that repeat an existing one's type, category and title.
    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub async fn len(&self) -> usize {
        self.insights.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.insights.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.insights.write().await.clear();
    }

    async fn update<F>(&self, id: &InsightId, change: F) -> Result<Insight, DomainError>
    where
        F: FnOnce(&mut Insight) + Send,
    {
        let mut insights = self.insights.write().await;
        let insight = insights.iter_mut().find(|i| &i.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::InsightNotFound, format!("Insight not found: {}", id))
        })?;
        change(insight);
        Ok(insight.clone())
    }
}

impl Default for InMemoryInsightRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightSink for InMemoryInsightRepository {
    async fn save_batch(&self, batch: &[Insight]) -> Result<usize, DomainError> {
        let mut insights = self.insights.write().await;
        if !self.deduplicate {
            insights.extend_from_slice(batch);
            return Ok(batch.len());
        }

        let mut known: HashMap<UserId, Vec<String>> = HashMap::new();
        for existing in insights.iter() {
            known
                .entry(existing.user_id.clone())
                .or_default()
                .push(existing.content_key());
        }

        let mut saved = 0;
        for insight in batch {
            let keys = known.entry(insight.user_id.clone()).or_default();
            let key = insight.content_key();
            if keys.contains(&key) {
                debug!(title = %insight.title, "Skipping duplicate insight");
                continue;
            }
            keys.push(key);
            insights.push(insight.clone());
            saved += 1;
        }
        Ok(saved)
    }
}

#[async_trait]
impl InsightRepository for InMemoryInsightRepository {
    async fn list(
        &self,
        user_id: &UserId,
        filter: &InsightFilter,
    ) -> Result<Vec<Insight>, DomainError> {
        let insights = self.insights.read().await;
        let mut matching: Vec<Insight> = insights
            .iter()
            .filter(|i| &i.user_id == user_id && filter.matches(i))
            .cloned()
            .collect();
        // Stable, so a batch keeps its analyzer order.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn get(&self, id: &InsightId) -> Result<Option<Insight>, DomainError> {
        Ok(self.insights.read().await.iter().find(|i| &i.id == id).cloned())
    }

    async fn mark_read(&self, id: &InsightId) -> Result<Insight, DomainError> {
        self.update(id, |i| i.is_read = true).await
    }

    async fn toggle_favorite(&self, id: &InsightId) -> Result<Insight, DomainError> {
        self.update(id, |i| i.is_favorited = !i.is_favorited).await
    }
}
