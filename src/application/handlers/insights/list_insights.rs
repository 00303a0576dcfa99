//! ListInsightsHandler - Query handler for a user's stored insights.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::insights::Insight;
use crate::ports::{InsightFilter, InsightRepository};

#[derive(Debug, Clone)]
pub struct ListInsightsQuery {
    pub user_id: UserId,
    pub filter: InsightFilter,
    /// Maximum number returned, newest first.
    pub limit: Option<usize>,
}

pub struct ListInsightsHandler {
    repository: Arc<dyn InsightRepository>,
}

impl ListInsightsHandler {
    pub fn new(repository: Arc<dyn InsightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListInsightsQuery) -> Result<Vec<Insight>, DomainError> {
        let mut insights = self.repository.list(&query.user_id, &query.filter).await?;
        if let Some(limit) = query.limit {
            insights.truncate(limit);
        }
        Ok(insights)
    }
}
