//! Insight repository port.
//!
//! `InsightSink` is the write side the generation flow hands its batch to.
//! `InsightRepository` adds the queries and the read/favorite toggles.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InsightId, Timestamp, UserId};
use crate::domain::insights::{Insight, InsightCategory, InsightType, Priority};

/// Receives freshly generated insights.
#[async_trait]
pub trait InsightSink: Send + Sync {
    /// Appends insights and returns how many were stored.
    ///
    /// Implementations may skip insights whose content key already exists
    /// for the same user.
    async fn save_batch(&self, insights: &[Insight]) -> Result<usize, DomainError>;
}

#[async_trait]
pub trait InsightRepository: InsightSink {
    /// Lists a user's insights matching the filter, newest first.
    async fn list(
        &self,
        user_id: &UserId,
        filter: &InsightFilter,
    ) -> Result<Vec<Insight>, DomainError>;

    /// Finds a single insight.
    async fn get(&self, id: &InsightId) -> Result<Option<Insight>, DomainError>;

    /// Marks an insight read. Idempotent.
    async fn mark_read(&self, id: &InsightId) -> Result<Insight, DomainError>;

    /// Flips the favorite flag and returns the updated insight.
    async fn toggle_favorite(&self, id: &InsightId) -> Result<Insight, DomainError>;
}

/// Optional criteria for listing insights. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightFilter {
    pub insight_type: Option<InsightType>,
    pub category: Option<InsightCategory>,
    pub priority: Option<Priority>,
    pub is_read: Option<bool>,
    /// Inclusive range on `created_at`.
    pub created_between: Option<(Timestamp, Timestamp)>,
}

impl InsightFilter {
    pub fn unread() -> Self {
        Self {
            is_read: Some(false),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: InsightCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_type(mut self, insight_type: InsightType) -> Self {
        self.insight_type = Some(insight_type);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn created_between(mut self, from: Timestamp, to: Timestamp) -> Self {
        self.created_between = Some((from, to));
        self
    }

    pub fn matches(&self, insight: &Insight) -> bool {
        self.insight_type.map_or(true, |t| insight.insight_type == t)
            && self.category.map_or(true, |c| insight.category == c)
            && self.priority.map_or(true, |p| insight.priority == p)
            && self.is_read.map_or(true, |r| insight.is_read == r)
            && self.created_between.map_or(true, |(from, to)| {
                !insight.created_at.is_before(&from) && !insight.created_at.is_after(&to)
            })
    }
}
