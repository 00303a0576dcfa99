//! Insight - the engine's output record.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::domain::foundation::{Confidence, InsightId, Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Recommendation,
    Warning,
    Achievement,
    Educational,
    Trend,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Recommendation => "recommendation",
            InsightType::Warning => "warning",
            InsightType::Achievement => "achievement",
            InsightType::Educational => "educational",
            InsightType::Trend => "trend",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Nutrition,
    Exercise,
    Sleep,
    MentalHealth,
    PreventiveCare,
    Medication,
    General,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Nutrition => "nutrition",
            InsightCategory::Exercise => "exercise",
            InsightCategory::Sleep => "sleep",
            InsightCategory::MentalHealth => "mental-health",
            InsightCategory::PreventiveCare => "preventive-care",
            InsightCategory::Medication => "medication",
            InsightCategory::General => "general",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of an insight. Orders most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// What an analyzer produces: the analytical content of an insight, before
/// the engine assigns identity and ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightDraft {
    pub insight_type: InsightType,
    pub title: String,
    pub content: String,
    pub category: InsightCategory,
    pub priority: Priority,
    pub confidence: Confidence,
    pub data_points: Vec<String>,
    pub action_items: Vec<String>,
    pub tags: Vec<String>,
}

impl InsightDraft {
    pub fn new(
        insight_type: InsightType,
        category: InsightCategory,
        priority: Priority,
        confidence: f64,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            title: title.into(),
            content: content.into(),
            category,
            priority,
            confidence: Confidence::new(confidence),
            data_points: Vec::new(),
            action_items: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_data_points(mut self, points: &[&str]) -> Self {
        self.data_points = to_strings(points);
        self
    }

    pub fn with_action_items(mut self, items: &[&str]) -> Self {
        self.action_items = to_strings(items);
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = to_strings(tags);
        self
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// A structured, natural-language health observation.
///
/// Immutable once created, except for `is_read` / `is_favorited`, which the
/// insight repository toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    pub user_id: UserId,
    pub insight_type: InsightType,
    pub title: String,
    pub content: String,
    pub category: InsightCategory,
    pub priority: Priority,
    pub confidence: Confidence,
    pub data_points: Vec<String>,
    pub action_items: Vec<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_insights: Vec<InsightId>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_favorited: bool,
}

impl Insight {
    /// Stamps a draft with a fresh id, its owner, and creation time.
    pub fn from_draft(draft: InsightDraft, user_id: UserId, created_at: Timestamp) -> Self {
        Self {
            id: InsightId::new(),
            user_id,
            insight_type: draft.insight_type,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            priority: draft.priority,
            confidence: draft.confidence,
            data_points: draft.data_points,
            action_items: draft.action_items,
            created_at,
            expires_at: None,
            tags: draft.tags,
            related_insights: Vec::new(),
            is_read: false,
            is_favorited: false,
        }
    }

    /// Hex SHA-256 of type, category and title.
    ///
    /// Two insights with the same key say the same thing; repositories can
    /// use it to avoid piling up repeats across generation passes.
    pub fn content_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.insight_type.as_str().as_bytes());
        hasher.update(b"|");
        hasher.update(self.category.as_str().as_bytes());
        hasher.update(b"|");
        hasher.update(self.title.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }
}
