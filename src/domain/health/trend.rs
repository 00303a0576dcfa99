//! Precomputed metric trends, supplied from outside the engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    Fluctuating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Low,
    Medium,
    High,
}

/// Directional summary of a metric's recent trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTrend {
    #[serde(default)]
    pub id: RecordId,
    pub user_id: UserId,
    pub metric_type: String,
    pub trend: TrendDirection,
    pub change_percent: f64,
    /// Human-readable window, e.g. "30 days".
    #[serde(default)]
    pub timeframe: String,
    pub significance: Significance,
    pub created_at: Timestamp,
}
