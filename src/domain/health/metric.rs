//! Scalar health metrics - an append-only time series.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp, UserId};

/// Well-known metric type names.
pub mod metric_types {
    pub const WEIGHT: &str = "weight";
    pub const BLOOD_PRESSURE: &str = "blood_pressure";
    pub const HEART_RATE: &str = "heart_rate";
    pub const BLOOD_SUGAR: &str = "blood_sugar";
}

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Manual,
    Voice,
    Device,
    Imported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Circumstances of a measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementContext {
    pub before_meal: Option<bool>,
    pub after_exercise: Option<bool>,
    pub time_of_day: Option<TimeOfDay>,
    pub mood: Option<String>,
}

/// A single scalar measurement.
///
/// Duplicate timestamps are legal and represent repeated measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default)]
    pub id: RecordId,
    pub user_id: UserId,
    pub metric_type: String,
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub source: DataSource,
    #[serde(default)]
    pub context: Option<MeasurementContext>,
}

impl MetricRecord {
    /// Creates a manually entered metric with a fresh id.
    pub fn new(
        user_id: UserId,
        metric_type: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            user_id,
            metric_type: metric_type.into(),
            value,
            unit: unit.into(),
            notes: None,
            timestamp,
            source: DataSource::Manual,
            context: None,
        }
    }

    /// Returns true if this record is of the given metric type.
    pub fn is_type(&self, metric_type: &str) -> bool {
        self.metric_type == metric_type
    }
}
