//! Health module - The user's profile and longitudinal health records.
//!
//! # Components
//!
//! - `Profile` - Identity, physical and lifestyle attributes
//! - `MetricRecord` - Flat scalar time series (weight, blood pressure, ...)
//! - `DetailedEntry` - Timestamped, domain-tagged rich payloads (`HealthData`)
//! - `HealthTrend` - Externally computed directional summary of a metric

mod entry;
mod metric;
mod profile;
mod trend;

pub use entry::{
    Activity, BloodPressure, DetailedEntry, EntryKind, ExerciseData, FoodItem, HealthData,
    Intensity, Macros, Meal, MealType, MedicationData, MedicationDose, NutritionData, SleepData,
    SleepStages, Symptom, SymptomData, VitalData,
};
pub use metric::{metric_types, DataSource, MeasurementContext, MetricRecord, TimeOfDay};
pub use profile::{
    ActivityLevel, AlcoholConsumption, DietType, EmergencyContact, Gender, Lifestyle, Profile,
    ProfileUpdate, SmokingStatus,
};
pub use trend::{HealthTrend, Significance, TrendDirection};

use super::foundation::Timestamp;

/// Orders records newest first, keeping insertion order for equal timestamps.
pub(crate) fn sort_newest_first<T, F>(records: &mut [T], timestamp: F)
where
    F: Fn(&T) -> Timestamp,
{
    records.sort_by(|a, b| timestamp(b).cmp(&timestamp(a)));
}
