//! Analyzers - one pure rule set per health domain.
//!
//! Each analyzer reads only the records of its own domain from an
//! [`AnalysisContext`] and returns zero or more [`InsightDraft`]s. Too little
//! data is not an error: the analyzer simply returns nothing. Malformed data
//! is an error, which the engine isolates to the failing analyzer.

mod exercise;
mod medication;
mod nutrition;
mod preventive_care;
mod sleep;
mod stress;
mod vitals;
mod weight;

pub use exercise::ExerciseAnalyzer;
pub use medication::MedicationAdherenceAnalyzer;
pub use nutrition::NutritionAnalyzer;
pub use preventive_care::PreventiveCareAnalyzer;
pub use sleep::SleepAnalyzer;
pub use stress::StressMoodAnalyzer;
pub use vitals::VitalsAnalyzer;
pub use weight::WeightAnalyzer;

use thiserror::Error;

use super::InsightDraft;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::health::{
    DetailedEntry, EntryKind, HealthData, HealthTrend, MetricRecord, Profile,
};

/// Why an analyzer could not produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    #[error("Profile is not usable: {0}")]
    InvalidProfile(#[from] ValidationError),

    #[error("Malformed {kind} entry: {reason}")]
    MalformedEntry { kind: EntryKind, reason: String },

    #[error("Computed {quantity} is not a finite number")]
    NonFiniteResult { quantity: &'static str },
}

impl AnalyzerError {
    pub fn malformed(kind: EntryKind, reason: impl Into<String>) -> Self {
        AnalyzerError::MalformedEntry {
            kind,
            reason: reason.into(),
        }
    }
}

/// A rule set for one health domain.
pub trait Analyzer: Send + Sync {
    /// Short stable name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Evaluates the rules against the context.
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError>;
}

/// The eight analyzers in their canonical order.
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(WeightAnalyzer),
        Box::new(SleepAnalyzer),
        Box::new(NutritionAnalyzer),
        Box::new(ExerciseAnalyzer),
        Box::new(VitalsAnalyzer),
        Box::new(PreventiveCareAnalyzer),
        Box::new(MedicationAdherenceAnalyzer),
        Box::new(StressMoodAnalyzer),
    ]
}

/// Read-only view of one evaluation pass.
///
/// Metrics and entries are held newest first.
pub struct AnalysisContext<'a> {
    profile: &'a Profile,
    profile_error: Option<ValidationError>,
    metrics: Vec<&'a MetricRecord>,
    entries: Vec<&'a DetailedEntry>,
    trends: &'a [HealthTrend],
    now: Timestamp,
}

impl<'a> AnalysisContext<'a> {
    /// Builds a context, ordering metrics and entries newest first and
    /// validating the profile once for all analyzers.
    pub fn new(
        profile: &'a Profile,
        metrics: &'a [MetricRecord],
        entries: &'a [DetailedEntry],
        trends: &'a [HealthTrend],
        now: Timestamp,
    ) -> Self {
        let mut metrics: Vec<&MetricRecord> = metrics.iter().collect();
        crate::domain::health::sort_newest_first(&mut metrics, |m| m.timestamp);

        let mut entries: Vec<&DetailedEntry> = entries.iter().collect();
        crate::domain::health::sort_newest_first(&mut entries, |e| e.timestamp);

        Self {
            profile,
            profile_error: profile.validate(&now).err(),
            metrics,
            entries,
            trends,
            now,
        }
    }

    /// The profile, or the reason it cannot be used for numeric rules.
    pub fn profile(&self) -> Result<&'a Profile, AnalyzerError> {
        match &self.profile_error {
            Some(err) => Err(AnalyzerError::InvalidProfile(err.clone())),
            None => Ok(self.profile),
        }
    }

    /// The profile without validation, for rules that only read lists.
    pub fn raw_profile(&self) -> &'a Profile {
        self.profile
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn trends(&self) -> &'a [HealthTrend] {
        self.trends
    }

    /// The `limit` most recent metrics of one type.
    pub fn recent_metrics(&self, metric_type: &str, limit: usize) -> Vec<&'a MetricRecord> {
        self.metrics
            .iter()
            .copied()
            .filter(|m| m.is_type(metric_type))
            .take(limit)
            .collect()
    }

    /// Payloads of the `limit` most recent entries that `extract` accepts.
    ///
    /// Pass one of the `HealthData::as_*` accessors.
    pub fn recent_payloads<T, F>(&self, limit: usize, extract: F) -> Vec<&'a T>
    where
        F: Fn(&'a HealthData) -> Option<&'a T>,
    {
        self.entries
            .iter()
            .copied()
            .filter_map(|e| extract(&e.data))
            .take(limit)
            .collect()
    }
}

/// Arithmetic mean; `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Rejects NaN and infinities so they never reach an insight's text.
pub(crate) fn ensure_finite(value: f64, quantity: &'static str) -> Result<f64, AnalyzerError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyzerError::NonFiniteResult { quantity })
    }
}

/// Checks a 1-5 self-assessment score.
pub(crate) fn ensure_scale(kind: EntryKind, field: &str, value: u8) -> Result<f64, AnalyzerError> {
    if (1..=5).contains(&value) {
        Ok(f64::from(value))
    } else {
        Err(AnalyzerError::malformed(
            kind,
            format!("{} must be between 1 and 5, got {}", field, value),
        ))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Builders shared by the analyzer tests.

    use chrono::NaiveDate;

    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::health::*;

    pub fn now() -> Timestamp {
        Timestamp::parse("2024-06-01T12:00:00Z").unwrap()
    }

    pub fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    /// A 30-year-old, 170 cm / 65 kg (BMI ~22.5) profile that triggers nothing.
    pub fn neutral_profile() -> Profile {
        Profile::new(user(), NaiveDate::from_ymd_opt(1994, 5, 5).unwrap(), 170.0, 65.0)
    }

    pub fn days_ago(days: i64) -> Timestamp {
        now().minus_days(days)
    }

    pub fn metric(metric_type: &str, value: f64, days: i64) -> MetricRecord {
        MetricRecord::new(user(), metric_type, value, "unit", days_ago(days))
    }

    pub fn entry(data: HealthData, days: i64) -> DetailedEntry {
        DetailedEntry::new(user(), days_ago(days), data)
    }

    pub fn sleep(hours: f64, quality: u8, days: i64) -> DetailedEntry {
        entry(
            HealthData::Sleep(SleepData {
                bedtime: "23:00".to_string(),
                wake_time: "06:00".to_string(),
                total_sleep_hours: hours,
                sleep_quality: quality,
                sleep_stages: None,
                sleep_disturbances: vec![],
            }),
            days,
        )
    }

    pub fn nutrition(meals: usize, water_ml: f64, days: i64) -> DetailedEntry {
        let meal = Meal {
            meal_type: MealType::Lunch,
            foods: vec![],
            time: "12:00".to_string(),
        };
        entry(
            HealthData::Nutrition(NutritionData {
                meals: vec![meal; meals],
                water_intake_ml: water_ml,
                supplements: vec![],
            }),
            days,
        )
    }

    pub fn exercise(minutes: &[f64], days: i64) -> DetailedEntry {
        entry(
            HealthData::Exercise(ExerciseData {
                activities: minutes
                    .iter()
                    .map(|m| Activity::new("Walking", *m, Intensity::Moderate))
                    .collect(),
                steps: 5000,
                active_minutes: 20,
            }),
            days,
        )
    }

    pub fn symptoms(mood: u8, energy: u8, stress: u8, days: i64) -> DetailedEntry {
        entry(
            HealthData::Symptoms(SymptomData {
                symptoms: vec![],
                mood,
                energy_level: energy,
                stress_level: stress,
            }),
            days,
        )
    }

    pub fn medication(adherence: &[bool], days: i64) -> DetailedEntry {
        entry(
            HealthData::Medication(MedicationData {
                medications: adherence
                    .iter()
                    .enumerate()
                    .map(|(i, taken)| MedicationDose::new(format!("Med {}", i), "10mg", *taken))
                    .collect(),
            }),
            days,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::health::metric_types;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn mean_averages_values() {
        assert_eq!(mean(vec![1.0, 2.0, 6.0]), Some(3.0));
    }

    #[test]
    fn ensure_finite_rejects_nan() {
        assert!(ensure_finite(f64::NAN, "x").is_err());
        assert_eq!(ensure_finite(2.5, "x"), Ok(2.5));
    }

    #[test]
    fn ensure_scale_accepts_one_to_five() {
        assert!(ensure_scale(EntryKind::Sleep, "q", 0).is_err());
        assert!(ensure_scale(EntryKind::Sleep, "q", 6).is_err());
        assert_eq!(ensure_scale(EntryKind::Sleep, "q", 5), Ok(5.0));
    }

    #[test]
    fn context_orders_metrics_newest_first() {
        let profile = neutral_profile();
        let metrics = vec![
            metric(metric_types::WEIGHT, 70.0, 5),
            metric(metric_types::WEIGHT, 71.0, 1),
            metric(metric_types::BLOOD_PRESSURE, 120.0, 0),
            metric(metric_types::WEIGHT, 72.0, 3),
        ];
        let ctx = AnalysisContext::new(&profile, &metrics, &[], &[], now());

        let values: Vec<f64> = ctx
            .recent_metrics(metric_types::WEIGHT, 10)
            .iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![71.0, 72.0, 70.0]);
    }

    #[test]
    fn context_filters_by_type_before_limiting() {
        let profile = neutral_profile();
        let entries = vec![
            sleep(6.0, 3, 0),
            nutrition(3, 2000.0, 0),
            sleep(7.0, 3, 1),
            nutrition(3, 2000.0, 1),
            sleep(8.0, 3, 2),
        ];
        let ctx = AnalysisContext::new(&profile, &[], &entries, &[], now());

        let hours: Vec<f64> = ctx
            .recent_payloads(2, HealthData::as_sleep)
            .iter()
            .map(|s| s.total_sleep_hours)
            .collect();
        assert_eq!(hours, vec![6.0, 7.0]);
    }

    #[test]
    fn context_reports_invalid_profile() {
        let mut profile = neutral_profile();
        profile.height_cm = 0.0;
        let ctx = AnalysisContext::new(&profile, &[], &[], &[], now());

        assert!(matches!(ctx.profile(), Err(AnalyzerError::InvalidProfile(_))));
        assert_eq!(ctx.raw_profile().height_cm, 0.0);
    }

    #[test]
    fn default_analyzers_cover_eight_domains() {
        let names: Vec<&str> = default_analyzers().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "weight",
                "sleep",
                "nutrition",
                "exercise",
                "vitals",
                "preventive_care",
                "medication_adherence",
                "stress_mood",
            ]
        );
    }
}
