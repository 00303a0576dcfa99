//! Detailed entries - timestamped records carrying a domain-specific payload.
//!
//! The payload is the `HealthData` sum type, serialized adjacently tagged so an
//! entry reads as `{ "type": "sleep", "data": { ... }, ... }`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DataSource;
use crate::domain::foundation::{RecordId, Timestamp, UserId, ValidationError};

/// Discriminant of [`HealthData`], used for store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Nutrition,
    Exercise,
    Sleep,
    Symptoms,
    Medication,
    Vitals,
}

impl EntryKind {
    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Nutrition => "nutrition",
            EntryKind::Exercise => "exercise",
            EntryKind::Sleep => "sleep",
            EntryKind::Symptoms => "symptoms",
            EntryKind::Medication => "medication",
            EntryKind::Vitals => "vitals",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Nutrition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub macros: Option<Macros>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    /// Wall-clock time, e.g. "08:00".
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Daily water intake in millilitres.
    pub water_intake_ml: f64,
    #[serde(default)]
    pub supplements: Vec<String>,
}

// ---------------------------------------------------------------------------
// Exercise
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub activity_type: String,
    pub duration_minutes: f64,
    pub intensity: Intensity,
    #[serde(default)]
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub heart_rate_avg: Option<u16>,
    #[serde(default)]
    pub heart_rate_max: Option<u16>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Activity {
    pub fn new(
        activity_type: impl Into<String>,
        duration_minutes: f64,
        intensity: Intensity,
    ) -> Self {
        Self {
            activity_type: activity_type.into(),
            duration_minutes,
            intensity,
            calories_burned: None,
            heart_rate_avg: None,
            heart_rate_max: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseData {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub active_minutes: u32,
}

impl ExerciseData {
    /// Sum of all activity durations in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.activities.iter().map(|a| a.duration_minutes).sum()
    }
}

// ---------------------------------------------------------------------------
// Sleep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepStages {
    pub deep: f64,
    pub light: f64,
    pub rem: f64,
    pub awake: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepData {
    pub bedtime: String,
    pub wake_time: String,
    pub total_sleep_hours: f64,
    /// 1 (poor) to 5 (excellent).
    pub sleep_quality: u8,
    #[serde(default)]
    pub sleep_stages: Option<SleepStages>,
    #[serde(default)]
    pub sleep_disturbances: Vec<String>,
}

// ---------------------------------------------------------------------------
// Symptoms / mood
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    /// 1-5.
    pub severity: u8,
    pub duration: String,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomData {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    /// 1-5.
    pub mood: u8,
    /// 1-5. Recorded but not used by any rule yet.
    pub energy_level: u8,
    /// 1-5.
    pub stress_level: u8,
}

// ---------------------------------------------------------------------------
// Medication
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationDose {
    pub name: String,
    pub dosage: String,
    pub time_taken: String,
    /// Whether the dose was taken as prescribed.
    pub adherence: bool,
    #[serde(default)]
    pub side_effects: Vec<String>,
}

impl MedicationDose {
    pub fn new(name: impl Into<String>, dosage: impl Into<String>, adherence: bool) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            time_taken: "08:00".to_string(),
            adherence,
            side_effects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicationData {
    #[serde(default)]
    pub medications: Vec<MedicationDose>,
}

impl MedicationData {
    /// Fraction of listed doses marked adherent.
    ///
    /// An entry listing no medications counts as fully adherent.
    pub fn adherence_rate(&self) -> f64 {
        if self.medications.is_empty() {
            return 1.0;
        }
        let adherent = self.medications.iter().filter(|m| m.adherence).count();
        adherent as f64 / self.medications.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Vitals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalData {
    #[serde(default)]
    pub blood_pressure: Option<BloodPressure>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// Domain-specific payload of a detailed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum HealthData {
    Nutrition(NutritionData),
    Exercise(ExerciseData),
    Sleep(SleepData),
    Symptoms(SymptomData),
    Medication(MedicationData),
    Vitals(VitalData),
}

impl HealthData {
    /// Returns the discriminant of this payload.
    pub fn kind(&self) -> EntryKind {
        match self {
            HealthData::Nutrition(_) => EntryKind::Nutrition,
            HealthData::Exercise(_) => EntryKind::Exercise,
            HealthData::Sleep(_) => EntryKind::Sleep,
            HealthData::Symptoms(_) => EntryKind::Symptoms,
            HealthData::Medication(_) => EntryKind::Medication,
            HealthData::Vitals(_) => EntryKind::Vitals,
        }
    }

    /// Checks 1-5 scores and that measured quantities are finite and not
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a `ValidationError`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            HealthData::Nutrition(data) => {
                non_negative("water_intake_ml", data.water_intake_ml)?;
                for food in data.meals.iter().flat_map(|m| m.foods.iter()) {
                    non_negative("quantity", food.quantity)?;
                    if let Some(calories) = food.calories {
                        non_negative("calories", calories)?;
                    }
                }
                Ok(())
            }
            HealthData::Exercise(data) => data
                .activities
                .iter()
                .try_for_each(|a| non_negative("duration_minutes", a.duration_minutes)),
            HealthData::Sleep(data) => {
                non_negative("total_sleep_hours", data.total_sleep_hours)?;
                scale("sleep_quality", data.sleep_quality)
            }
            HealthData::Symptoms(data) => {
                for symptom in &data.symptoms {
                    scale("severity", symptom.severity)?;
                }
                scale("mood", data.mood)?;
                scale("energy_level", data.energy_level)?;
                scale("stress_level", data.stress_level)
            }
            HealthData::Medication(_) => Ok(()),
            HealthData::Vitals(data) => {
                if let Some(bp) = data.blood_pressure {
                    non_negative("systolic", bp.systolic)?;
                    non_negative("diastolic", bp.diastolic)?;
                }
                [
                    ("heart_rate", data.heart_rate),
                    ("temperature", data.temperature),
                    ("weight", data.weight),
                    ("blood_sugar", data.blood_sugar),
                    ("oxygen_saturation", data.oxygen_saturation),
                ]
                .into_iter()
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .try_for_each(|(field, value)| non_negative(field, value))
            }
        }
    }

    pub fn as_nutrition(&self) -> Option<&NutritionData> {
        match self {
            HealthData::Nutrition(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_exercise(&self) -> Option<&ExerciseData> {
        match self {
            HealthData::Exercise(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_sleep(&self) -> Option<&SleepData> {
        match self {
            HealthData::Sleep(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_symptoms(&self) -> Option<&SymptomData> {
        match self {
            HealthData::Symptoms(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_medication(&self) -> Option<&MedicationData> {
        match self {
            HealthData::Medication(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_vitals(&self) -> Option<&VitalData> {
        match self {
            HealthData::Vitals(data) => Some(data),
            _ => None,
        }
    }
}

/// A timestamped, domain-tagged record of rich health data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedEntry {
    #[serde(default)]
    pub id: RecordId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub data: HealthData,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: DataSource,
}

impl DetailedEntry {
    /// Creates a manually entered record with a fresh id.
    pub fn new(user_id: UserId, timestamp: Timestamp, data: HealthData) -> Self {
        Self {
            id: RecordId::generate(),
            user_id,
            timestamp,
            data,
            notes: None,
            source: DataSource::Manual,
        }
    }

    /// Returns the payload discriminant.
    pub fn kind(&self) -> EntryKind {
        self.data.kind()
    }

    /// Validates the payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()
    }
}

fn scale(field: &str, value: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, 1.0, 5.0, f64::from(value)))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value))
    }
}
