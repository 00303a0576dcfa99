//! Healthy, at-risk and chronic-condition scenarios.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use crate::domain::health::*;
use crate::ports::{HealthRecordWriter, ProfileRepository};

/// Days of data written per scenario.
const SCENARIO_DAYS: i64 = 7;
/// Elevated systolic readings written for the at-risk scenario.
const AT_RISK_BP_READINGS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Healthy,
    AtRisk,
    ChronicCondition,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Healthy,
        Scenario::AtRisk,
        Scenario::ChronicCondition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Healthy => "healthy",
            Scenario::AtRisk => "at-risk",
            Scenario::ChronicCondition => "chronic-condition",
        }
    }

    /// The test persona for this scenario, born 1985-06-15 and 165 cm tall.
    pub fn profile(&self, user_id: UserId, now: Timestamp) -> Profile {
        let date_of_birth = NaiveDate::from_ymd_opt(1985, 6, 15).unwrap_or_default();
        let weight_kg = match self {
            Scenario::Healthy => 65.0,
            Scenario::AtRisk => 75.0,
            Scenario::ChronicCondition => 85.0,
        };

        let mut profile = Profile::new(user_id, date_of_birth, 165.0, weight_kg);
        profile.email = "test@healthassist.ai".to_string();
        profile.first_name = "Sarah".to_string();
        profile.last_name = "Johnson".to_string();
        profile.gender = Gender::Female;
        profile.blood_type = Some("O+".to_string());
        profile.emergency_contact = Some(EmergencyContact {
            name: "John Johnson".to_string(),
            phone: "+1-555-0123".to_string(),
            relationship: "Spouse".to_string(),
        });
        profile.lifestyle = Lifestyle {
            activity_level: match self {
                Scenario::Healthy => ActivityLevel::ModeratelyActive,
                _ => ActivityLevel::Sedentary,
            },
            smoking_status: SmokingStatus::Never,
            alcohol_consumption: AlcoholConsumption::Occasional,
            sleep_hours: match self {
                Scenario::Healthy => 8.0,
                Scenario::AtRisk => 5.5,
                Scenario::ChronicCondition => 6.0,
            },
            stress_level: match self {
                Scenario::Healthy => 2,
                Scenario::AtRisk => 4,
                Scenario::ChronicCondition => 3,
            },
            diet_type: DietType::Omnivore,
        };
        if *self == Scenario::ChronicCondition {
            profile.medications = vec!["Metformin".to_string(), "Lisinopril".to_string()];
            profile.medical_conditions =
                vec!["Type 2 Diabetes".to_string(), "Hypertension".to_string()];
        }
        profile.created_at = now;
        profile.updated_at = now;
        profile
    }

    /// Detailed entries and metrics for the week ending at `now`.
    pub fn records(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> (Vec<DetailedEntry>, Vec<MetricRecord>) {
        let mut entries = Vec::new();
        let mut metrics = Vec::new();

        for day in 0..SCENARIO_DAYS {
            let at = now.minus_days(day);
            let mut push =
                |data: HealthData| entries.push(DetailedEntry::new(user_id.clone(), at, data));
            match self {
                Scenario::Healthy => {
                    push(HealthData::Sleep(sleep("22:30", "07:00", 8.5, 4, &[])));
                    push(HealthData::Exercise(ExerciseData {
                        activities: vec![Activity {
                            calories_burned: Some(300.0),
                            ..Activity::new("Running", 30.0, Intensity::Moderate)
                        }],
                        steps: 10_000,
                        active_minutes: 45,
                    }));
                    push(HealthData::Nutrition(healthy_day()));
                }
                Scenario::AtRisk => {
                    push(HealthData::Sleep(sleep(
                        "01:00",
                        "06:30",
                        5.5,
                        2,
                        &["stress", "screen time"],
                    )));
                    push(HealthData::Exercise(ExerciseData {
                        activities: Vec::new(),
                        steps: 3_000,
                        active_minutes: 10,
                    }));
                    push(HealthData::Symptoms(SymptomData {
                        symptoms: vec![
                            symptom("Headache", 3, "2 hours"),
                            symptom("Fatigue", 4, "All day"),
                        ],
                        mood: 2,
                        energy_level: 2,
                        stress_level: 4,
                    }));
                }
                Scenario::ChronicCondition => {
                    push(HealthData::Vitals(VitalData {
                        blood_pressure: Some(BloodPressure {
                            systolic: 135.0,
                            diastolic: 85.0,
                        }),
                        blood_sugar: Some(180.0 + 5.0 * day as f64),
                        ..Default::default()
                    }));
                    // Metformin is missed once in the week.
                    push(HealthData::Medication(MedicationData {
                        medications: vec![
                            MedicationDose::new("Metformin", "500mg", day != 3),
                            MedicationDose::new("Lisinopril", "10mg", true),
                        ],
                    }));
                }
            }
        }

        if *self == Scenario::AtRisk {
            for day in 0..AT_RISK_BP_READINGS {
                metrics.push(MetricRecord::new(
                    user_id.clone(),
                    metric_types::BLOOD_PRESSURE,
                    145.0 + 2.0 * day as f64,
                    "mmHg",
                    now.minus_days(day),
                ));
            }
        }

        (entries, metrics)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "scenario",
                    format!("expected healthy, at-risk or chronic-condition, got '{}'", s),
                )
            })
    }
}

fn sleep(
    bedtime: &str,
    wake_time: &str,
    hours: f64,
    quality: u8,
    disturbances: &[&str],
) -> SleepData {
    SleepData {
        bedtime: bedtime.to_string(),
        wake_time: wake_time.to_string(),
        total_sleep_hours: hours,
        sleep_quality: quality,
        sleep_stages: None,
        sleep_disturbances: disturbances.iter().map(|d| (*d).to_string()).collect(),
    }
}

fn symptom(name: &str, severity: u8, duration: &str) -> Symptom {
    Symptom {
        name: name.to_string(),
        severity,
        duration: duration.to_string(),
        triggers: Vec::new(),
        location: None,
    }
}

fn meal(meal_type: MealType, food: &str, unit: &str, time: &str) -> Meal {
    Meal {
        meal_type,
        foods: vec![FoodItem {
            name: food.to_string(),
            quantity: 1.0,
            unit: unit.to_string(),
            calories: None,
            macros: None,
        }],
        time: time.to_string(),
    }
}

fn healthy_day() -> NutritionData {
    NutritionData {
        meals: vec![
            meal(MealType::Breakfast, "Oatmeal with berries", "bowl", "08:00"),
            meal(MealType::Lunch, "Grilled chicken salad", "plate", "12:30"),
            meal(MealType::Dinner, "Salmon with vegetables", "plate", "19:00"),
        ],
        water_intake_ml: 2500.0,
        supplements: vec!["Vitamin D".to_string(), "Omega-3".to_string()],
    }
}

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub scenario: Scenario,
    pub entries: usize,
    pub metrics: usize,
}

/// Writes scenario data through the profile and record ports.
pub struct ScenarioSeeder {
    profiles: Arc<dyn ProfileRepository>,
    writer: Arc<dyn HealthRecordWriter>,
}

impl ScenarioSeeder {
    pub fn new(profiles: Arc<dyn ProfileRepository>, writer: Arc<dyn HealthRecordWriter>) -> Self {
        Self { profiles, writer }
    }

    /// Saves the scenario persona and its week of records.
    ///
    /// The profile replaces any existing one; records are appended.
    pub async fn seed(
        &self,
        user_id: &UserId,
        scenario: Scenario,
        now: Timestamp,
    ) -> Result<SeedSummary, DomainError> {
        self.profiles
            .save(&scenario.profile(user_id.clone(), now))
            .await?;

        let (entries, metrics) = scenario.records(user_id, now);
        for entry in &entries {
            self.writer.save_detailed_entry(entry).await?;
        }
        for metric in &metrics {
            self.writer.save_metric(metric).await?;
        }

        info!(
            user_id = %user_id,
            scenario = %scenario,
            entries = entries.len(),
            metrics = metrics.len(),
            "Seeded health scenario"
        );

        Ok(SeedSummary {
            scenario,
            entries: entries.len(),
            metrics: metrics.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryHealthStore, InMemoryProfileRepository};
    use crate::ports::HealthRecordReader;

    fn now() -> Timestamp {
        Timestamp::parse("2024-06-01T12:00:00Z").unwrap()
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[test]
    fn scenario_names_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.as_str().parse::<Scenario>().unwrap(), scenario);
        }
        assert!("sick".parse::<Scenario>().is_err());
    }

    #[test]
    fn personas_differ_by_weight_and_medication() {
        let healthy = Scenario::Healthy.profile(user(), now());
        let chronic = Scenario::ChronicCondition.profile(user(), now());
        assert_eq!(healthy.weight_kg, 65.0);
        assert!(healthy.medications.is_empty());
        assert_eq!(chronic.weight_kg, 85.0);
        assert_eq!(chronic.medications, vec!["Metformin", "Lisinopril"]);
        assert!(chronic.validate(&now()).is_ok());
    }

    #[test]
    fn records_are_deterministic() {
        let (a, _) = Scenario::ChronicCondition.records(&user(), now());
        let (b, _) = Scenario::ChronicCondition.records(&user(), now());
        let payloads = |v: &[DetailedEntry]| v.iter().map(|e| e.data.clone()).collect::<Vec<_>>();
        assert_eq!(payloads(&a), payloads(&b));
    }

    #[test]
    fn at_risk_writes_elevated_blood_pressure() {
        let (entries, metrics) = Scenario::AtRisk.records(&user(), now());
        assert_eq!(entries.len(), 21);
        assert_eq!(metrics.len(), 5);
        assert!(metrics.iter().all(|m| m.value >= 145.0 && m.value <= 155.0));
    }

    #[tokio::test]
    async fn seed_writes_through_ports() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let store = Arc::new(InMemoryHealthStore::new());
        let seeder = ScenarioSeeder::new(profiles.clone(), store.clone());

        let summary = seeder.seed(&user(), Scenario::Healthy, now()).await.unwrap();

        assert_eq!(summary.entries, 21);
        assert_eq!(summary.metrics, 0);
        assert!(profiles.get(&user()).await.unwrap().is_some());
        let sleep = store
            .list_detailed_entries(&user(), Some(EntryKind::Sleep), None)
            .await
            .unwrap();
        assert_eq!(sleep.len(), 7);
    }
}
