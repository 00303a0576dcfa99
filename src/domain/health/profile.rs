//! User profile - physical and lifestyle attributes consumed by the analyzers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmokingStatus {
    #[default]
    Never,
    Former,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlcoholConsumption {
    #[default]
    None,
    Occasional,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Keto,
    Mediterranean,
    Other,
}

/// Lifestyle attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub smoking_status: SmokingStatus,
    #[serde(default)]
    pub alcohol_consumption: AlcoholConsumption,
    /// Nightly sleep target in hours.
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,
    /// Self-assessed baseline stress, 1-5.
    #[serde(default = "default_stress_level")]
    pub stress_level: u8,
    #[serde(default)]
    pub diet_type: DietType,
}

impl Default for Lifestyle {
    fn default() -> Self {
        Self {
            activity_level: ActivityLevel::default(),
            smoking_status: SmokingStatus::default(),
            alcohol_consumption: AlcoholConsumption::default(),
            sleep_hours: default_sleep_hours(),
            stress_level: default_stress_level(),
            diet_type: DietType::default(),
        }
    }
}

fn default_sleep_hours() -> f64 {
    8.0
}

fn default_stress_level() -> u8 {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// The user's health profile.
///
/// Immutable during an evaluation pass; changed only through [`ProfileUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Creates a profile with the attributes the analyzers depend on.
    ///
    /// Everything else starts empty or at its default.
    pub fn new(id: UserId, date_of_birth: NaiveDate, height_cm: f64, weight_kg: f64) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth,
            gender: Gender::default(),
            height_cm,
            weight_kg,
            blood_type: None,
            allergies: Vec::new(),
            medications: Vec::new(),
            medical_conditions: Vec::new(),
            emergency_contact: None,
            lifestyle: Lifestyle::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the medication list.
    pub fn with_medications<I, S>(mut self, medications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medications = medications.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the numeric fields the analyzers divide by or compare against.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when height or weight is not a positive finite
    /// number, or the date of birth lies after `now`.
    pub fn validate(&self, now: &Timestamp) -> Result<(), ValidationError> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(ValidationError::out_of_range(
                "height_cm",
                0.0,
                f64::MAX,
                self.height_cm,
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ValidationError::out_of_range(
                "weight_kg",
                0.0,
                f64::MAX,
                self.weight_kg,
            ));
        }
        if self.date_of_birth > now.date() {
            return Err(ValidationError::invalid_format(
                "date_of_birth",
                "date of birth is in the future",
            ));
        }
        Ok(())
    }

    /// Body mass index, `weight / height_m^2`.
    ///
    /// `None` when the result would not be a finite positive number.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm / 100.0;
        let bmi = self.weight_kg / (height_m * height_m);
        (bmi.is_finite() && bmi > 0.0).then_some(bmi)
    }

    /// Age as calendar-year difference only.
    ///
    /// Month and day are ignored: someone born in December counts a full
    /// year older from January 1st.
    pub fn age_in_years(&self, now: &Timestamp) -> i32 {
        use chrono::Datelike;
        now.year() - self.date_of_birth.year()
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply(&mut self, update: ProfileUpdate, now: Timestamp) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = height_cm;
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(allergies) = update.allergies {
            self.allergies = allergies;
        }
        if let Some(medications) = update.medications {
            self.medications = medications;
        }
        if let Some(conditions) = update.medical_conditions {
            self.medical_conditions = conditions;
        }
        if let Some(lifestyle) = update.lifestyle {
            self.lifestyle = lifestyle;
        }
        self.updated_at = now;
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub allergies: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub medical_conditions: Option<Vec<String>>,
    pub lifestyle: Option<Lifestyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::parse("2024-06-01T12:00:00Z").unwrap()
    }

    fn profile(height_cm: f64, weight_kg: f64) -> Profile {
        Profile::new(
            UserId::new("user-1").unwrap(),
            NaiveDate::from_ymd_opt(1980, 12, 31).unwrap(),
            height_cm,
            weight_kg,
        )
    }

    #[test]
    fn bmi_uses_height_in_metres() {
        let bmi = profile(165.0, 85.0).bmi().unwrap();
        assert!((bmi - 31.22).abs() < 0.01);
    }

    #[test]
    fn bmi_is_none_for_zero_height() {
        assert!(profile(0.0, 70.0).bmi().is_none());
    }

    #[test]
    fn bmi_is_none_for_zero_weight() {
        assert!(profile(170.0, 0.0).bmi().is_none());
    }

    #[test]
    fn age_ignores_month_and_day() {
        // Born 1980-12-31, evaluated 2024-06-01: calendar years give 44.
        assert_eq!(profile(170.0, 70.0).age_in_years(&now()), 44);
    }

    #[test]
    fn validate_accepts_well_formed_profile() {
        assert!(profile(170.0, 70.0).validate(&now()).is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_height() {
        let err = profile(0.0, 70.0).validate(&now()).unwrap_err();
        assert_eq!(err.field(), "height_cm");
    }

    #[test]
    fn validate_rejects_nan_weight() {
        let err = profile(170.0, f64::NAN).validate(&now()).unwrap_err();
        assert_eq!(err.field(), "weight_kg");
    }

    #[test]
    fn validate_rejects_future_birth_date() {
        let mut p = profile(170.0, 70.0);
        p.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let err = p.validate(&now()).unwrap_err();
        assert_eq!(err.field(), "date_of_birth");
    }

    #[test]
    fn apply_updates_only_given_fields() {
        let mut p = profile(170.0, 70.0).with_medications(["Metformin"]);
        p.apply(
            ProfileUpdate {
                weight_kg: Some(72.5),
                ..Default::default()
            },
            now(),
        );

        assert_eq!(p.weight_kg, 72.5);
        assert_eq!(p.height_cm, 170.0);
        assert_eq!(p.medications, vec!["Metformin".to_string()]);
        assert_eq!(p.updated_at, now());
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let json = r#"{
            "id": "user-1",
            "date_of_birth": "1979-03-02",
            "height_cm": 165.0,
            "weight_kg": 85.0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let p: Profile = serde_json::from_str(json).unwrap();
        assert!(p.medications.is_empty());
        assert_eq!(p.lifestyle.sleep_hours, 8.0);
        assert_eq!(p.gender, Gender::PreferNotToSay);
    }

    #[test]
    fn profile_rejects_unparseable_birth_date() {
        let json = r#"{
            "id": "user-1",
            "date_of_birth": "not-a-date",
            "height_cm": 165.0,
            "weight_kg": 85.0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Profile>(json).is_err());
    }
}
