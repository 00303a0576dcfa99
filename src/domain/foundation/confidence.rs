//! Confidence value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A hand-assigned certainty between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// No confidence at all.
    pub const ZERO: Self = Self(0.0);

    /// Full confidence.
    pub const CERTAIN: Self = Self(1.0);

    /// Creates a new Confidence, clamping to the valid range.
    ///
    /// Non-finite input collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Creates a Confidence, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("expected a value in [0, 1], got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if strictly above the given threshold.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_new_accepts_valid_values() {
        assert_eq!(Confidence::new(0.0).value(), 0.0);
        assert_eq!(Confidence::new(0.85).value(), 0.85);
        assert_eq!(Confidence::new(1.0).value(), 1.0);
    }

    #[test]
    fn confidence_new_clamps_out_of_range() {
        assert_eq!(Confidence::new(1.5).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
    }

    #[test]
    fn confidence_new_collapses_nan_to_zero() {
        assert_eq!(Confidence::new(f64::NAN), Confidence::ZERO);
        assert_eq!(Confidence::new(f64::INFINITY), Confidence::ZERO);
    }

    #[test]
    fn confidence_try_new_rejects_out_of_range() {
        assert!(Confidence::try_new(1.01).is_err());
        assert!(Confidence::try_new(-0.01).is_err());
        assert!(Confidence::try_new(f64::NAN).is_err());
        assert!(Confidence::try_new(0.6).is_ok());
    }

    #[test]
    fn confidence_exceeds_is_strict() {
        assert!(!Confidence::new(0.6).exceeds(0.6));
        assert!(Confidence::new(0.61).exceeds(0.6));
        assert!(!Confidence::new(0.5).exceeds(0.6));
    }

    #[test]
    fn confidence_serializes_as_number() {
        let json = serde_json::to_string(&Confidence::new(0.9)).unwrap();
        assert_eq!(json, "0.9");
    }

    #[test]
    fn confidence_deserialization_rejects_out_of_range() {
        let result: Result<Confidence, _> = serde_json::from_str("1.7");
        assert!(result.is_err());
    }

    #[test]
    fn confidence_displays_two_decimals() {
        assert_eq!(format!("{}", Confidence::new(0.8)), "0.80");
    }
}
