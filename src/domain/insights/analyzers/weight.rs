//! Weight Analyzer - BMI classification and weight trend detection.

use super::{ensure_finite, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::metric_types;
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

/// BMI below this is underweight.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
/// BMI at or above this is overweight.
pub const BMI_OVERWEIGHT_FROM: f64 = 25.0;
/// BMI at or above this is obese.
pub const BMI_OBESE_FROM: f64 = 30.0;

/// How many weight readings the trend looks at.
const TREND_WINDOW: usize = 10;
/// Readings needed for a trend: a recent window of 3 and an older window of 3.
const TREND_MIN_READINGS: usize = 6;
const RECENT_WINDOW: std::ops::Range<usize> = 0..3;
const OLDER_WINDOW: std::ops::Range<usize> = 3..6;
/// Percent change that counts as significant.
const SIGNIFICANT_CHANGE_PERCENT: f64 = 5.0;
/// Percent change that escalates to high priority.
const MAJOR_CHANGE_PERCENT: f64 = 10.0;

/// BMI band of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClass {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiClass {
    /// Classifies a BMI value. The four bands are mutually exclusive.
    pub fn of(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_BELOW {
            BmiClass::Underweight
        } else if bmi < BMI_OVERWEIGHT_FROM {
            BmiClass::Healthy
        } else if bmi < BMI_OBESE_FROM {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }
}

/// Analyzer for BMI status and recent weight change.
pub struct WeightAnalyzer;

impl WeightAnalyzer {
    fn bmi_insight(bmi: f64) -> Option<InsightDraft> {
        let draft = match BmiClass::of(bmi) {
            BmiClass::Healthy => return None,
            BmiClass::Underweight => InsightDraft::new(
                InsightType::Recommendation,
                InsightCategory::Nutrition,
                Priority::Medium,
                0.85,
                "Healthy Weight Gain Strategy Needed",
                format!(
                    "Your BMI of {:.1} indicates underweight status. Focus on nutrient-dense, \
                     calorie-rich foods and consider strength training to build healthy muscle mass.",
                    bmi
                ),
            )
            .with_action_items(&[
                "Increase caloric intake with healthy fats (nuts, avocados, olive oil)",
                "Add protein-rich foods to each meal",
                "Consider working with a registered dietitian",
                "Include resistance training 2-3 times per week",
            ])
            .with_tags(&["weight-gain", "nutrition", "exercise"]),
            BmiClass::Overweight => InsightDraft::new(
                InsightType::Recommendation,
                InsightCategory::Nutrition,
                Priority::Medium,
                0.8,
                "Weight Management Opportunity",
                format!(
                    "Your BMI of {:.1} suggests focusing on gradual, sustainable weight loss \
                     could benefit your overall health and reduce disease risk.",
                    bmi
                ),
            )
            .with_action_items(&[
                "Create a moderate caloric deficit (300-500 calories/day)",
                "Increase physical activity gradually",
                "Focus on whole foods and portion control",
                "Track food intake for better awareness",
            ])
            .with_tags(&["weight-loss", "nutrition", "exercise"]),
            BmiClass::Obese => InsightDraft::new(
                InsightType::Warning,
                InsightCategory::Nutrition,
                Priority::High,
                0.9,
                "Significant Weight Management Needed",
                format!(
                    "Your BMI of {:.1} indicates obesity, which increases risk for diabetes, \
                     heart disease, and other conditions. Professional guidance is recommended.",
                    bmi
                ),
            )
            .with_action_items(&[
                "Consult with healthcare provider for weight management plan",
                "Consider working with registered dietitian",
                "Start with low-impact exercises (walking, swimming)",
                "Set realistic, gradual weight loss goals (1-2 lbs/week)",
            ])
            .with_tags(&["weight-loss", "medical-consultation", "nutrition"]),
        };
        Some(draft.with_data_points(&["weight", "height"]))
    }

    /// Percent change between the mean of the 3 newest and the next 3 readings.
    ///
    /// `None` when fewer than six readings are available.
    pub fn weight_change_percent(weights: &[f64]) -> Result<Option<f64>, AnalyzerError> {
        if weights.len() < TREND_MIN_READINGS {
            return Ok(None);
        }
        let recent = mean(weights[RECENT_WINDOW].iter().copied());
        let older = mean(weights[OLDER_WINDOW].iter().copied());
        match (recent, older) {
            (Some(recent), Some(older)) => {
                let change = ensure_finite((recent - older) / older * 100.0, "weight change")?;
                Ok(Some(change))
            }
            _ => Ok(None),
        }
    }

    fn trend_insight(change_percent: f64) -> Option<InsightDraft> {
        let magnitude = change_percent.abs();
        if magnitude <= SIGNIFICANT_CHANGE_PERCENT {
            return None;
        }

        let gained = change_percent > 0.0;
        let priority = if magnitude > MAJOR_CHANGE_PERCENT {
            Priority::High
        } else {
            Priority::Medium
        };

        let (insight_type, direction, verb, remark, actions) = if gained {
            (
                InsightType::Warning,
                "Gain",
                "gained",
                "Monitor this trend closely.",
                [
                    "Review recent dietary changes",
                    "Assess stress levels and sleep quality",
                    "Consider consulting healthcare provider if trend continues",
                ],
            )
        } else {
            (
                InsightType::Achievement,
                "Loss",
                "lost",
                "Great progress on your health journey!",
                [
                    "Continue current healthy habits",
                    "Ensure adequate nutrition during weight loss",
                    "Monitor for any concerning symptoms",
                ],
            )
        };

        Some(
            InsightDraft::new(
                insight_type,
                InsightCategory::Nutrition,
                priority,
                0.8,
                format!("Significant Weight {} Detected", direction),
                format!(
                    "You've {} approximately {:.1}% of your body weight recently. {}",
                    verb, magnitude, remark
                ),
            )
            .with_data_points(&["weight"])
            .with_action_items(&actions)
            .with_tags(&["weight-trend", "monitoring"]),
        )
    }
}

impl Analyzer for WeightAnalyzer {
    fn name(&self) -> &'static str {
        "weight"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let profile = ctx.profile()?;
        let bmi = profile
            .bmi()
            .ok_or(AnalyzerError::NonFiniteResult { quantity: "BMI" })?;

        let mut insights = Vec::new();
        insights.extend(Self::bmi_insight(bmi));

        let weights: Vec<f64> = ctx
            .recent_metrics(metric_types::WEIGHT, TREND_WINDOW)
            .iter()
            .map(|m| m.value)
            .collect();
        if let Some(change) = Self::weight_change_percent(&weights)? {
            insights.extend(Self::trend_insight(change));
        }

        Ok(insights)
    }
}
