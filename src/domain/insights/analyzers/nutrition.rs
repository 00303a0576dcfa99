//! Nutrition Analyzer - hydration against a weight-based target and meal frequency.

use super::{ensure_finite, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::{EntryKind, HealthData};
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 7;
const MIN_ENTRIES: usize = 3;
/// Daily water target per kilogram of body weight.
const WATER_ML_PER_KG: f64 = 35.0;
/// Share of the target below which intake is too low.
const WATER_TARGET_RATIO: f64 = 0.8;
const MIN_MEALS_PER_DAY: f64 = 3.0;

pub struct NutritionAnalyzer;

impl Analyzer for NutritionAnalyzer {
    fn name(&self) -> &'static str {
        "nutrition"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let days = ctx.recent_payloads(WINDOW, HealthData::as_nutrition);
        if days.len() < MIN_ENTRIES {
            return Ok(Vec::new());
        }
        let profile = ctx.profile()?;

        if let Some(bad) = days
            .iter()
            .find(|d| !d.water_intake_ml.is_finite() || d.water_intake_ml < 0.0)
        {
            return Err(AnalyzerError::malformed(
                EntryKind::Nutrition,
                format!("water intake of {} ml", bad.water_intake_ml),
            ));
        }

        let avg_water_ml = ensure_finite(
            mean(days.iter().map(|d| d.water_intake_ml)).unwrap_or_default(),
            "average water intake",
        )?;
        let avg_meals = mean(days.iter().map(|d| d.meals.len() as f64)).unwrap_or_default();
        let target_water_ml = ensure_finite(profile.weight_kg * WATER_ML_PER_KG, "water target")?;

        let mut insights = Vec::new();

        if avg_water_ml < target_water_ml * WATER_TARGET_RATIO {
            insights.push(
                InsightDraft::new(
                    InsightType::Recommendation,
                    InsightCategory::Nutrition,
                    Priority::Medium,
                    0.8,
                    "Increase Daily Water Intake",
                    format!(
                        "Your average water intake of {:.1}L is below the recommended {:.1}L for \
                         your body weight. Proper hydration supports metabolism and cognitive function.",
                        avg_water_ml / 1000.0,
                        target_water_ml / 1000.0
                    ),
                )
                .with_data_points(&["nutrition"])
                .with_action_items(&[
                    "Carry a water bottle throughout the day",
                    "Set hourly hydration reminders",
                    "Eat water-rich foods (fruits, vegetables)",
                    "Monitor urine color as hydration indicator",
                ])
                .with_tags(&["hydration", "nutrition"]),
            );
        }

        if avg_meals < MIN_MEALS_PER_DAY {
            insights.push(
                InsightDraft::new(
                    InsightType::Recommendation,
                    InsightCategory::Nutrition,
                    Priority::Low,
                    0.7,
                    "Consider More Regular Meal Patterns",
                    format!(
                        "You're averaging {:.1} meals per day. Regular meal timing can help \
                         stabilize blood sugar and energy levels.",
                        avg_meals
                    ),
                )
                .with_data_points(&["nutrition"])
                .with_action_items(&[
                    "Plan 3 balanced meals per day",
                    "Include healthy snacks if needed",
                    "Maintain consistent meal timing",
                    "Focus on balanced macronutrients",
                ])
                .with_tags(&["meal-timing", "nutrition"]),
            );
        }

        Ok(insights)
    }
}
