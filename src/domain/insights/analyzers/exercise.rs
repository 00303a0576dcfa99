//! Exercise Analyzer - weekly activity minutes against the 150-minute guideline.

use super::{ensure_finite, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::{EntryKind, ExerciseData, HealthData};
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 7;
const MIN_ENTRIES: usize = 3;
/// WHO weekly moderate-activity guideline.
pub const WEEKLY_GUIDELINE_MINUTES: f64 = 150.0;
/// Below this share of the guideline activity is insufficient.
const INSUFFICIENT_RATIO: f64 = 0.5;

pub struct ExerciseAnalyzer;

impl ExerciseAnalyzer {
    /// Mean minutes per entry, scaled to a week.
    pub fn weekly_minutes(days: &[&ExerciseData]) -> Result<f64, AnalyzerError> {
        if days.is_empty() {
            return Ok(0.0);
        }
        if let Some(activity) = days
            .iter()
            .flat_map(|d| d.activities.iter())
            .find(|a| !a.duration_minutes.is_finite() || a.duration_minutes < 0.0)
        {
            return Err(AnalyzerError::malformed(
                EntryKind::Exercise,
                format!(
                    "{} lasting {} minutes",
                    activity.activity_type, activity.duration_minutes
                ),
            ));
        }
        let total: f64 = days.iter().map(|d| d.total_minutes()).sum();
        ensure_finite(total * 7.0 / days.len() as f64, "weekly exercise minutes")
    }
}

impl Analyzer for ExerciseAnalyzer {
    fn name(&self) -> &'static str {
        "exercise"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let days = ctx.recent_payloads(WINDOW, HealthData::as_exercise);
        if days.len() < MIN_ENTRIES {
            return Ok(Vec::new());
        }

        let weekly = Self::weekly_minutes(&days)?;

        // Between half the guideline and the guideline nothing fires.
        let insight = if weekly < WEEKLY_GUIDELINE_MINUTES * INSUFFICIENT_RATIO {
            InsightDraft::new(
                InsightType::Warning,
                InsightCategory::Exercise,
                Priority::High,
                0.9,
                "Increase Physical Activity",
                format!(
                    "You're averaging {:.0} minutes of exercise per week, well below the recommended \
                     150 minutes. Regular exercise reduces disease risk and improves mental health.",
                    weekly
                ),
            )
            .with_action_items(&[
                "Start with 10-minute daily walks",
                "Take stairs instead of elevators",
                "Schedule 3 workout sessions per week",
                "Find activities you enjoy to maintain consistency",
            ])
            .with_tags(&["exercise-frequency", "physical-activity"])
        } else if weekly >= WEEKLY_GUIDELINE_MINUTES {
            InsightDraft::new(
                InsightType::Achievement,
                InsightCategory::Exercise,
                Priority::Low,
                0.9,
                "Excellent Exercise Consistency!",
                format!(
                    "Great job! You're averaging {:.0} minutes of exercise per week, meeting or \
                     exceeding health guidelines. Keep up the fantastic work!",
                    weekly
                ),
            )
            .with_action_items(&[
                "Continue current exercise routine",
                "Consider adding variety to prevent plateaus",
                "Include both cardio and strength training",
                "Listen to your body and allow rest days",
            ])
            .with_tags(&["exercise-achievement", "consistency"])
        } else {
            return Ok(Vec::new());
        };

        Ok(vec![insight.with_data_points(&["exercise"])])
    }
}
