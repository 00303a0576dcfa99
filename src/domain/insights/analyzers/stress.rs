//! Stress and mood patterns from self-reported symptom logs.

use super::{ensure_finite, ensure_scale, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::{EntryKind, HealthData};
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 7;
const MIN_ENTRIES: usize = 3;
const STRESS_ELEVATED_ABOVE: f64 = 3.5;
const MOOD_LOW_BELOW: f64 = 2.5;

pub struct StressMoodAnalyzer;

impl Analyzer for StressMoodAnalyzer {
    fn name(&self) -> &'static str {
        "stress_mood"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let logs = ctx.recent_payloads(WINDOW, HealthData::as_symptoms);
        if logs.len() < MIN_ENTRIES {
            return Ok(Vec::new());
        }

        let mut stress = Vec::with_capacity(logs.len());
        let mut mood = Vec::with_capacity(logs.len());
        for log in &logs {
            stress.push(ensure_scale(EntryKind::Symptoms, "stress_level", log.stress_level)?);
            mood.push(ensure_scale(EntryKind::Symptoms, "mood", log.mood)?);
        }
        let avg_stress = ensure_finite(mean(stress).unwrap_or_default(), "average stress")?;
        let avg_mood = ensure_finite(mean(mood).unwrap_or_default(), "average mood")?;

        let mut insights = Vec::new();

        if avg_stress > STRESS_ELEVATED_ABOVE {
            insights.push(
                InsightDraft::new(
                    InsightType::Warning,
                    InsightCategory::MentalHealth,
                    Priority::High,
                    0.8,
                    "Elevated Stress Levels Detected",
                    format!(
                        "Your average stress level of {:.1}/5 indicates chronic stress, which can \
                         impact immune function, sleep, and overall health.",
                        avg_stress
                    ),
                )
                .with_data_points(&["symptoms"])
                .with_action_items(&[
                    "Practice daily stress reduction techniques",
                    "Consider meditation or mindfulness apps",
                    "Ensure adequate sleep and exercise",
                    "Talk to a mental health professional if needed",
                ])
                .with_tags(&["stress-management", "mental-health"]),
            );
        }

        if avg_mood < MOOD_LOW_BELOW {
            insights.push(
                InsightDraft::new(
                    InsightType::Warning,
                    InsightCategory::MentalHealth,
                    Priority::High,
                    0.8,
                    "Concerning Mood Patterns",
                    format!(
                        "Your average mood score of {:.1}/5 suggests you may be experiencing \
                         persistent low mood. This deserves attention and support.",
                        avg_mood
                    ),
                )
                .with_data_points(&["symptoms"])
                .with_action_items(&[
                    "Consider speaking with a mental health professional",
                    "Maintain social connections",
                    "Engage in activities you enjoy",
                    "Ensure adequate sunlight exposure",
                ])
                .with_tags(&["mood", "mental-health"]),
            );
        }

        Ok(insights)
    }
}
