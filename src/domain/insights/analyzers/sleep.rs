//! Sleep Analyzer - average duration and quality over the last week.

use super::{ensure_finite, ensure_scale, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::{EntryKind, HealthData};
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 7;
const MIN_ENTRIES: usize = 3;
/// Hours below which average sleep is insufficient.
const MIN_SLEEP_HOURS: f64 = 7.0;
/// Quality (1-5) below which sleep is poor.
const MIN_SLEEP_QUALITY: f64 = 3.0;

pub struct SleepAnalyzer;

impl Analyzer for SleepAnalyzer {
    fn name(&self) -> &'static str {
        "sleep"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let nights = ctx.recent_payloads(WINDOW, HealthData::as_sleep);
        if nights.len() < MIN_ENTRIES {
            return Ok(Vec::new());
        }

        let hours = nights
            .iter()
            .map(|n| {
                if n.total_sleep_hours.is_finite() && n.total_sleep_hours >= 0.0 {
                    Ok(n.total_sleep_hours)
                } else {
                    Err(AnalyzerError::malformed(
                        EntryKind::Sleep,
                        format!("total sleep of {} hours", n.total_sleep_hours),
                    ))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let qualities = nights
            .iter()
            .map(|n| ensure_scale(EntryKind::Sleep, "sleep_quality", n.sleep_quality))
            .collect::<Result<Vec<_>, _>>()?;

        let avg_hours = ensure_finite(mean(hours).unwrap_or_default(), "average sleep")?;
        let avg_quality =
            ensure_finite(mean(qualities).unwrap_or_default(), "average sleep quality")?;

        let mut insights = Vec::new();

        if avg_hours < MIN_SLEEP_HOURS {
            insights.push(
                InsightDraft::new(
                    InsightType::Warning,
                    InsightCategory::Sleep,
                    Priority::High,
                    0.9,
                    "Insufficient Sleep Duration",
                    format!(
                        "Your average sleep duration of {:.1} hours is below the recommended 7-9 hours. \
                         This can impact immune function, cognitive performance, and overall health.",
                        avg_hours
                    ),
                )
                .with_data_points(&["sleep"])
                .with_action_items(&[
                    "Establish consistent bedtime routine",
                    "Limit screen time 1 hour before bed",
                    "Keep bedroom cool, dark, and quiet",
                    "Avoid caffeine after 2 PM",
                ])
                .with_tags(&["sleep-duration", "sleep-hygiene"]),
            );
        }

        if avg_quality < MIN_SLEEP_QUALITY {
            insights.push(
                InsightDraft::new(
                    InsightType::Recommendation,
                    InsightCategory::Sleep,
                    Priority::Medium,
                    0.8,
                    "Poor Sleep Quality Detected",
                    format!(
                        "Your average sleep quality score of {:.1}/5 suggests you're not getting \
                         restorative sleep. Focus on sleep hygiene improvements.",
                        avg_quality
                    ),
                )
                .with_data_points(&["sleep"])
                .with_action_items(&[
                    "Track sleep disturbances to identify patterns",
                    "Consider relaxation techniques before bed",
                    "Evaluate mattress and pillow comfort",
                    "Discuss with healthcare provider if issues persist",
                ])
                .with_tags(&["sleep-quality", "sleep-hygiene"]),
            );
        }

        Ok(insights)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::health::DetailedEntry;

    fn run(entries: &[DetailedEntry]) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let profile = neutral_profile();
        let ctx = AnalysisContext::new(&profile, &[], entries, &[], now());
        SleepAnalyzer.analyze(&ctx)
    }

    fn nights(count: i64, hours: f64, quality: u8) -> Vec<DetailedEntry> {
        (0..count).map(|d| sleep(hours, quality, d)).collect()
    }

    #[test]
    fn two_entries_are_not_enough() {
        assert!(run(&nights(2, 4.0, 1)).unwrap().is_empty());
    }

    #[test]
    fn three_entries_activate_evaluation() {
        let insights = run(&nights(3, 4.0, 1)).unwrap();
        assert_eq!(insights.len(), 2);
    }

    #[test]
    fn short_sleep_warns() {
        let insights = run(&nights(7, 5.5, 4)).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Insufficient Sleep Duration");
        assert_eq!(insights[0].priority, Priority::High);
        assert_eq!(insights[0].confidence.value(), 0.9);
        assert!(insights[0].content.contains("5.5 hours"));
    }

    #[test]
    fn poor_quality_recommends() {
        let insights = run(&nights(7, 8.0, 2)).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Poor Sleep Quality Detected");
        assert_eq!(insights[0].insight_type, InsightType::Recommendation);
        assert_eq!(insights[0].priority, Priority::Medium);
        assert!(insights[0].content.contains("2.0/5"));
    }

    #[test]
    fn seven_hours_of_good_sleep_is_silent() {
        assert!(run(&nights(7, 7.0, 3)).unwrap().is_empty());
    }

    #[test]
    fn only_the_seven_newest_nights_count() {
        // Seven good nights followed by three old bad ones.
        let mut entries = nights(7, 8.0, 4);
        entries.extend((10..13).map(|d| sleep(2.0, 1, d)));
        assert!(run(&entries).unwrap().is_empty());
    }

    #[test]
    fn out_of_scale_quality_is_malformed() {
        let result = run(&nights(3, 8.0, 9));
        assert!(matches!(
            result,
            Err(AnalyzerError::MalformedEntry {
                kind: EntryKind::Sleep,
                ..
            })
        ));
    }

    #[test]
    fn nan_duration_is_malformed() {
        let result = run(&nights(3, f64::NAN, 3));
        assert!(result.is_err());
    }
}
