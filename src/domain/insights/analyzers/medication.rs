//! Medication Adherence Analyzer.

use super::{ensure_finite, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::HealthData;
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 7;
const MIN_ENTRIES: usize = 3;
const MIN_ADHERENCE: f64 = 0.8;

pub struct MedicationAdherenceAnalyzer;

impl Analyzer for MedicationAdherenceAnalyzer {
    fn name(&self) -> &'static str {
        "medication_adherence"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        // Only the medication list is read, so an otherwise invalid profile
        // does not block this rule.
        if ctx.raw_profile().medications.is_empty() {
            return Ok(Vec::new());
        }

        let logs = ctx.recent_payloads(WINDOW, HealthData::as_medication);
        if logs.len() < MIN_ENTRIES {
            return Ok(Vec::new());
        }

        let adherence = ensure_finite(
            mean(logs.iter().map(|l| l.adherence_rate())).unwrap_or(1.0),
            "medication adherence",
        )?;
        if adherence >= MIN_ADHERENCE {
            return Ok(Vec::new());
        }

        Ok(vec![InsightDraft::new(
            InsightType::Warning,
            InsightCategory::Medication,
            Priority::High,
            0.85,
            "Medication Adherence Needs Improvement",
            format!(
                "Your medication adherence rate of {:.0}% is below optimal. Poor adherence can \
                 reduce treatment effectiveness and worsen health outcomes.",
                adherence * 100.0
            ),
        )
        .with_data_points(&["medication"])
        .with_action_items(&[
            "Set daily medication reminders",
            "Use a pill organizer",
            "Discuss barriers with healthcare provider",
            "Consider medication timing adjustments",
        ])
        .with_tags(&["medication-adherence", "treatment"])])
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::health::{DetailedEntry, Profile};

    fn medicated() -> Profile {
        neutral_profile().with_medications(["Metformin"])
    }

    fn run(profile: &Profile, entries: &[DetailedEntry]) -> Vec<InsightDraft> {
        let ctx = AnalysisContext::new(profile, &[], entries, &[], now());
        MedicationAdherenceAnalyzer.analyze(&ctx).unwrap()
    }

    #[test]
    fn low_adherence_warns() {
        // 2 of 3 days fully missed, one fully taken -> 33%
        let entries = vec![
            medication(&[false], 0),
            medication(&[false], 1),
            medication(&[true], 2),
        ];
        let insights = run(&medicated(), &entries);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Medication Adherence Needs Improvement");
        assert_eq!(insights[0].confidence.value(), 0.85);
        assert!(insights[0].content.contains("33%"));
    }

    #[test]
    fn partial_days_are_averaged() {
        // 0.5, 1.0, 1.0, 1.0 -> 0.875
        let entries = vec![
            medication(&[true, false], 0),
            medication(&[true, true], 1),
            medication(&[true], 2),
            medication(&[true], 3),
        ];
        assert!(run(&medicated(), &entries).is_empty());
    }

    #[test]
    fn profile_without_medications_is_skipped() {
        let entries: Vec<DetailedEntry> = (0..5).map(|d| medication(&[false], d)).collect();
        assert!(run(&neutral_profile(), &entries).is_empty());
    }

    #[test]
    fn needs_three_logs() {
        let entries = vec![medication(&[false], 0), medication(&[false], 1)];
        assert!(run(&medicated(), &entries).is_empty());
    }

    #[test]
    fn empty_logs_count_as_adherent() {
        let entries: Vec<DetailedEntry> = (0..3).map(|d| medication(&[], d)).collect();
        assert!(run(&medicated(), &entries).is_empty());
    }
}
