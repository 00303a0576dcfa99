//! Insight Engine - runs every analyzer and merges their results.
//!
//! The engine holds no mutable state. Each call evaluates all analyzers
//! independently, isolates failures per analyzer, applies one global
//! confidence filter and stamps the surviving drafts into [`Insight`]s.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::analyzers::{default_analyzers, AnalysisContext, Analyzer};
use super::Insight;
use crate::domain::foundation::Timestamp;
use crate::domain::health::{DetailedEntry, HealthTrend, MetricRecord, Profile};

/// Insights must have confidence strictly above this to be emitted.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Why one analyzer contributed nothing to a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerDiagnostic {
    pub analyzer: String,
    pub message: String,
}

/// Result of one generation pass.
#[derive(Debug, Clone, Default)]
pub struct InsightBatch {
    /// Emitted insights, in analyzer order.
    pub insights: Vec<Insight>,
    /// One entry per analyzer that failed.
    pub diagnostics: Vec<AnalyzerDiagnostic>,
    /// Drafts dropped by the confidence filter.
    pub filtered_out: usize,
}

impl InsightBatch {
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }
}

/// Stateless orchestrator over a fixed set of analyzers.
pub struct InsightEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
    min_confidence: f64,
}

impl InsightEngine {
    /// Engine with the eight standard analyzers and the default threshold.
    pub fn new() -> Self {
        Self {
            analyzers: default_analyzers(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Engine over a custom analyzer set.
    pub fn with_analyzers(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self {
            analyzers,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Raises the confidence threshold. Values below
    /// [`DEFAULT_MIN_CONFIDENCE`] (or NaN) leave the default floor in place.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence.max(DEFAULT_MIN_CONFIDENCE);
        self
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Generates insights as of the current time.
    pub fn generate_insights(
        &self,
        profile: &Profile,
        metrics: &[MetricRecord],
        entries: &[DetailedEntry],
        trends: &[HealthTrend],
    ) -> InsightBatch {
        self.generate_insights_at(profile, metrics, entries, trends, Timestamp::now())
    }

    /// Generates insights as of `now`.
    ///
    /// Inputs need not be sorted. An analyzer that fails is recorded as a
    /// diagnostic and the others still contribute.
    pub fn generate_insights_at(
        &self,
        profile: &Profile,
        metrics: &[MetricRecord],
        entries: &[DetailedEntry],
        trends: &[HealthTrend],
        now: Timestamp,
    ) -> InsightBatch {
        let ctx = AnalysisContext::new(profile, metrics, entries, trends, now);
        let mut batch = InsightBatch::default();

        for analyzer in &self.analyzers {
            let drafts = match analyzer.analyze(&ctx) {
                Ok(drafts) => drafts,
                Err(err) => {
                    warn!(
                        user_id = %profile.id,
                        analyzer = analyzer.name(),
                        error = %err,
                        "Analyzer failed, skipping its results"
                    );
                    batch.diagnostics.push(AnalyzerDiagnostic {
                        analyzer: analyzer.name().to_string(),
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            debug!(analyzer = analyzer.name(), count = drafts.len(), "Analyzer finished");

            for draft in drafts {
                if draft.confidence.exceeds(self.min_confidence) {
                    batch
                        .insights
                        .push(Insight::from_draft(draft, profile.id.clone(), now));
                } else {
                    batch.filtered_out += 1;
                }
            }
        }

        debug!(
            user_id = %profile.id,
            count = batch.insights.len(),
            filtered_out = batch.filtered_out,
            failed = batch.diagnostics.len(),
            "Insight generation complete"
        );

        batch
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::health::metric_types;
    use crate::domain::insights::analyzers::test_support::*;
    use crate::domain::insights::analyzers::AnalyzerError;
    use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};
    use proptest::prelude::*;

    struct FixedAnalyzer {
        confidence: f64,
    }

    impl Analyzer for FixedAnalyzer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
            Ok(vec![InsightDraft::new(
                InsightType::Educational,
                InsightCategory::General,
                Priority::Low,
                self.confidence,
                "Fixed",
                "Always emitted",
            )])
        }
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
            Err(AnalyzerError::NonFiniteResult { quantity: "anything" })
        }
    }

    #[test]
    fn default_engine_runs_eight_analyzers() {
        let engine = InsightEngine::default();
        assert_eq!(engine.analyzer_names().len(), 8);
        assert_eq!(engine.min_confidence(), DEFAULT_MIN_CONFIDENCE);
    }

    #[test]
    fn empty_history_yields_nothing_for_neutral_profile() {
        let batch =
            InsightEngine::new().generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        assert!(batch.is_empty());
        assert!(batch.diagnostics.is_empty());
    }

    #[test]
    fn low_confidence_draft_is_filtered() {
        let engine = InsightEngine::with_analyzers(vec![
            Box::new(FixedAnalyzer { confidence: 0.5 }),
            Box::new(FixedAnalyzer { confidence: 0.9 }),
        ]);
        let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.insights[0].confidence.value(), 0.9);
        assert_eq!(batch.filtered_out, 1);
    }

    #[test]
    fn threshold_itself_is_filtered() {
        let engine =
            InsightEngine::with_analyzers(vec![Box::new(FixedAnalyzer { confidence: 0.6 })]);
        let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        assert!(batch.is_empty());
    }

    #[test]
    fn custom_threshold_applies() {
        let engine =
            InsightEngine::with_analyzers(vec![Box::new(FixedAnalyzer { confidence: 0.85 })])
                .with_min_confidence(0.9);
        assert!(engine
            .generate_insights_at(&neutral_profile(), &[], &[], &[], now())
            .is_empty());
    }

    #[test]
    fn threshold_cannot_drop_below_default_floor() {
        let engine =
            InsightEngine::with_analyzers(vec![Box::new(FixedAnalyzer { confidence: 0.5 })])
                .with_min_confidence(0.3);
        assert_eq!(engine.min_confidence(), DEFAULT_MIN_CONFIDENCE);
        let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        assert!(batch.is_empty());
        assert_eq!(batch.filtered_out, 1);
    }

    #[test]
    fn failing_analyzer_does_not_block_others() {
        let engine = InsightEngine::with_analyzers(vec![
            Box::new(FailingAnalyzer),
            Box::new(FixedAnalyzer { confidence: 0.9 }),
        ]);
        let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.diagnostics.len(), 1);
        assert_eq!(batch.diagnostics[0].analyzer, "failing");
    }

    #[test]
    fn insights_are_stamped_for_the_profile_owner() {
        let engine =
            InsightEngine::with_analyzers(vec![Box::new(FixedAnalyzer { confidence: 0.9 })]);
        let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());
        let insight = &batch.insights[0];
        assert_eq!(insight.user_id, user());
        assert_eq!(insight.created_at, now());
        assert!(!insight.is_read);
        assert!(!insight.is_favorited);
        assert!(insight.related_insights.is_empty());
    }

    #[test]
    fn invalid_profile_only_stops_profile_dependent_analyzers() {
        let mut profile = neutral_profile();
        profile.height_cm = 0.0;
        let entries: Vec<_> = (0..3).map(|d| sleep(5.0, 4, d)).collect();

        let batch = InsightEngine::new().generate_insights_at(&profile, &[], &entries, &[], now());

        let failed: Vec<&str> = batch.diagnostics.iter().map(|d| d.analyzer.as_str()).collect();
        assert_eq!(failed, vec!["weight", "preventive_care"]);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.insights[0].title, "Insufficient Sleep Duration");
    }

    #[test]
    fn unsorted_input_is_ordered_before_analysis() {
        let profile = neutral_profile();
        // Two old low readings would be excluded if ordering were ignored.
        let metrics: Vec<_> = vec![
            metric(metric_types::BLOOD_PRESSURE, 100.0, 30),
            metric(metric_types::BLOOD_PRESSURE, 150.0, 0),
            metric(metric_types::BLOOD_PRESSURE, 100.0, 31),
            metric(metric_types::BLOOD_PRESSURE, 150.0, 1),
            metric(metric_types::BLOOD_PRESSURE, 150.0, 2),
            metric(metric_types::BLOOD_PRESSURE, 150.0, 3),
            metric(metric_types::BLOOD_PRESSURE, 150.0, 4),
        ];
        let batch = InsightEngine::new().generate_insights_at(&profile, &metrics, &[], &[], now());
        assert_eq!(batch.len(), 1);
        assert!(batch.insights[0].content.contains("150 mmHg"));
    }

    type Summary = (InsightType, InsightCategory, Priority, String, String);

    fn sleep_strategy() -> impl Strategy<Value = Vec<(f64, u8)>> {
        prop::collection::vec((0.0f64..12.0, 1u8..=5), 0..10)
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(
            nights in sleep_strategy(),
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
        ) {
            let mut profile = neutral_profile();
            profile.weight_kg = weight;
            profile.height_cm = height;
            let entries: Vec<_> = nights
                .iter()
                .enumerate()
                .map(|(i, (h, q))| sleep(*h, *q, i as i64))
                .collect();
            let engine = InsightEngine::new();

            let first = engine.generate_insights_at(&profile, &[], &entries, &[], now());
            let second = engine.generate_insights_at(&profile, &[], &entries, &[], now());

            let summary = |b: &InsightBatch| -> Vec<Summary> {
                b.insights
                    .iter()
                    .map(|i| {
                        (
                            i.insight_type,
                            i.category,
                            i.priority,
                            i.confidence.to_string(),
                            i.content.clone(),
                        )
                    })
                    .collect()
            };
            prop_assert_eq!(summary(&first), summary(&second));
        }

        #[test]
        fn every_emitted_insight_clears_the_threshold(
            confidences in prop::collection::vec(0.0f64..=1.0, 0..8),
            threshold in 0.0f64..1.0,
        ) {
            let analyzers: Vec<Box<dyn Analyzer>> = confidences
                .iter()
                .map(|c| Box::new(FixedAnalyzer { confidence: *c }) as Box<dyn Analyzer>)
                .collect();
            let engine = InsightEngine::with_analyzers(analyzers).with_min_confidence(threshold);

            let batch = engine.generate_insights_at(&neutral_profile(), &[], &[], &[], now());

            let floor = threshold.max(DEFAULT_MIN_CONFIDENCE);
            prop_assert!(batch.insights.iter().all(|i| i.confidence.value() > floor));
            prop_assert_eq!(batch.len() + batch.filtered_out, confidences.len());
        }
    }
}
