//! Insight engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::{DEFAULT_HISTORY_WINDOW, DEFAULT_METRIC_WINDOW};
use crate::domain::insights::{InsightEngine, DEFAULT_MIN_CONFIDENCE};

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Insights need confidence strictly above this, in [0.6, 1)
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Detailed entries read per generation pass
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Metrics read per generation pass
    #[serde(default = "default_metric_window")]
    pub metric_window: usize,
}

impl EngineConfig {
    /// Builds an engine with the standard analyzers and this threshold.
    pub fn build_engine(&self) -> InsightEngine {
        InsightEngine::new().with_min_confidence(self.min_confidence)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(DEFAULT_MIN_CONFIDENCE..1.0).contains(&self.min_confidence) {
            return Err(ValidationError::InvalidMinConfidence(self.min_confidence));
        }
        if self.history_window == 0 {
            return Err(ValidationError::InvalidHistoryWindow);
        }
        if self.metric_window == 0 {
            return Err(ValidationError::InvalidMetricWindow);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            history_window: default_history_window(),
            metric_window: default_metric_window(),
        }
    }
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

fn default_history_window() -> usize {
    DEFAULT_HISTORY_WINDOW
}

fn default_metric_window() -> usize {
    DEFAULT_METRIC_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_confidence, 0.6);
        assert_eq!(config.history_window, 30);
        assert_eq!(config.metric_window, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_confidence_out_of_range() {
        for bad in [-0.1, 0.3, 0.59, 1.0, f64::NAN] {
            let config = EngineConfig {
                min_confidence: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_low_threshold_still_filters_weak_insights() {
        use crate::domain::insights::analyzers::test_support::{neutral_profile, now};
        use crate::domain::insights::analyzers::{AnalysisContext, Analyzer, AnalyzerError};
        use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

        struct Weak;

        impl Analyzer for Weak {
            fn name(&self) -> &'static str {
                "weak"
            }

            fn analyze(
                &self,
                _ctx: &AnalysisContext<'_>,
            ) -> Result<Vec<InsightDraft>, AnalyzerError> {
                Ok(vec![InsightDraft::new(
                    InsightType::Educational,
                    InsightCategory::General,
                    Priority::Low,
                    0.5,
                    "Weak",
                    "Below the floor",
                )])
            }
        }

        let config = EngineConfig {
            min_confidence: 0.3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidMinConfidence(0.3))
        );

        let engine = InsightEngine::with_analyzers(vec![Box::new(Weak)])
            .with_min_confidence(config.min_confidence);
        assert!(engine
            .generate_insights_at(&neutral_profile(), &[], &[], &[], now())
            .is_empty());
    }

    #[test]
    fn test_zero_windows_rejected() {
        let config = EngineConfig {
            history_window: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHistoryWindow));

        let config = EngineConfig {
            metric_window: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMetricWindow));
    }

    #[test]
    fn test_build_engine_uses_threshold() {
        let config = EngineConfig {
            min_confidence: 0.85,
            ..Default::default()
        };
        assert_eq!(config.build_engine().min_confidence(), 0.85);
    }
}
