//! Vitals Analyzer - systolic blood pressure from recent metric readings.

use tracing::debug;

use super::{ensure_finite, mean, AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::health::metric_types;
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

const WINDOW: usize = 5;
const MIN_READINGS: usize = 2;
/// Systolic mmHg above which the average is elevated.
const SYSTOLIC_ELEVATED_ABOVE: f64 = 140.0;

pub struct VitalsAnalyzer;

impl Analyzer for VitalsAnalyzer {
    fn name(&self) -> &'static str {
        "vitals"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        if let Some(trend) = ctx
            .trends()
            .iter()
            .filter(|t| t.metric_type == metric_types::BLOOD_PRESSURE)
            .max_by_key(|t| t.created_at)
        {
            debug!(
                direction = ?trend.trend,
                change_percent = trend.change_percent,
                "Latest blood pressure trend"
            );
        }

        let readings = ctx.recent_metrics(metric_types::BLOOD_PRESSURE, WINDOW);
        if readings.len() < MIN_READINGS {
            return Ok(Vec::new());
        }

        let avg_systolic = ensure_finite(
            mean(readings.iter().map(|m| m.value)).unwrap_or_default(),
            "average systolic pressure",
        )?;

        if avg_systolic <= SYSTOLIC_ELEVATED_ABOVE {
            return Ok(Vec::new());
        }

        Ok(vec![InsightDraft::new(
            InsightType::Warning,
            InsightCategory::PreventiveCare,
            Priority::High,
            0.9,
            "Elevated Blood Pressure Detected",
            format!(
                "Your recent blood pressure readings average {:.0} mmHg systolic, which is above \
                 normal range. This requires attention and monitoring.",
                avg_systolic
            ),
        )
        .with_data_points(&["blood_pressure"])
        .with_action_items(&[
            "Schedule appointment with healthcare provider",
            "Monitor blood pressure daily",
            "Reduce sodium intake",
            "Increase physical activity gradually",
            "Manage stress through relaxation techniques",
        ])
        .with_tags(&["blood-pressure", "cardiovascular"])])
    }
}
