//! Preventive Care Analyzer - age-banded screening reminders.

use super::{AnalysisContext, Analyzer, AnalyzerError};
use crate::domain::insights::{InsightCategory, InsightDraft, InsightType, Priority};

/// Screening bands by age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningBand {
    Forties,
    FiftyPlus,
}

impl ScreeningBand {
    pub fn for_age(age: i32) -> Option<Self> {
        match age {
            40..=49 => Some(ScreeningBand::Forties),
            a if a >= 50 => Some(ScreeningBand::FiftyPlus),
            _ => None,
        }
    }
}

pub struct PreventiveCareAnalyzer;

impl Analyzer for PreventiveCareAnalyzer {
    fn name(&self) -> &'static str {
        "preventive_care"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<InsightDraft>, AnalyzerError> {
        let profile = ctx.profile()?;
        let age = profile.age_in_years(&ctx.now());

        let draft = match ScreeningBand::for_age(age) {
            None => return Ok(Vec::new()),
            Some(ScreeningBand::Forties) => InsightDraft::new(
                InsightType::Educational,
                InsightCategory::PreventiveCare,
                Priority::Medium,
                0.95,
                "Important Health Screenings for Your 40s",
                "Your age group should focus on cardiovascular health monitoring, diabetes \
                 prevention, and cancer screenings. Early detection is key to maintaining \
                 long-term health.",
            )
            .with_action_items(&[
                "Annual blood pressure and cholesterol checks",
                "Diabetes screening every 3 years",
                "Mammogram (women) or prostate screening (men)",
                "Skin cancer screening annually",
                "Eye exam every 2 years",
            ]),
            Some(ScreeningBand::FiftyPlus) => InsightDraft::new(
                InsightType::Educational,
                InsightCategory::PreventiveCare,
                Priority::High,
                0.95,
                "Essential Health Screenings After 50",
                "Your age group has increased focus on cancer screenings, bone health, and \
                 cardiovascular monitoring. Regular preventive care becomes even more critical.",
            )
            .with_action_items(&[
                "Colonoscopy every 10 years (or as recommended)",
                "Annual mammogram (women)",
                "Bone density screening",
                "Annual eye exam including glaucoma screening",
                "Cardiovascular risk assessment",
            ]),
        };

        Ok(vec![draft
            .with_data_points(&["age"])
            .with_tags(&["preventive-care", "screening", "age-specific"])])
    }
}
