//! Insights Module - the rule-based insight engine.
//!
//! # Components
//!
//! - `Insight` / `InsightDraft` - the engine's output, before and after stamping
//! - `Analyzer` - one pure rule set per health domain, eight in total
//! - `InsightEngine` - runs the analyzers, isolates failures, filters by confidence
//!
//! Nothing here performs I/O. History is read at the boundary and passed in.

pub mod analyzers;
mod engine;
mod insight;

pub use analyzers::{default_analyzers, AnalysisContext, Analyzer, AnalyzerError};
pub use engine::{AnalyzerDiagnostic, InsightBatch, InsightEngine, DEFAULT_MIN_CONFIDENCE};
pub use insight::{Insight, InsightCategory, InsightDraft, InsightType, Priority};
