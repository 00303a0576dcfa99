//! Domain layer containing health records and the insight engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `health` - Profile, metrics, detailed entries and trends
//! - `insights` - Insight types, the eight analyzers and the engine

pub mod foundation;
pub mod health;
pub mod insights;
