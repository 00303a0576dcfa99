//! Health Assist - Personal health tracking with a rule-based insight engine
//!
//! This crate records health metrics and detailed daily entries, and turns a
//! user's recent history into prioritized, natural-language insights using
//! eight deterministic analyzers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
