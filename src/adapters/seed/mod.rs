//! Scenario Seeding
//!
//! Writes a week of representative data for a named health scenario
//! through the record ports. Values are fixed so seeded data always
//! produces the same insights.

mod scenario;

pub use scenario::{Scenario, ScenarioSeeder, SeedSummary};
