//! Integration tests for the seeded healthy, at-risk and chronic-condition
//! scenarios, including a snapshot round trip through the file store.

use std::sync::Arc;
use tempfile::TempDir;

use health_assist::adapters::{
    FileSnapshotStore, InMemoryHealthStore, InMemoryInsightRepository, InMemoryProfileRepository,
    Scenario, ScenarioSeeder,
};
use health_assist::application::{
    ExportDataCommand, ExportDataHandler, GenerateInsightsCommand, GenerateInsightsHandler,
    ImportDataHandler,
};
use health_assist::domain::foundation::{Timestamp, UserId};
use health_assist::domain::insights::InsightEngine;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn user() -> UserId {
    UserId::new("demo-user").unwrap()
}

/// The scenario persona is born 1985-06-15, so 39 at this date.
fn now() -> Timestamp {
    Timestamp::parse("2024-06-01T12:00:00Z").unwrap()
}

struct App {
    profiles: Arc<InMemoryProfileRepository>,
    records: Arc<InMemoryHealthStore>,
    insights: Arc<InMemoryInsightRepository>,
}

impl App {
    fn new() -> Self {
        Self {
            profiles: Arc::new(InMemoryProfileRepository::new()),
            records: Arc::new(InMemoryHealthStore::new()),
            insights: Arc::new(InMemoryInsightRepository::new()),
        }
    }

    async fn seed(&self, scenario: Scenario) {
        ScenarioSeeder::new(self.profiles.clone(), self.records.clone())
            .seed(&user(), scenario, now())
            .await
            .unwrap();
    }

    async fn titles_at(&self, at: Timestamp) -> Vec<String> {
        GenerateInsightsHandler::new(
            self.profiles.clone(),
            self.records.clone(),
            self.insights.clone(),
            Arc::new(InsightEngine::new()),
        )
        .handle(GenerateInsightsCommand::new(user()).as_of(at))
        .await
        .unwrap()
        .insights
        .into_iter()
        .map(|i| i.title)
        .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn healthy_scenario_earns_an_exercise_achievement() {
    let app = App::new();
    app.seed(Scenario::Healthy).await;

    assert_eq!(app.titles_at(now()).await, vec!["Excellent Exercise Consistency!"]);
}

#[tokio::test]
async fn at_risk_scenario_raises_every_lifestyle_warning() {
    let app = App::new();
    app.seed(Scenario::AtRisk).await;

    assert_eq!(
        app.titles_at(now()).await,
        vec![
            "Weight Management Opportunity",
            "Insufficient Sleep Duration",
            "Poor Sleep Quality Detected",
            "Increase Physical Activity",
            "Elevated Blood Pressure Detected",
            "Elevated Stress Levels Detected",
            "Concerning Mood Patterns",
        ]
    );
}

#[tokio::test]
async fn chronic_scenario_flags_weight_and_adds_screening_after_forty() {
    let app = App::new();
    app.seed(Scenario::ChronicCondition).await;

    assert_eq!(
        app.titles_at(now()).await,
        vec!["Significant Weight Management Needed"]
    );

    let next_year = Timestamp::parse("2025-06-01T12:00:00Z").unwrap();
    assert_eq!(
        app.titles_at(next_year).await,
        vec![
            "Significant Weight Management Needed",
            "Important Health Screenings for Your 40s",
        ]
    );
}

#[tokio::test]
async fn yaml_snapshot_round_trip_preserves_generated_insights() {
    let dir = TempDir::new().unwrap();
    let file = Arc::new(FileSnapshotStore::new(dir.path().join("at-risk.yaml")).unwrap());

    let source = App::new();
    source.seed(Scenario::AtRisk).await;
    let before = source.titles_at(now()).await;
    ExportDataHandler::new(
        source.profiles.clone(),
        source.records.clone(),
        source.insights.clone(),
        file.clone(),
    )
    .handle(ExportDataCommand { user_id: user() })
    .await
    .unwrap();

    let target = App::new();
    let imported = ImportDataHandler::new(
        file,
        target.profiles.clone(),
        target.records.clone(),
        target.insights.clone(),
    )
    .handle()
    .await
    .unwrap();

    assert_eq!(imported.insights, before.len());
    assert_eq!(target.insights.len().await, before.len());
    assert_eq!(target.titles_at(now()).await, before);
}
