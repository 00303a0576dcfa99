//! Health Assist CLI
//!
//! Loads a snapshot into in-memory stores, runs the insight engine and prints
//! the result as JSON. Can also write seeded scenario snapshots.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use health_assist::adapters::{
    FileSnapshotStore, InMemoryHealthStore, InMemoryInsightRepository, InMemoryProfileRepository,
    Scenario, ScenarioSeeder,
};
use health_assist::application::{
    ExportDataCommand, ExportDataHandler, GenerateInsightsCommand, GenerateInsightsHandler,
    ImportDataHandler,
};
use health_assist::config::{AppConfig, LoggingConfig};
use health_assist::domain::foundation::{Timestamp, UserId};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "health-assist")]
#[command(version, about = "Rule-based personal health insights")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate insights from a snapshot file
    Generate {
        #[arg(
            long,
            short,
            help = "Snapshot file (.json, .yaml); defaults to storage.snapshot_path"
        )]
        snapshot: Option<PathBuf>,
        #[arg(long, short, help = "User to evaluate; defaults to the snapshot's profile")]
        user: Option<String>,
        #[arg(long, help = "Evaluation time as RFC 3339; defaults to now")]
        as_of: Option<String>,
        #[arg(long, help = "Write the generated insights back into the snapshot")]
        write_back: bool,
    },

    /// Write a week of scenario data to a snapshot file
    Seed {
        #[arg(help = "Scenario: healthy, at-risk, chronic-condition")]
        scenario: Scenario,
        #[arg(long, short, help = "Snapshot file to write")]
        output: PathBuf,
        #[arg(long, short, default_value = "demo-user")]
        user: String,
    },
}

/// Stores shared by every command.
struct Stores {
    profiles: Arc<InMemoryProfileRepository>,
    records: Arc<InMemoryHealthStore>,
    insights: Arc<InMemoryInsightRepository>,
}

impl Stores {
    fn new(config: &AppConfig) -> Self {
        Self {
            profiles: Arc::new(InMemoryProfileRepository::new()),
            records: Arc::new(InMemoryHealthStore::new()),
            insights: Arc::new(
                InMemoryInsightRepository::new()
                    .with_deduplication(config.storage.deduplicate_insights),
            ),
        }
    }

    fn exporter(&self, store: Arc<FileSnapshotStore>) -> ExportDataHandler {
        ExportDataHandler::new(
            self.profiles.clone(),
            self.records.clone(),
            self.insights.clone(),
            store,
        )
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.log_level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout stays valid JSON.
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Generate {
            snapshot,
            user,
            as_of,
            write_back,
        } => generate(&config, snapshot, user, as_of, write_back).await,
        Commands::Seed {
            scenario,
            output,
            user,
        } => seed(&config, scenario, output, user).await,
    }
}

async fn generate(
    config: &AppConfig,
    snapshot: Option<PathBuf>,
    user: Option<String>,
    as_of: Option<String>,
    write_back: bool,
) -> CliResult<()> {
    let path = snapshot
        .or_else(|| config.storage.snapshot_path.clone().map(PathBuf::from))
        .ok_or("No snapshot given; pass --snapshot or set HEALTH_ASSIST__STORAGE__SNAPSHOT_PATH")?;
    let file = Arc::new(FileSnapshotStore::new(&path)?);
    let stores = Stores::new(config);

    let imported = ImportDataHandler::new(
        file.clone(),
        stores.profiles.clone(),
        stores.records.clone(),
        stores.insights.clone(),
    )
    .handle()
    .await?;

    let user_id = match user {
        Some(id) => UserId::new(id)?,
        None => imported
            .profile_id
            .ok_or("Snapshot has no profile; pass --user")?,
    };

    let mut command = GenerateInsightsCommand::new(user_id.clone());
    if let Some(at) = as_of {
        command = command.as_of(Timestamp::parse(&at)?);
    }

    let engine = Arc::new(config.engine.build_engine());
    let result = GenerateInsightsHandler::new(
        stores.profiles.clone(),
        stores.records.clone(),
        stores.insights.clone(),
        engine,
    )
    .with_windows(config.engine.history_window, config.engine.metric_window)
    .handle(command)
    .await?;

    for diagnostic in &result.diagnostics {
        eprintln!("warning: {} analyzer skipped: {}", diagnostic.analyzer, diagnostic.message);
    }
    println!("{}", serde_json::to_string_pretty(&result.insights)?);

    if write_back {
        stores
            .exporter(file)
            .handle(ExportDataCommand { user_id })
            .await?;
        info!(path = %path.display(), saved = result.saved, "Insights written back");
    }
    Ok(())
}

async fn seed(
    config: &AppConfig,
    scenario: Scenario,
    output: PathBuf,
    user: String,
) -> CliResult<()> {
    let user_id = UserId::new(user)?;
    let file = Arc::new(FileSnapshotStore::new(&output)?);
    let stores = Stores::new(config);

    let summary = ScenarioSeeder::new(stores.profiles.clone(), stores.records.clone())
        .seed(&user_id, scenario, Timestamp::now())
        .await?;
    stores
        .exporter(file)
        .handle(ExportDataCommand { user_id })
        .await?;

    println!(
        "Wrote {} scenario ({} entries, {} metrics) to {}",
        summary.scenario,
        summary.entries,
        summary.metrics,
        output.display()
    );
    Ok(())
}
