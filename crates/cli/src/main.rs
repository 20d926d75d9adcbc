mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use cognita_core::{load_settings, load_settings_from, metrics, ResearchOrchestrator, Settings};

use logging::LogConfig;

/// Run a research query against the Deep Research API and print the
/// summarized results as JSON.
#[derive(Debug, Parser)]
#[command(name = "cognita", version)]
struct Cli {
    /// Research question (at least 10 characters after trimming)
    query: String,

    /// TOML settings file; environment variables override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory where cognita.log is written
    #[arg(long, value_name = "DIR", default_value = ".")]
    log_dir: PathBuf,

    /// Print Prometheus metrics to stderr after the query
    #[arg(long)]
    metrics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing .env file is fine; the environment is read either way.
    let dotenv = dotenvy::dotenv();

    let _log_guard = match logging::init(&LogConfig {
        log_dir: cli.log_dir.clone(),
        verbose: cli.verbose,
    }) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Ok(path) = dotenv {
        info!("Loaded environment from {:?}", path);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = load(&cli)?;

    let registry = metrics::registry().context("Failed to register metrics")?;

    let orchestrator =
        ResearchOrchestrator::from_settings(settings).context("Failed to create research client")?;

    info!("Executing query: {}", cli.query.trim());
    let result = orchestrator.execute(&cli.query).await;

    if cli.metrics {
        eprint!("{}", metrics::encode(&registry));
    }

    let result = result.context("Research query failed")?;
    let output = serde_json::to_string_pretty(&result).context("Failed to serialize results")?;
    println!("{}", output);

    Ok(())
}

fn load(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => {
            info!("Loading settings from {:?}", path);
            load_settings_from(path)
                .with_context(|| format!("Failed to load settings from {:?}", path))
        }
        None => load_settings().context("Failed to load settings"),
    }
}
