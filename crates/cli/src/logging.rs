//! Process-wide logging setup.
//!
//! Called once from `main` before anything else runs. Library code only
//! emits `tracing` events; this is the single place where sinks are attached:
//! human-readable lines on stderr plus a plain-text `cognita.log` file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Name of the log file written inside the log directory.
pub const LOG_FILE_NAME: &str = "cognita.log";

/// Logging options taken from the command line.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory receiving [`LOG_FILE_NAME`].
    pub log_dir: PathBuf,
    /// Debug output for the cognita crates.
    pub verbose: bool,
}

/// Install the console and file layers.
///
/// The returned guard flushes the file writer on drop and must be held
/// until the process is about to exit.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", config.log_dir))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(config.verbose));

    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(env_filter(config.verbose));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// `RUST_LOG` wins when set; otherwise info, or debug for our own crates.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,cognita=debug,cognita_core=debug"
    } else {
        "info"
    }
}
