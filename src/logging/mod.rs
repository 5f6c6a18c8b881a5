//! Structured logging for cover analysis runs
//!
//! Every run gets a correlation id carried on a root span so file logs from
//! different runs can be told apart.

pub mod config;
pub mod spans;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

pub use config::LoggingConfig;
pub use spans::{ItemSpan, RunSpan};

/// Initialize the logging system.
///
/// The returned guard keeps the file writer alive; hold it until exit.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            config.effective_level(verbosity)
        ))
    });

    let mut layers = Vec::new();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(config.include_file_location)
        .with_file(config.include_file_location);
    layers.push(console_layer.boxed());

    let mut guard = None;
    if let Some(ref log_dir) = config.log_directory {
        let file_appender = tracing_appender::rolling::daily(log_dir, "cover-analyzer.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_timer(ChronoUtc::rfc_3339())
            .json();
        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    tracing::debug!("Logging system initialized with config: {:?}", config);
    Ok(guard)
}

/// Generate a correlation id for one run
pub fn new_run_id() -> Uuid {
    Uuid::new_v4()
}
