use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(env_filter);
    let writer = build_writer(config)?;

    match config.format.as_str() {
        "json" => {
            let fmt_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(writer);

            registry
                .with(fmt_layer)
                .try_init()
                .context("Failed to install JSON subscriber")?;
        }
        _ => {
            let fmt_layer = fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_writer(writer);

            registry
                .with(fmt_layer)
                .try_init()
                .context("Failed to install text subscriber")?;
        }
    }

    tracing::debug!("Logging initialized with level: {}", config.level);
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

// Logs go to stderr so stdout stays free for command output.
fn build_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    match &config.file_path {
        Some(file_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)
                .with_context(|| format!("Failed to open log file {}", file_path))?;
            Ok(BoxMakeWriter::new(std::sync::Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::stderr)),
    }
}
