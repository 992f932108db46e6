use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Logs go to a timestamped file under `log_dir` when one is given and to
/// stderr otherwise, so stdout only ever carries the report.
pub fn init_logger(log_dir: Option<&Path>) -> Result<()> {
    let writer = match log_dir {
        Some(dir) => {
            // Create log directory if it doesn't exist
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            }

            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            let log_file = dir.join(format!("data_extraction_{}.log", timestamp));
            let file = fs::File::create(&log_file)
                .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Logger initialized");

    Ok(())
}
