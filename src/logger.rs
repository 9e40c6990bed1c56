//! File logging setup
//!
//! Logging is disabled by default and enabled through [`LoggingConfig`];
//! records go to a file, never to the terminal the TUI owns.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the global logger according to configuration.
///
/// A no-op when logging is disabled. Must be called before the first log
/// record is emitted.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_file = fern::log_file(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging initialized");
    Ok(())
}
