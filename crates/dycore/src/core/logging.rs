//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (stderr + file)
//! - A startup summary of the effective configuration

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both terminal and file output
///
/// Terminal output goes to stderr so stdout stays reserved for results.
///
/// # Arguments
/// * `log_file_path` - Path to the log file
/// * `level` - Maximum level written to both sinks
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger was already set
pub fn init_logger(log_file_path: &str, level: LevelFilter) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration once at startup
pub fn log_startup_configuration() {
    log::debug!("Log file: {}", config::LOG_FILE_PATH.as_str());
    log::debug!("Log level: {}", *config::LOG_LEVEL);

    match config::proxy::DOUYIN_PROXY.as_deref().and_then(config::proxy::normalize) {
        Some(proxy_url) => log::info!("DOUYIN_PROXY: {}", proxy_url),
        None => log::debug!("DOUYIN_PROXY: not set, using a direct connection"),
    }
}
