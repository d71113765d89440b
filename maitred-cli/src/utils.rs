//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, argument parsing,
//! and output formatting.

use crate::error::CliError;
use chrono::{DateTime, NaiveDate, Utc};
use maitred::database::{resolve_database_path, Database, DatabaseConfig};
use maitred::{BookingEngine, Config};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to a configuration file.
    pub config: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Load configuration.
///
/// Uses the explicit `--config` path when given, otherwise the library's
/// resolution order (`MAITRED_CONFIG`, then `~/.maitred/maitred.yaml`,
/// then defaults).
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = match &global.config {
        Some(path) => maitred::config::load_from_path(path),
        None => maitred::config::load(),
    };
    config.map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
fn resolve_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    // Priority: --data-dir > config file > environment/default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("maitred.db"));
    }

    if let Some(path) = config.database.as_ref().and_then(|d| d.path.clone()) {
        return Ok(path);
    }

    resolve_database_path().map_err(CliError::from)
}

/// Open the database with configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_path(global, config)?;

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config
        .database
        .as_ref()
        .and_then(|d| d.maximum_lock_wait_seconds)
    {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Open the database and construct the booking engine.
pub fn open_engine(global: &GlobalOptions, config: &Config) -> Result<BookingEngine, CliError> {
    let db = open_database(global, config)?;
    let logger = maitred::init_logger(global.verbose, global.quiet);
    Ok(BookingEngine::new(db)?.with_logger(logger))
}

/// Parse an RFC 3339 timestamp argument into a UTC instant.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidArguments(format!("invalid timestamp '{text}': {e}")))
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(text: &str) -> Result<NaiveDate, CliError> {
    text.parse::<NaiveDate>()
        .map_err(|e| CliError::InvalidArguments(format!("invalid date '{text}': {e}")))
}

/// Format an instant for display.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Serialize a value as pretty JSON for `--json` output.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
