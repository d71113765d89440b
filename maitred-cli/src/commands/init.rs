//! Init command implementation.
//!
//! Installs the restaurant's singleton configuration record and any peak
//! rules listed in the configuration file. The database schema itself is
//! created automatically on first open.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use maitred::Database;

/// Install the restaurant configuration and peak rules.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let Some(ref seed) = config.restaurant else {
            return Err(CliError::Config(
                "the configuration file has no 'restaurant' section".to_string(),
            ));
        };
        let restaurant = seed.to_record()?;

        let db = open_database(global, &config)?;
        Database::insert_restaurant(db.connection(), &restaurant)?;

        for rule in &config.peak_hours {
            let (window_start, window_end) = rule.parsed_window()?;
            Database::insert_peak_rule(
                db.connection(),
                rule.day_of_week,
                window_start,
                window_end,
                rule.max_duration_minutes,
            )?;
        }

        println!(
            "Initialized '{}' ({}-{}, up to {} tables, {} peak rule(s))",
            restaurant.name(),
            restaurant.opening(),
            restaurant.closing(),
            restaurant.max_tables(),
            config.peak_hours.len()
        );
        Ok(())
    }
}
