//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::restaurant::Restaurant;
use crate::slot::TimeOfDay;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use maitred::config::{Config, RestaurantConfig};
///
/// let config = Config {
///     restaurant: Some(RestaurantConfig {
///         name: "Chez Test".to_string(),
///         opening_time: "09:00".to_string(),
///         closing_time: "22:00".to_string(),
///         max_tables: 20,
///     }),
///     ..Default::default()
/// };
/// assert!(config.restaurant.is_some());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed data for the establishment's singleton configuration record.
    pub restaurant: Option<RestaurantConfig>,

    /// Seed data for peak-hour rules.
    #[serde(default)]
    pub peak_hours: Vec<PeakHourConfig>,

    /// Database settings.
    pub database: Option<DatabaseSettings>,

    /// Log mode override ("quiet", "normal", or "verbose").
    pub log_mode: Option<String>,
}

/// Establishment seed configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RestaurantConfig {
    /// The establishment's name.
    pub name: String,
    /// Opening time in `HH:MM` form.
    pub opening_time: String,
    /// Closing time in `HH:MM` form.
    pub closing_time: String,
    /// Ceiling on provisioned tables.
    pub max_tables: u32,
}

impl RestaurantConfig {
    /// Converts the seed configuration into the domain record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the times do not parse or the record
    /// invariants fail.
    pub fn to_record(&self) -> Result<Restaurant> {
        let opening: TimeOfDay = self.opening_time.parse()?;
        let closing: TimeOfDay = self.closing_time.parse()?;
        Ok(Restaurant::new(
            self.name.as_str(),
            opening,
            closing,
            self.max_tables,
        )?)
    }
}

/// Peak-hour rule seed configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PeakHourConfig {
    /// Weekday the rule applies to (0 = Sunday).
    pub day_of_week: u8,
    /// Window start in `HH:MM` form.
    pub start_hour: String,
    /// Window end in `HH:MM` form.
    pub end_hour: String,
    /// Maximum duration in minutes within the window.
    pub max_duration_minutes: u32,
}

impl PeakHourConfig {
    /// Parses the rule's window bounds.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either bound does not parse.
    pub fn parsed_window(&self) -> Result<(TimeOfDay, TimeOfDay)> {
        let start: TimeOfDay = self.start_hour.parse()?;
        let end: TimeOfDay = self.end_hour.parse()?;
        Ok((start, end))
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Path to the database file.
    pub path: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Builder for programmatic configuration construction.
///
/// # Examples
///
/// ```
/// use maitred::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().log_mode("verbose").build();
/// assert_eq!(config.log_mode.as_deref(), Some("verbose"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a builder over an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the restaurant seed configuration.
    #[must_use]
    pub fn restaurant(mut self, restaurant: RestaurantConfig) -> Self {
        self.config.restaurant = Some(restaurant);
        self
    }

    /// Appends a peak-hour rule.
    #[must_use]
    pub fn peak_hour(mut self, rule: PeakHourConfig) -> Self {
        self.config.peak_hours.push(rule);
        self
    }

    /// Sets the database settings.
    #[must_use]
    pub fn database(mut self, database: DatabaseSettings) -> Self {
        self.config.database = Some(database);
        self
    }

    /// Sets the log mode.
    #[must_use]
    pub fn log_mode(mut self, mode: impl Into<String>) -> Self {
        self.config.log_mode = Some(mode.into());
        self
    }

    /// Returns the built configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
