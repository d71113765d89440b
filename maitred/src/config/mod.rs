//! Configuration for the maitred process.
//!
//! Configuration files are YAML. They carry the database location and the
//! seed data (restaurant record, peak rules) used by first-time
//! initialization; the authoritative copy of the establishment
//! configuration lives in the database as a singleton row.
//!
//! # Examples
//!
//! ```
//! use maitred::config::Config;
//!
//! let config: Config = serde_yaml::from_str(
//!     "restaurant:\n  name: Chez Test\n  opening_time: \"09:00\"\n  closing_time: \"22:00\"\n  max_tables: 20\n",
//! )
//! .unwrap();
//! assert_eq!(config.restaurant.unwrap().name, "Chez Test");
//! ```

mod loader;
mod schema;

pub use loader::{load, load_from_path};
pub use schema::{Config, ConfigBuilder, DatabaseSettings, PeakHourConfig, RestaurantConfig};
