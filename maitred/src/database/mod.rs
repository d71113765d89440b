//! Database layer for persistent storage of the reservation ledger.
//!
//! This module provides a SQLite-based storage layer for the establishment
//! configuration, the table catalog, the reservation ledger, peak-hour
//! rules, and the waitlist, including connection management, schema
//! versioning, and CRUD operations.
//!
//! The catalog side (restaurant, tables, peak rules) is read-mostly; the
//! reservation ledger must always be read fresh inside overlap checks, so
//! every mutating flow runs its reads and its write inside one immediate
//! transaction.
//!
//! # Examples
//!
//! ```no_run
//! use maitred::database::{Database, DatabaseConfig};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/maitred.db");
//! let db = Database::open(config).unwrap();
//!
//! // List all tables
//! let tables = Database::list_tables(db.connection()).unwrap();
//! for table in tables {
//!     println!("{:?}", table);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

pub(crate) use operations::{datetime_to_unix_secs, row_to_table};
