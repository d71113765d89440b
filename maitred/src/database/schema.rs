//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the maitred reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the restaurant table.
///
/// Exactly one configuration row may exist: the primary key is pinned to 1
/// by a CHECK constraint, so the one-row invariant is enforced at the
/// storage boundary rather than by convention.
pub const CREATE_RESTAURANT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS restaurant (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        name TEXT NOT NULL,
        opening_time TEXT NOT NULL,
        closing_time TEXT NOT NULL,
        max_tables INTEGER NOT NULL CHECK (max_tables > 0)
    )";

/// SQL statement to create the tables catalog.
///
/// The table number carries a UNIQUE constraint so duplicate numbers are
/// rejected at the storage boundary under concurrent load.
pub const CREATE_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS tables (
        id INTEGER PRIMARY KEY,
        table_number INTEGER NOT NULL UNIQUE CHECK (table_number > 0),
        capacity INTEGER NOT NULL CHECK (capacity > 0)
    )";

/// SQL statement to create the reservations ledger.
///
/// Slots are stored as Unix epoch seconds with a CHECK that the interval
/// is non-empty. Overlap checks consider only rows with status
/// 'confirmed'.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY,
        table_id INTEGER NOT NULL REFERENCES tables(id),
        customer_name TEXT NOT NULL,
        customer_phone TEXT NOT NULL,
        party_size INTEGER NOT NULL CHECK (party_size > 0),
        start_time INTEGER NOT NULL,
        end_time INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'confirmed',
        CHECK (end_time > start_time)
    )";

/// SQL statement to create the peak-hours table.
pub const CREATE_PEAK_HOURS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS peak_hours (
        id INTEGER PRIMARY KEY,
        day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
        start_hour TEXT NOT NULL,
        end_hour TEXT NOT NULL,
        max_duration_minutes INTEGER NOT NULL CHECK (max_duration_minutes > 0)
    )";

/// SQL statement to create the waitlist table.
pub const CREATE_WAITLIST_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS waitlist (
        id INTEGER PRIMARY KEY,
        customer_name TEXT NOT NULL,
        customer_phone TEXT NOT NULL,
        party_size INTEGER NOT NULL CHECK (party_size > 0),
        requested_time INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'waiting'
    )";

/// SQL statement to create the index over (table, slot start).
///
/// This index backs the overlap checks and the anti-join free-table query.
pub const CREATE_RESERVATION_SLOT_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_table_time
    ON reservations(table_id, start_time)";

/// SQL statement to create an index on reservation status.
///
/// Overlap checks filter on confirmed rows; this keeps cancelled history
/// out of the scan.
pub const CREATE_RESERVATION_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// SQL statement to create an index on the peak-rule weekday.
pub const CREATE_PEAK_DAY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_peak_hours_day ON peak_hours(day_of_week)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
