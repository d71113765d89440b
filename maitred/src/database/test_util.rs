//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple test modules.

use chrono::{DateTime, TimeZone, Utc};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::Reservation;
use crate::restaurant::Restaurant;
use crate::slot::TimeSlot;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Returns a restaurant record with hours 09:00-22:00 and room for 20
/// tables.
///
/// # Panics
///
/// Panics if the record cannot be constructed.
#[must_use]
pub fn sample_restaurant() -> Restaurant {
    Restaurant::new(
        "Chez Test",
        "09:00".parse().unwrap(),
        "22:00".parse().unwrap(),
        20,
    )
    .unwrap()
}

/// Returns an instant on 2024-05-01 (a Wednesday) at the given wall time.
///
/// # Panics
///
/// Panics on an invalid wall time.
#[must_use]
pub fn instant_at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
}

/// Returns a slot on 2024-05-01 starting at the given wall time.
///
/// # Panics
///
/// Panics on an invalid wall time or duration.
#[must_use]
pub fn slot_at(hour: u32, minute: u32, duration_minutes: u32) -> TimeSlot {
    TimeSlot::from_start_duration(instant_at(hour, minute), duration_minutes).unwrap()
}

/// Builds a confirmed reservation draft for the given table and slot.
///
/// The identifier is a placeholder; `Database::insert_reservation` assigns
/// the real one.
///
/// # Panics
///
/// Panics if the draft cannot be built.
#[must_use]
pub fn draft_reservation(table_id: i64, slot: TimeSlot, party_size: u32) -> Reservation {
    Reservation::builder(0, table_id, slot)
        .customer_name("Ada Lovelace")
        .customer_phone("555-0100")
        .party_size(party_size)
        .build()
        .unwrap()
}
