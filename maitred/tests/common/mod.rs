//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the maitred library end to end against a throwaway database file.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use maitred::database::{Database, DatabaseConfig};
use maitred::{BookingEngine, CreateRequest, Restaurant};

/// Opens a database under `dir`, installs a restaurant with hours
/// 09:00-22:00 and room for 20 tables, and returns the engine.
///
/// # Panics
///
/// Panics if any setup step fails.
#[allow(dead_code)]
#[must_use]
pub fn setup_engine(dir: &Path) -> BookingEngine {
    let db = Database::open(DatabaseConfig::new(dir.join("maitred.db"))).unwrap();
    let restaurant = Restaurant::new(
        "Chez Test",
        "09:00".parse().unwrap(),
        "22:00".parse().unwrap(),
        20,
    )
    .unwrap();
    Database::insert_restaurant(db.connection(), &restaurant).unwrap();
    BookingEngine::new(db).unwrap()
}

/// Returns a UTC instant for the given calendar slot.
///
/// # Panics
///
/// Panics on an invalid date or time.
#[allow(dead_code)]
#[must_use]
pub fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// Builds a create request on 2024-05-01 (a Wednesday) with fixture
/// customer details.
#[allow(dead_code)]
#[must_use]
pub fn request_at(party_size: u32, hour: u32, minute: u32, duration: u32) -> CreateRequest {
    CreateRequest::new(
        "Ada Lovelace",
        "555-0100",
        party_size,
        instant(2024, 5, 1, hour, minute),
        duration,
    )
}
