//! Slot validation against operating hours and peak-hour rules.
//!
//! Validation runs before allocation in every decision flow and never
//! touches the ledger: a failed check aborts the flow with the state
//! unchanged. Duration bounds (for example 30-180 minutes) are the
//! upstream validation collaborator's responsibility and are not
//! re-checked here; only the business-hour and peak-hour rules are.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::restaurant::Restaurant;
use crate::slot::TimeSlot;

/// Validates candidate slots for one establishment.
///
/// Holds a reference to the establishment's configuration record; peak
/// rules are read through the connection it is handed so the check can run
/// inside the caller's transaction against fresh rows.
///
/// # Examples
///
/// ```no_run
/// use maitred::database::{Database, DatabaseConfig};
/// use maitred::{Restaurant, SlotValidator, TimeSlot};
/// use chrono::{TimeZone, Utc};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/maitred.db")).unwrap();
/// let restaurant = Database::get_restaurant(db.connection()).unwrap().unwrap();
///
/// let slot = TimeSlot::from_start_duration(
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// )
/// .unwrap();
///
/// let validator = SlotValidator::new(&restaurant);
/// validator.validate(db.connection(), &slot, 90).unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlotValidator<'a> {
    restaurant: &'a Restaurant,
}

impl<'a> SlotValidator<'a> {
    /// Creates a validator for the given establishment.
    #[must_use]
    pub const fn new(restaurant: &'a Restaurant) -> Self {
        Self { restaurant }
    }

    /// Checks a slot against operating hours and peak-hour duration caps.
    ///
    /// Operating hours compare time-of-day components only (the date is
    /// irrelevant): both the slot's start and end must fall within
    /// `[opening, closing]`. Peak rules matching the slot's weekday whose
    /// window contains the start time cap the duration; any single
    /// violated rule is fatal.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfHours`] when the slot leaves the operating window,
    ///   carrying the configured hours
    /// - [`Error::PeakLimitExceeded`] when an applicable rule's cap is
    ///   exceeded, naming the offending window and cap
    /// - A database error if the peak-rule query fails
    pub fn validate(
        &self,
        conn: &Connection,
        slot: &TimeSlot,
        duration_minutes: u32,
    ) -> Result<()> {
        let start = slot.start_time_of_day();
        let end = slot.end_time_of_day();

        if start < self.restaurant.opening() || end > self.restaurant.closing() {
            return Err(Error::OutOfHours {
                opening: self.restaurant.opening(),
                closing: self.restaurant.closing(),
            });
        }

        for rule in Database::peak_rules_for_day(conn, slot.day_of_week())? {
            if rule.constrains(start) && duration_minutes > rule.max_duration_minutes() {
                return Err(Error::PeakLimitExceeded {
                    window_start: rule.window_start(),
                    window_end: rule.window_end(),
                    max_minutes: rule.max_duration_minutes(),
                });
            }
        }

        Ok(())
    }
}
