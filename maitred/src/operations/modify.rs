//! Modify flow: merge a partial update and re-derive the slot.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;
use serde::{Deserialize, Serialize};

use crate::allocator::TableAllocator;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::restaurant::Restaurant;
use crate::slot::TimeSlot;
use crate::validate::SlotValidator;

/// A partial update to an existing reservation.
///
/// Unspecified fields retain their current values; the duration is
/// re-derived from the current slot when not supplied. Customer identity
/// is not updatable through this flow.
///
/// # Examples
///
/// ```
/// use maitred::ReservationUpdate;
///
/// let update = ReservationUpdate::new().with_party_size(5);
/// assert!(!update.is_empty());
/// assert!(ReservationUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationUpdate {
    /// A new start instant, if the booking moves.
    pub start_time: Option<DateTime<Utc>>,
    /// A new duration in minutes, if it changes.
    pub duration_minutes: Option<u32>,
    /// A new party size, if it changes.
    pub party_size: Option<u32>,
}

impl ReservationUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new start instant.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets a new duration in minutes.
    #[must_use]
    pub const fn with_duration_minutes(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = Some(duration_minutes);
        self
    }

    /// Sets a new party size.
    #[must_use]
    pub const fn with_party_size(mut self, party_size: u32) -> Self {
        self.party_size = Some(party_size);
        self
    }

    /// Checks whether the update specifies no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.duration_minutes.is_none() && self.party_size.is_none()
    }
}

/// Runs the modify flow inside one immediate transaction.
///
/// An empty update short-circuits and returns the stored record unchanged;
/// re-running the allocator on a no-op could otherwise move the booking to
/// a smaller table that happens to have freed up.
pub(crate) fn execute(
    db: &mut Database,
    restaurant: &Restaurant,
    id: i64,
    update: &ReservationUpdate,
) -> Result<Reservation> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let current = Database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;

    if update.is_empty() {
        return Ok(current);
    }

    let start = update.start_time.unwrap_or_else(|| current.start_time());
    let duration = update
        .duration_minutes
        .unwrap_or_else(|| current.slot().duration_minutes());
    let party_size = update.party_size.unwrap_or_else(|| current.party_size());
    let slot = TimeSlot::from_start_duration(start, duration)?;

    SlotValidator::new(restaurant).validate(&tx, &slot, duration)?;

    let table = TableAllocator::new()
        .find_best_table(&tx, party_size, &slot, Some(id))?
        .ok_or_else(|| Error::Conflict {
            details: "no table available for the modified reservation".into(),
        })?;

    Database::update_reservation(&tx, id, table.id(), &slot, party_size)?;
    let updated = Database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;

    tx.commit()?;
    Ok(updated)
}
