//! Cancel flow: release a table for the reserved slot.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationStatus};

/// Runs the cancel flow inside one immediate transaction.
///
/// Cancelling an absent reservation is `NotFound`; cancelling an
/// already-cancelled one is an idempotent no-op returning the stored
/// record. Cancelled reservations are permanently excluded from overlap
/// checks, so the table's slot is immediately free for new bookings.
pub(crate) fn execute(db: &mut Database, id: i64) -> Result<Reservation> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let current = Database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;

    if current.status() == ReservationStatus::Cancelled {
        return Ok(current);
    }

    Database::set_reservation_status(&tx, id, ReservationStatus::Cancelled)?;
    let cancelled = Database::get_reservation(&tx, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })?;

    tx.commit()?;
    Ok(cancelled)
}
