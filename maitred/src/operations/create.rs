//! Create flow: confirm, suggest an alternative, or waitlist.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;
use serde::{Deserialize, Serialize};

use crate::allocator::TableAllocator;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::restaurant::Restaurant;
use crate::slot::TimeSlot;
use crate::table::Table;
use crate::validate::SlotValidator;
use crate::waitlist::{WaitlistEntry, WaitlistStatus};

/// A request to book a table.
///
/// Crossing the boundary, the start is an absolute instant (treated
/// uniformly as UTC) and the duration an integer count of minutes; the
/// flow derives the half-open slot `[start, start + duration)` from them.
/// Naming a specific table is optional: without one the allocator picks
/// the smallest sufficient free table directly.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use maitred::CreateRequest;
///
/// let request = CreateRequest::new(
///     "Ada Lovelace",
///     "555-0100",
///     2,
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// )
/// .with_table(3);
/// assert_eq!(request.table_id, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    /// The customer's name.
    pub customer_name: String,
    /// The customer's phone number.
    pub customer_phone: String,
    /// The party size.
    pub party_size: u32,
    /// The requested start instant.
    pub start_time: DateTime<Utc>,
    /// The requested duration in minutes.
    pub duration_minutes: u32,
    /// A specific table to book, if the customer asked for one.
    pub table_id: Option<i64>,
}

impl CreateRequest {
    /// Creates a request without a named table.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        party_size: u32,
        start_time: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            party_size,
            start_time,
            duration_minutes,
            table_id: None,
        }
    }

    /// Names a specific table to book.
    #[must_use]
    pub const fn with_table(mut self, table_id: i64) -> Self {
        self.table_id = Some(table_id);
        self
    }
}

/// Why the exact requested table could not be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionReason {
    /// The requested table does not seat the party.
    TooSmall {
        /// The requested table's capacity.
        capacity: u32,
    },
    /// The requested table holds a conflicting confirmed reservation.
    AlreadyBooked,
}

impl std::fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooSmall { capacity } => {
                write!(f, "the requested table is too small (capacity {capacity})")
            }
            Self::AlreadyBooked => {
                write!(f, "the requested table is already booked for this time")
            }
        }
    }
}

/// Outcome of the create flow.
///
/// The non-confirmed arms are normal outcomes, not errors: a suggestion is
/// a non-fatal payload naming why the exact request failed plus the best
/// alternative (without auto-booking it), and a waitlist entry is the
/// terminal fallback when no table satisfies the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateOutcome {
    /// The reservation was written to the ledger.
    Confirmed(Reservation),
    /// The exact request failed but another table would work. The ledger
    /// is not mutated; the caller must re-submit naming the suggested
    /// table.
    Suggestion {
        /// Why the requested table was rejected.
        reason: SuggestionReason,
        /// The smallest sufficient free alternative.
        alternative: Table,
    },
    /// No table satisfies the request; a waitlist entry was created.
    Waitlisted(WaitlistEntry),
}

/// Runs the create flow inside one immediate transaction.
pub(crate) fn execute(
    db: &mut Database,
    restaurant: &Restaurant,
    request: &CreateRequest,
) -> Result<CreateOutcome> {
    let slot = TimeSlot::from_start_duration(request.start_time, request.duration_minutes)?;

    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    SlotValidator::new(restaurant).validate(&tx, &slot, request.duration_minutes)?;

    let allocator = TableAllocator::new();
    let outcome = match request.table_id {
        Some(table_id) => {
            let requested = Database::get_table(&tx, table_id)?.ok_or_else(|| Error::NotFound {
                resource: format!("table {table_id}"),
            })?;

            let too_small = !requested.seats(request.party_size);
            let booked = Database::has_overlap(&tx, table_id, &slot, None)?;

            if too_small || booked {
                fall_back(&tx, &allocator, request, &slot, || {
                    if too_small {
                        SuggestionReason::TooSmall {
                            capacity: requested.capacity(),
                        }
                    } else {
                        SuggestionReason::AlreadyBooked
                    }
                })?
            } else {
                CreateOutcome::Confirmed(confirm(&tx, table_id, request, slot)?)
            }
        }
        None => match allocator.find_best_table(&tx, request.party_size, &slot, None)? {
            Some(table) => CreateOutcome::Confirmed(confirm(&tx, table.id(), request, slot)?),
            None => CreateOutcome::Waitlisted(enqueue(&tx, request)?),
        },
    };

    tx.commit()?;
    Ok(outcome)
}

/// Suggests an alternative table, or waitlists when none exists.
fn fall_back(
    conn: &rusqlite::Connection,
    allocator: &TableAllocator,
    request: &CreateRequest,
    slot: &TimeSlot,
    reason: impl FnOnce() -> SuggestionReason,
) -> Result<CreateOutcome> {
    match allocator.find_best_table(conn, request.party_size, slot, None)? {
        Some(alternative) => Ok(CreateOutcome::Suggestion {
            reason: reason(),
            alternative,
        }),
        None => Ok(CreateOutcome::Waitlisted(enqueue(conn, request)?)),
    }
}

/// Writes a confirmed reservation for the request on the given table.
fn confirm(
    conn: &rusqlite::Connection,
    table_id: i64,
    request: &CreateRequest,
    slot: TimeSlot,
) -> Result<Reservation> {
    let draft = Reservation::builder(0, table_id, slot)
        .customer_name(request.customer_name.as_str())
        .customer_phone(request.customer_phone.as_str())
        .party_size(request.party_size)
        .build()?;
    Database::insert_reservation(conn, &draft)
}

/// Writes a waiting waitlist entry for the request.
fn enqueue(conn: &rusqlite::Connection, request: &CreateRequest) -> Result<WaitlistEntry> {
    let draft = WaitlistEntry::new(
        0,
        request.customer_name.as_str(),
        request.customer_phone.as_str(),
        request.party_size,
        request.start_time,
        WaitlistStatus::Waiting,
    )?;
    Database::insert_waitlist_entry(conn, &draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, instant_at, sample_restaurant};

    fn setup() -> (Database, Restaurant) {
        let db = create_test_database();
        let restaurant = sample_restaurant();
        Database::insert_restaurant(db.connection(), &restaurant).unwrap();
        (db, restaurant)
    }

    fn request(party_size: u32, hour: u32, minute: u32, duration: u32) -> CreateRequest {
        CreateRequest::new(
            "Ada Lovelace",
            "555-0100",
            party_size,
            instant_at(hour, minute),
            duration,
        )
    }

    #[test]
    fn test_create_confirms_on_free_table() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 4).unwrap();

        let outcome = execute(&mut db, &restaurant, &request(2, 19, 0, 90)).unwrap();
        match outcome {
            CreateOutcome::Confirmed(reservation) => {
                assert_eq!(reservation.party_size(), 2);
                assert_eq!(reservation.end_time(), instant_at(20, 30));
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }

    #[test]
    fn test_create_waitlists_when_no_table_free() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 4).unwrap();

        execute(&mut db, &restaurant, &request(2, 19, 0, 90)).unwrap();

        // Overlapping request with the only table taken
        let outcome = execute(&mut db, &restaurant, &request(2, 19, 30, 60)).unwrap();
        match outcome {
            CreateOutcome::Waitlisted(entry) => {
                assert_eq!(entry.party_size(), 2);
                assert_eq!(entry.requested_time(), instant_at(19, 30));
            }
            other => panic!("expected Waitlisted, got {other:?}"),
        }

        // Only the first request reached the ledger
        let reservations = Database::list_reservations(db.connection(), None).unwrap();
        assert_eq!(reservations.len(), 1);
    }

    #[test]
    fn test_create_named_table_confirms() {
        let (mut db, restaurant) = setup();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();

        let outcome =
            execute(&mut db, &restaurant, &request(2, 19, 0, 90).with_table(table.id())).unwrap();
        match outcome {
            CreateOutcome::Confirmed(reservation) => assert_eq!(reservation.table_id(), table.id()),
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }

    #[test]
    fn test_create_named_table_not_found() {
        let (mut db, restaurant) = setup();

        let result = execute(&mut db, &restaurant, &request(2, 19, 0, 90).with_table(42));
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_create_named_table_too_small_suggests() {
        let (mut db, restaurant) = setup();
        let small = Database::insert_table(db.connection(), 1, 2).unwrap();
        let big = Database::insert_table(db.connection(), 2, 6).unwrap();

        let outcome =
            execute(&mut db, &restaurant, &request(4, 19, 0, 90).with_table(small.id())).unwrap();
        match outcome {
            CreateOutcome::Suggestion { reason, alternative } => {
                assert_eq!(reason, SuggestionReason::TooSmall { capacity: 2 });
                assert_eq!(alternative.id(), big.id());
            }
            other => panic!("expected Suggestion, got {other:?}"),
        }

        // A suggestion never mutates the ledger
        assert!(Database::list_reservations(db.connection(), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_create_named_table_booked_suggests() {
        let (mut db, restaurant) = setup();
        let first = Database::insert_table(db.connection(), 1, 4).unwrap();
        let second = Database::insert_table(db.connection(), 2, 4).unwrap();

        execute(&mut db, &restaurant, &request(2, 19, 0, 90).with_table(first.id())).unwrap();

        let outcome =
            execute(&mut db, &restaurant, &request(2, 19, 30, 60).with_table(first.id())).unwrap();
        match outcome {
            CreateOutcome::Suggestion { reason, alternative } => {
                assert_eq!(reason, SuggestionReason::AlreadyBooked);
                assert_eq!(alternative.id(), second.id());
            }
            other => panic!("expected Suggestion, got {other:?}"),
        }
    }

    #[test]
    fn test_create_named_table_booked_no_alternative_waitlists() {
        let (mut db, restaurant) = setup();
        let only = Database::insert_table(db.connection(), 1, 4).unwrap();

        execute(&mut db, &restaurant, &request(2, 19, 0, 90).with_table(only.id())).unwrap();

        let outcome =
            execute(&mut db, &restaurant, &request(2, 19, 30, 60).with_table(only.id())).unwrap();
        assert!(matches!(outcome, CreateOutcome::Waitlisted(_)));
    }

    #[test]
    fn test_create_out_of_hours_writes_nothing() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 4).unwrap();

        // Ends 23:00 against closing 22:00
        let result = execute(&mut db, &restaurant, &request(2, 22, 0, 60));
        assert!(matches!(result, Err(Error::OutOfHours { .. })));

        assert!(Database::list_reservations(db.connection(), None)
            .unwrap()
            .is_empty());
        assert!(Database::list_waitlist(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_create_peak_limit_rejected() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 4).unwrap();
        // 2024-05-01 is a Wednesday (weekday 3)
        Database::insert_peak_rule(
            db.connection(),
            3,
            "18:00".parse().unwrap(),
            "21:00".parse().unwrap(),
            60,
        )
        .unwrap();

        let result = execute(&mut db, &restaurant, &request(2, 19, 0, 90));
        assert!(matches!(result, Err(Error::PeakLimitExceeded { .. })));
    }

    #[test]
    fn test_create_back_to_back_confirms() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 4).unwrap();

        execute(&mut db, &restaurant, &request(2, 19, 0, 90)).unwrap();
        let outcome = execute(&mut db, &restaurant, &request(2, 20, 30, 60)).unwrap();
        assert!(matches!(outcome, CreateOutcome::Confirmed(_)));
    }

    #[test]
    fn test_create_picks_smallest_sufficient() {
        let (mut db, restaurant) = setup();
        Database::insert_table(db.connection(), 1, 8).unwrap();
        let small = Database::insert_table(db.connection(), 2, 2).unwrap();

        let outcome = execute(&mut db, &restaurant, &request(2, 19, 0, 90)).unwrap();
        match outcome {
            CreateOutcome::Confirmed(reservation) => {
                assert_eq!(reservation.table_id(), small.id());
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }
}
