//! The booking engine: the long-lived facade over the decision flows.
//!
//! One engine instance is constructed at process start and passed
//! explicitly to callers. It owns the database handle and the
//! establishment's configuration record (read-mostly, loaded once); the
//! reservation ledger is always read fresh inside the flows' transactions.

use chrono::NaiveDate;
use rusqlite::TransactionBehavior;

use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::operations::{cancel, create, modify};
use crate::operations::{CreateOutcome, CreateRequest, ReservationUpdate};
use crate::reservation::Reservation;
use crate::restaurant::{PeakRule, Restaurant};
use crate::slot::TimeOfDay;
use crate::table::Table;
use crate::waitlist::WaitlistEntry;

/// The allocation-and-conflict-resolution engine for one establishment.
///
/// # Examples
///
/// ```no_run
/// use chrono::{TimeZone, Utc};
/// use maitred::database::DatabaseConfig;
/// use maitred::{BookingEngine, CreateRequest};
///
/// let mut engine = BookingEngine::open(DatabaseConfig::new("/tmp/maitred.db")).unwrap();
///
/// let request = CreateRequest::new(
///     "Ada Lovelace",
///     "555-0100",
///     2,
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// );
/// let outcome = engine.create(&request).unwrap();
/// println!("{outcome:?}");
/// ```
pub struct BookingEngine {
    db: Database,
    restaurant: Restaurant,
    logger: Logger,
}

impl BookingEngine {
    /// Opens the database and constructs the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or no restaurant
    /// configuration record exists yet.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        Self::new(Database::open(config)?)
    }

    /// Constructs the engine over an already-open database.
    ///
    /// Loads the establishment's singleton configuration record; the
    /// record must have been installed (for example by `maitred init`)
    /// before the engine can serve requests.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no configuration record exists.
    pub fn new(db: Database) -> Result<Self> {
        let restaurant =
            Database::get_restaurant(db.connection())?.ok_or_else(|| Error::NotFound {
                resource: "restaurant configuration".into(),
            })?;
        Ok(Self {
            db,
            restaurant,
            logger: Logger::default(),
        })
    }

    /// Replaces the engine's logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the establishment's configuration record.
    #[must_use]
    pub const fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Returns the underlying database handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Creates a reservation, or falls back to a suggestion or a waitlist
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns a named domain error when validation fails or a referenced
    /// table is absent; the fallback outcomes are not errors.
    pub fn create(&mut self, request: &CreateRequest) -> Result<CreateOutcome> {
        self.logger.debug(&format!(
            "create: party of {} at {}, duration {}m",
            request.party_size, request.start_time, request.duration_minutes
        ));
        let outcome = create::execute(&mut self.db, &self.restaurant, request)?;
        match &outcome {
            CreateOutcome::Confirmed(reservation) => self.logger.info(&format!(
                "confirmed reservation {} on table {}",
                reservation.id(),
                reservation.table_id()
            )),
            CreateOutcome::Suggestion { reason, alternative } => self.logger.info(&format!(
                "suggestion: {reason}; offering table {}",
                alternative.number()
            )),
            CreateOutcome::Waitlisted(entry) => self
                .logger
                .info(&format!("waitlisted entry {}", entry.id())),
        }
        Ok(outcome)
    }

    /// Applies a partial update to a reservation, re-deriving its slot and
    /// re-running allocation.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an absent reservation, a constraint error
    /// for an invalid new slot, or `Conflict` when no table can hold the
    /// modified booking (the original is left untouched).
    pub fn modify(&mut self, id: i64, update: &ReservationUpdate) -> Result<Reservation> {
        self.logger.debug(&format!("modify: reservation {id}"));
        modify::execute(&mut self.db, &self.restaurant, id, update)
    }

    /// Cancels a reservation, permanently freeing its slot.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an absent reservation. Cancelling an
    /// already-cancelled reservation is a no-op returning the record.
    pub fn cancel(&mut self, id: i64) -> Result<Reservation> {
        self.logger.debug(&format!("cancel: reservation {id}"));
        cancel::execute(&mut self.db, id)
    }

    /// Lists reservations, optionally restricted to one UTC day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Reservation>> {
        Database::list_reservations(self.db.connection(), date)
    }

    /// Provisions a table, enforcing the unique table number and the
    /// establishment's table ceiling.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` when the ceiling is reached or the
    /// number is taken, or a validation error for non-positive inputs.
    pub fn add_table(&mut self, number: u32, capacity: u32) -> Result<Table> {
        let max_tables = self.restaurant.max_tables();
        let tx = self
            .db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if Database::count_tables(&tx)? >= i64::from(max_tables) {
            return Err(Error::InvariantViolation {
                details: format!("the table ceiling ({max_tables}) has been reached"),
            });
        }
        if Database::get_table_by_number(&tx, number)?.is_some() {
            return Err(Error::InvariantViolation {
                details: format!("a table with number {number} already exists"),
            });
        }

        let table = Database::insert_table(&tx, number, capacity)?;
        tx.commit()?;

        self.logger.info(&format!(
            "added table {} with capacity {}",
            table.number(),
            table.capacity()
        ));
        Ok(table)
    }

    /// Lists the provisioned tables ordered by table number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tables(&self) -> Result<Vec<Table>> {
        Database::list_tables(self.db.connection())
    }

    /// Provisions a peak-hour rule.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range inputs.
    pub fn add_peak_rule(
        &mut self,
        day_of_week: u8,
        window_start: TimeOfDay,
        window_end: TimeOfDay,
        max_duration_minutes: u32,
    ) -> Result<PeakRule> {
        Database::insert_peak_rule(
            self.db.connection(),
            day_of_week,
            window_start,
            window_end,
            max_duration_minutes,
        )
    }

    /// Lists waitlist entries in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn waitlist(&self) -> Result<Vec<WaitlistEntry>> {
        Database::list_waitlist(self.db.connection())
    }
}
