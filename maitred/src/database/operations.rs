//! Database CRUD operations for the reservation system.
//!
//! This module implements all create, read, update, and delete operations
//! over the establishment configuration, the table catalog, the
//! reservation ledger, peak-hour rules, and the waitlist.
//!
//! Query helpers are associated functions taking a `&Connection` so the
//! decision flows can run them inside an already-open transaction; the
//! inserted-row helpers return the stored record including its generated
//! identifier.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationStatus};
use crate::restaurant::{PeakRule, Restaurant};
use crate::slot::{TimeOfDay, TimeSlot};
use crate::table::Table;
use crate::waitlist::{WaitlistEntry, WaitlistStatus};

use super::connection::Database;

/// Converts an absolute instant to Unix epoch seconds for storage.
pub(crate) fn datetime_to_unix_secs(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// Converts Unix epoch seconds from the database back to an instant.
pub(crate) fn unix_secs_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Wraps a domain validation failure into a `rusqlite` row-mapping error.
fn row_error(err: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Helper to deserialize a table from a database row.
///
/// Expects row fields in this order: id, `table_number`, capacity
pub(crate) fn row_to_table(row: &rusqlite::Row<'_>) -> rusqlite::Result<Table> {
    let id: i64 = row.get(0)?;
    let number: u32 = row.get(1)?;
    let capacity: u32 = row.get(2)?;
    Table::new(id, number, capacity).map_err(row_error)
}

/// Helper to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `table_id`, `customer_name`,
/// `customer_phone`, `party_size`, `start_time`, `end_time`, status
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let table_id: i64 = row.get(1)?;
    let customer_name: String = row.get(2)?;
    let customer_phone: String = row.get(3)?;
    let party_size: u32 = row.get(4)?;
    let start_secs: i64 = row.get(5)?;
    let end_secs: i64 = row.get(6)?;
    let status_text: String = row.get(7)?;

    let start = unix_secs_to_datetime(start_secs).ok_or_else(|| {
        row_error(crate::reservation::ValidationError {
            field: "start_time".into(),
            message: format!("invalid timestamp {start_secs}"),
        })
    })?;
    let end = unix_secs_to_datetime(end_secs).ok_or_else(|| {
        row_error(crate::reservation::ValidationError {
            field: "end_time".into(),
            message: format!("invalid timestamp {end_secs}"),
        })
    })?;

    let slot = TimeSlot::new(start, end).map_err(row_error)?;
    let status = ReservationStatus::parse(&status_text).map_err(row_error)?;

    Reservation::builder(id, table_id, slot)
        .customer_name(customer_name)
        .customer_phone(customer_phone)
        .party_size(party_size)
        .status(status)
        .build()
        .map_err(row_error)
}

/// Helper to deserialize a peak rule from a database row.
///
/// Expects row fields in this order: id, `day_of_week`, `start_hour`,
/// `end_hour`, `max_duration_minutes`
fn row_to_peak_rule(row: &rusqlite::Row<'_>) -> rusqlite::Result<PeakRule> {
    let id: i64 = row.get(0)?;
    let day_of_week: u8 = row.get(1)?;
    let start_text: String = row.get(2)?;
    let end_text: String = row.get(3)?;
    let max_duration_minutes: u32 = row.get(4)?;

    let window_start: TimeOfDay = start_text.parse().map_err(row_error)?;
    let window_end: TimeOfDay = end_text.parse().map_err(row_error)?;

    PeakRule::new(id, day_of_week, window_start, window_end, max_duration_minutes)
        .map_err(row_error)
}

/// Helper to deserialize a waitlist entry from a database row.
///
/// Expects row fields in this order: id, `customer_name`, `customer_phone`,
/// `party_size`, `requested_time`, status
fn row_to_waitlist_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<WaitlistEntry> {
    let id: i64 = row.get(0)?;
    let customer_name: String = row.get(1)?;
    let customer_phone: String = row.get(2)?;
    let party_size: u32 = row.get(3)?;
    let requested_secs: i64 = row.get(4)?;
    let status_text: String = row.get(5)?;

    let requested_time = unix_secs_to_datetime(requested_secs).ok_or_else(|| {
        row_error(crate::reservation::ValidationError {
            field: "requested_time".into(),
            message: format!("invalid timestamp {requested_secs}"),
        })
    })?;
    let status = WaitlistStatus::parse(&status_text).map_err(row_error)?;

    WaitlistEntry::new(
        id,
        customer_name,
        customer_phone,
        party_size,
        requested_time,
        status,
    )
    .map_err(row_error)
}

// SQL statements for CRUD operations

const INSERT_RESTAURANT: &str = r"
    INSERT INTO restaurant (id, name, opening_time, closing_time, max_tables)
    VALUES (1, ?, ?, ?, ?)
";

const SELECT_RESTAURANT: &str = r"
    SELECT name, opening_time, closing_time, max_tables
    FROM restaurant
    WHERE id = 1
";

const INSERT_TABLE: &str = r"
    INSERT INTO tables (table_number, capacity)
    VALUES (?, ?)
";

const SELECT_TABLE: &str = r"
    SELECT id, table_number, capacity FROM tables WHERE id = ?
";

const SELECT_TABLE_BY_NUMBER: &str = r"
    SELECT id, table_number, capacity FROM tables WHERE table_number = ?
";

const LIST_TABLES: &str = r"
    SELECT id, table_number, capacity FROM tables ORDER BY table_number
";

const COUNT_TABLES: &str = "SELECT COUNT(*) FROM tables";

const OVERLAP_EXISTS: &str = r"
    SELECT EXISTS (
        SELECT 1 FROM reservations
        WHERE table_id = ?1
          AND status = 'confirmed'
          AND start_time < ?3
          AND end_time > ?2
          AND (?4 IS NULL OR id <> ?4)
    )
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (table_id, customer_name, customer_phone, party_size, start_time, end_time, status)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_RESERVATION: &str = r"
    SELECT id, table_id, customer_name, customer_phone, party_size,
           start_time, end_time, status
    FROM reservations
    WHERE id = ?
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET table_id = ?, start_time = ?, end_time = ?, party_size = ?
    WHERE id = ?
";

const UPDATE_RESERVATION_STATUS: &str = r"
    UPDATE reservations SET status = ? WHERE id = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, table_id, customer_name, customer_phone, party_size,
           start_time, end_time, status
    FROM reservations
    ORDER BY start_time, id
";

const LIST_RESERVATIONS_FOR_DAY: &str = r"
    SELECT id, table_id, customer_name, customer_phone, party_size,
           start_time, end_time, status
    FROM reservations
    WHERE start_time >= ? AND start_time < ?
    ORDER BY start_time, id
";

const INSERT_PEAK_RULE: &str = r"
    INSERT INTO peak_hours (day_of_week, start_hour, end_hour, max_duration_minutes)
    VALUES (?, ?, ?, ?)
";

const SELECT_PEAK_RULES_FOR_DAY: &str = r"
    SELECT id, day_of_week, start_hour, end_hour, max_duration_minutes
    FROM peak_hours
    WHERE day_of_week = ?
    ORDER BY start_hour, id
";

const INSERT_WAITLIST_ENTRY: &str = r"
    INSERT INTO waitlist (customer_name, customer_phone, party_size, requested_time, status)
    VALUES (?, ?, ?, ?, ?)
";

const LIST_WAITLIST: &str = r"
    SELECT id, customer_name, customer_phone, party_size, requested_time, status
    FROM waitlist
    ORDER BY requested_time, id
";

impl Database {
    /// Inserts the establishment's singleton configuration record.
    ///
    /// The `restaurant` table pins its primary key to 1, so a second
    /// insert fails at the storage boundary.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if a configuration row already exists,
    /// or a database error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use maitred::database::{Database, DatabaseConfig};
    /// use maitred::Restaurant;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/maitred.db")).unwrap();
    /// let restaurant = Restaurant::new(
    ///     "Chez Test",
    ///     "09:00".parse().unwrap(),
    ///     "22:00".parse().unwrap(),
    ///     20,
    /// )
    /// .unwrap();
    /// Database::insert_restaurant(db.connection(), &restaurant).unwrap();
    /// ```
    pub fn insert_restaurant(conn: &Connection, restaurant: &Restaurant) -> Result<()> {
        let result = conn.execute(
            INSERT_RESTAURANT,
            params![
                restaurant.name(),
                restaurant.opening().to_string(),
                restaurant.closing().to_string(),
                restaurant.max_tables(),
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_constraint_violation(&e) => Err(Error::InvariantViolation {
                details: "the restaurant is already configured".into(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves the establishment's configuration record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_restaurant(conn: &Connection) -> Result<Option<Restaurant>> {
        let mut stmt = conn.prepare(SELECT_RESTAURANT)?;

        match stmt.query_row([], |row| {
            let name: String = row.get(0)?;
            let opening_text: String = row.get(1)?;
            let closing_text: String = row.get(2)?;
            let max_tables: u32 = row.get(3)?;

            let opening: TimeOfDay = opening_text.parse().map_err(row_error)?;
            let closing: TimeOfDay = closing_text.parse().map_err(row_error)?;

            Restaurant::new(name, opening, closing, max_tables).map_err(row_error)
        }) {
            Ok(restaurant) => Ok(Some(restaurant)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts a table into the catalog and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the table number is already taken
    /// (UNIQUE constraint), a validation error for non-positive inputs, or
    /// a database error if the insert fails.
    pub fn insert_table(conn: &Connection, number: u32, capacity: u32) -> Result<Table> {
        // Validate before touching the ledger so bad input writes nothing.
        Table::new(0, number, capacity)?;

        match conn.execute(INSERT_TABLE, params![number, capacity]) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::InvariantViolation {
                    details: format!("a table with number {number} already exists"),
                })
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        Ok(Table::new(id, number, capacity)?)
    }

    /// Retrieves a table by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_table(conn: &Connection, id: i64) -> Result<Option<Table>> {
        let mut stmt = conn.prepare(SELECT_TABLE)?;
        match stmt.query_row(params![id], row_to_table) {
            Ok(table) => Ok(Some(table)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a table by its number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_table_by_number(conn: &Connection, number: u32) -> Result<Option<Table>> {
        let mut stmt = conn.prepare(SELECT_TABLE_BY_NUMBER)?;
        match stmt.query_row(params![number], row_to_table) {
            Ok(table) => Ok(Some(table)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all tables ordered by table number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
        let mut stmt = conn.prepare(LIST_TABLES)?;
        let tables = stmt
            .query_map([], row_to_table)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(tables)
    }

    /// Counts the provisioned tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_tables(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row(COUNT_TABLES, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Checks whether any confirmed reservation on a table overlaps a slot.
    ///
    /// Overlap uses half-open comparison, so back-to-back bookings do not
    /// conflict. `exclude_reservation` removes one reservation from
    /// consideration so the modify flow never conflicts with its own prior
    /// slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn has_overlap(
        conn: &Connection,
        table_id: i64,
        slot: &TimeSlot,
        exclude_reservation: Option<i64>,
    ) -> Result<bool> {
        let exists: i64 = conn.query_row(
            OVERLAP_EXISTS,
            params![
                table_id,
                datetime_to_unix_secs(slot.start()),
                datetime_to_unix_secs(slot.end()),
                exclude_reservation,
            ],
            |row| row.get(0),
        )?;
        Ok(exists != 0)
    }

    /// Inserts a reservation and returns the stored record.
    ///
    /// The draft's identifier is ignored; the returned record carries the
    /// identifier generated by the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the record cannot be
    /// rebuilt.
    pub fn insert_reservation(conn: &Connection, draft: &Reservation) -> Result<Reservation> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                draft.table_id(),
                draft.customer_name(),
                draft.customer_phone(),
                draft.party_size(),
                datetime_to_unix_secs(draft.start_time()),
                datetime_to_unix_secs(draft.end_time()),
                draft.status().as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(Reservation::builder(id, draft.table_id(), draft.slot())
            .customer_name(draft.customer_name())
            .customer_phone(draft.customer_phone())
            .party_size(draft.party_size())
            .status(draft.status())
            .build()?)
    }

    /// Retrieves a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_reservation(conn: &Connection, id: i64) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION)?;
        match stmt.query_row(params![id], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites a reservation's table reference, slot, and party size in
    /// one statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if the reservation was not found
    pub fn update_reservation(
        conn: &Connection,
        id: i64,
        table_id: i64,
        slot: &TimeSlot,
        party_size: u32,
    ) -> Result<bool> {
        let rows_affected = conn.execute(
            UPDATE_RESERVATION,
            params![
                table_id,
                datetime_to_unix_secs(slot.start()),
                datetime_to_unix_secs(slot.end()),
                party_size,
                id,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Sets a reservation's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if the reservation was not found
    pub fn set_reservation_status(
        conn: &Connection,
        id: i64,
        status: ReservationStatus,
    ) -> Result<bool> {
        let rows_affected =
            conn.execute(UPDATE_RESERVATION_STATUS, params![status.as_str(), id])?;
        Ok(rows_affected > 0)
    }

    /// Lists reservations, optionally restricted to one UTC day.
    ///
    /// The filter matches reservations whose start instant falls on the
    /// given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_reservations(
        conn: &Connection,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Reservation>> {
        let reservations = match date {
            Some(date) => {
                let day_start = date.and_time(NaiveTime::MIN).and_utc();
                let day_end = day_start + chrono::Duration::days(1);
                let mut stmt = conn.prepare(LIST_RESERVATIONS_FOR_DAY)?;
                let rows = stmt
                    .query_map(
                        params![
                            datetime_to_unix_secs(day_start),
                            datetime_to_unix_secs(day_end)
                        ],
                        row_to_reservation,
                    )?
                    .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
                let rows = stmt
                    .query_map([], row_to_reservation)?
                    .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
                rows
            }
        };
        Ok(reservations)
    }

    /// Inserts a peak-hour rule and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range inputs, or a database
    /// error if the insert fails.
    pub fn insert_peak_rule(
        conn: &Connection,
        day_of_week: u8,
        window_start: TimeOfDay,
        window_end: TimeOfDay,
        max_duration_minutes: u32,
    ) -> Result<PeakRule> {
        // Validate before touching the ledger.
        PeakRule::new(0, day_of_week, window_start, window_end, max_duration_minutes)?;

        conn.execute(
            INSERT_PEAK_RULE,
            params![
                day_of_week,
                window_start.to_string(),
                window_end.to_string(),
                max_duration_minutes,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(PeakRule::new(
            id,
            day_of_week,
            window_start,
            window_end,
            max_duration_minutes,
        )?)
    }

    /// Lists the peak rules applying to a weekday (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn peak_rules_for_day(conn: &Connection, day_of_week: u8) -> Result<Vec<PeakRule>> {
        let mut stmt = conn.prepare(SELECT_PEAK_RULES_FOR_DAY)?;
        let rules = stmt
            .query_map(params![day_of_week], row_to_peak_rule)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rules)
    }

    /// Inserts a waitlist entry and returns the stored record.
    ///
    /// The draft's identifier is ignored; the returned record carries the
    /// identifier generated by the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the record cannot be
    /// rebuilt.
    pub fn insert_waitlist_entry(
        conn: &Connection,
        draft: &WaitlistEntry,
    ) -> Result<WaitlistEntry> {
        conn.execute(
            INSERT_WAITLIST_ENTRY,
            params![
                draft.customer_name(),
                draft.customer_phone(),
                draft.party_size(),
                datetime_to_unix_secs(draft.requested_time()),
                draft.status().as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(WaitlistEntry::new(
            id,
            draft.customer_name(),
            draft.customer_phone(),
            draft.party_size(),
            draft.requested_time(),
            draft.status(),
        )?)
    }

    /// Lists all waitlist entries in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_waitlist(conn: &Connection) -> Result<Vec<WaitlistEntry>> {
        let mut stmt = conn.prepare(LIST_WAITLIST)?;
        let entries = stmt
            .query_map([], row_to_waitlist_entry)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(entries)
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects
    /// corruption.
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{
        create_test_database, draft_reservation, sample_restaurant, slot_at,
    };
    use chrono::TimeZone;

    #[test]
    fn test_insert_and_get_restaurant() {
        let db = create_test_database();
        let restaurant = sample_restaurant();

        Database::insert_restaurant(db.connection(), &restaurant).unwrap();

        let loaded = Database::get_restaurant(db.connection()).unwrap().unwrap();
        assert_eq!(loaded, restaurant);
    }

    #[test]
    fn test_get_restaurant_unconfigured() {
        let db = create_test_database();
        assert!(Database::get_restaurant(db.connection()).unwrap().is_none());
    }

    #[test]
    fn test_insert_restaurant_twice_rejected() {
        let db = create_test_database();
        let restaurant = sample_restaurant();

        Database::insert_restaurant(db.connection(), &restaurant).unwrap();
        let result = Database::insert_restaurant(db.connection(), &restaurant);

        assert!(matches!(result, Err(Error::InvariantViolation { .. })));
    }

    #[test]
    fn test_insert_table() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 4, 6).unwrap();
        assert_eq!(table.number(), 4);
        assert_eq!(table.capacity(), 6);

        let loaded = Database::get_table(db.connection(), table.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_insert_table_duplicate_number() {
        let db = create_test_database();
        Database::insert_table(db.connection(), 4, 6).unwrap();

        let result = Database::insert_table(db.connection(), 4, 2);
        assert!(matches!(result, Err(Error::InvariantViolation { .. })));
    }

    #[test]
    fn test_insert_table_rejects_zero_capacity() {
        let db = create_test_database();
        let result = Database::insert_table(db.connection(), 4, 0);
        assert!(matches!(result, Err(Error::Validation { .. })));
        // Nothing was written
        assert_eq!(Database::count_tables(db.connection()).unwrap(), 0);
    }

    #[test]
    fn test_get_table_not_found() {
        let db = create_test_database();
        assert!(Database::get_table(db.connection(), 99).unwrap().is_none());
    }

    #[test]
    fn test_get_table_by_number() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 7, 2).unwrap();

        let loaded = Database::get_table_by_number(db.connection(), 7)
            .unwrap()
            .unwrap();
        assert_eq!(loaded, table);
        assert!(Database::get_table_by_number(db.connection(), 8)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_tables_ordered_by_number() {
        let db = create_test_database();
        Database::insert_table(db.connection(), 9, 2).unwrap();
        Database::insert_table(db.connection(), 1, 6).unwrap();
        Database::insert_table(db.connection(), 5, 4).unwrap();

        let tables = Database::list_tables(db.connection()).unwrap();
        let numbers: Vec<u32> = tables.iter().map(Table::number).collect();
        assert_eq!(numbers, vec![1, 5, 9]);
        assert_eq!(Database::count_tables(db.connection()).unwrap(), 3);
    }

    #[test]
    fn test_insert_and_get_reservation() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();
        let slot = slot_at(19, 0, 90);

        let stored =
            Database::insert_reservation(db.connection(), &draft_reservation(table.id(), slot, 2))
                .unwrap();
        assert!(stored.id() > 0);
        assert_eq!(stored.table_id(), table.id());

        let loaded = Database::get_reservation(db.connection(), stored.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded, stored);
    }

    #[test]
    fn test_has_overlap_half_open() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();
        let booked = slot_at(19, 0, 90);
        Database::insert_reservation(db.connection(), &draft_reservation(table.id(), booked, 2))
            .unwrap();

        // Overlapping request conflicts
        assert!(Database::has_overlap(db.connection(), table.id(), &slot_at(19, 30, 60), None)
            .unwrap());
        // Back-to-back request does not
        assert!(!Database::has_overlap(db.connection(), table.id(), &slot_at(20, 30, 60), None)
            .unwrap());
        // Earlier touching slot does not
        assert!(!Database::has_overlap(db.connection(), table.id(), &slot_at(18, 0, 60), None)
            .unwrap());
    }

    #[test]
    fn test_has_overlap_ignores_cancelled() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();
        let slot = slot_at(19, 0, 90);
        let stored =
            Database::insert_reservation(db.connection(), &draft_reservation(table.id(), slot, 2))
                .unwrap();

        Database::set_reservation_status(
            db.connection(),
            stored.id(),
            ReservationStatus::Cancelled,
        )
        .unwrap();

        assert!(!Database::has_overlap(db.connection(), table.id(), &slot, None).unwrap());
    }

    #[test]
    fn test_has_overlap_excludes_reservation() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();
        let slot = slot_at(19, 0, 90);
        let stored =
            Database::insert_reservation(db.connection(), &draft_reservation(table.id(), slot, 2))
                .unwrap();

        // The reservation conflicts with its own slot unless excluded
        assert!(Database::has_overlap(db.connection(), table.id(), &slot, None).unwrap());
        assert!(
            !Database::has_overlap(db.connection(), table.id(), &slot, Some(stored.id())).unwrap()
        );
    }

    #[test]
    fn test_update_reservation() {
        let db = create_test_database();
        let t1 = Database::insert_table(db.connection(), 1, 4).unwrap();
        let t2 = Database::insert_table(db.connection(), 2, 6).unwrap();
        let stored = Database::insert_reservation(
            db.connection(),
            &draft_reservation(t1.id(), slot_at(19, 0, 90), 2),
        )
        .unwrap();

        let new_slot = slot_at(20, 0, 60);
        let updated =
            Database::update_reservation(db.connection(), stored.id(), t2.id(), &new_slot, 5)
                .unwrap();
        assert!(updated);

        let loaded = Database::get_reservation(db.connection(), stored.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.table_id(), t2.id());
        assert_eq!(loaded.party_size(), 5);
        assert_eq!(loaded.slot(), new_slot);
        // Customer fields are untouched
        assert_eq!(loaded.customer_name(), stored.customer_name());
    }

    #[test]
    fn test_update_reservation_not_found() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();
        let updated =
            Database::update_reservation(db.connection(), 42, table.id(), &slot_at(19, 0, 60), 2)
                .unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_list_reservations_date_filter() {
        let db = create_test_database();
        let table = Database::insert_table(db.connection(), 1, 4).unwrap();

        let may_first = slot_at(19, 0, 90);
        Database::insert_reservation(db.connection(), &draft_reservation(table.id(), may_first, 2))
            .unwrap();

        let may_second = TimeSlot::from_start_duration(
            Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap(),
            60,
        )
        .unwrap();
        Database::insert_reservation(
            db.connection(),
            &draft_reservation(table.id(), may_second, 2),
        )
        .unwrap();

        let all = Database::list_reservations(db.connection(), None).unwrap();
        assert_eq!(all.len(), 2);

        let filtered = Database::list_reservations(
            db.connection(),
            Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
        )
        .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slot(), may_first);

        let empty = Database::list_reservations(
            db.connection(),
            Some(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()),
        )
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_peak_rules_roundtrip() {
        let db = create_test_database();
        let rule = Database::insert_peak_rule(
            db.connection(),
            5,
            "18:00".parse().unwrap(),
            "21:00".parse().unwrap(),
            60,
        )
        .unwrap();

        let friday = Database::peak_rules_for_day(db.connection(), 5).unwrap();
        assert_eq!(friday, vec![rule]);

        let monday = Database::peak_rules_for_day(db.connection(), 1).unwrap();
        assert!(monday.is_empty());
    }

    #[test]
    fn test_insert_peak_rule_rejects_bad_day() {
        let db = create_test_database();
        let result = Database::insert_peak_rule(
            db.connection(),
            7,
            "18:00".parse().unwrap(),
            "21:00".parse().unwrap(),
            60,
        );
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_waitlist_roundtrip() {
        let db = create_test_database();
        let requested = Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap();
        let draft = WaitlistEntry::new(
            0,
            "Ada Lovelace",
            "555-0100",
            4,
            requested,
            WaitlistStatus::Waiting,
        )
        .unwrap();

        let stored = Database::insert_waitlist_entry(db.connection(), &draft).unwrap();
        assert!(stored.id() > 0);
        assert_eq!(stored.status(), WaitlistStatus::Waiting);

        let entries = Database::list_waitlist(db.connection()).unwrap();
        assert_eq!(entries, vec![stored]);
    }

    #[test]
    fn test_verify_integrity() {
        let mut db = create_test_database();
        db.verify_integrity().unwrap();
    }
}
