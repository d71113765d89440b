//! Seating optimization: choosing the smallest sufficient free table.
//!
//! This module implements the core allocation algorithm. Candidates are the
//! tables whose capacity covers the party, ordered ascending by capacity
//! with the table number as a stable tie-break; the winner is the first
//! candidate without an overlapping confirmed reservation.
//!
//! The scan is expressed as a single anti-join query (candidates minus
//! tables with an overlapping confirmed reservation) rather than one
//! overlap probe per candidate. One round trip keeps the window between
//! the check and the subsequent write as small as possible; the decision
//! flows additionally run the whole check-then-write sequence inside an
//! immediate transaction.

use rusqlite::{params, Connection};

use crate::database::{datetime_to_unix_secs, row_to_table};
use crate::error::Result;
use crate::slot::TimeSlot;
use crate::table::Table;

const SELECT_CANDIDATES: &str = r"
    SELECT id, table_number, capacity
    FROM tables
    WHERE capacity >= ?1
    ORDER BY capacity ASC, table_number ASC
";

// Anti-join: capacity-feasible tables minus those holding a confirmed
// reservation that overlaps the requested slot (half-open comparison).
const SELECT_BEST_FREE_TABLE: &str = r"
    SELECT t.id, t.table_number, t.capacity
    FROM tables t
    WHERE t.capacity >= ?1
      AND t.id NOT IN (
          SELECT r.table_id
          FROM reservations r
          WHERE r.status = 'confirmed'
            AND r.start_time < ?3
            AND r.end_time > ?2
            AND (?4 IS NULL OR r.id <> ?4)
      )
    ORDER BY t.capacity ASC, t.table_number ASC
    LIMIT 1
";

/// Stateless table allocator.
///
/// The allocator finds the smallest-capacity free table for a party over a
/// slot. It is designed to be stateless, with all state coming from the
/// database connection it is handed, so the decision flows can run it
/// inside their own transactions.
///
/// # Examples
///
/// ```no_run
/// use maitred::allocator::TableAllocator;
/// use maitred::database::{Database, DatabaseConfig};
/// use maitred::TimeSlot;
/// use chrono::{TimeZone, Utc};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/maitred.db")).unwrap();
/// let slot = TimeSlot::from_start_duration(
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// )
/// .unwrap();
///
/// let allocator = TableAllocator::new();
/// let best = allocator.find_best_table(db.connection(), 2, &slot, None).unwrap();
/// match best {
///     Some(table) => println!("seat them at table {}", table.number()),
///     None => println!("no table free"),
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableAllocator;

impl TableAllocator {
    /// Creates a new table allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Lists the capacity-feasible candidates for a party, ascending by
    /// capacity with table number as the tie-break.
    ///
    /// The ordering is total, so repeated calls over unchanged state
    /// return the same sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_candidates(&self, conn: &Connection, party_size: u32) -> Result<Vec<Table>> {
        let mut stmt = conn.prepare(SELECT_CANDIDATES)?;
        let tables = stmt
            .query_map(params![party_size], row_to_table)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(tables)
    }

    /// Finds the smallest sufficient table free over `slot`.
    ///
    /// Only *confirmed* reservations block a table; cancelled rows never
    /// count. `exclude_reservation` removes one reservation from the
    /// overlap set, used by the modify flow so a reservation never
    /// conflicts with its own prior slot.
    ///
    /// Returns `None` when every candidate is occupied or no candidate
    /// seats the party.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_best_table(
        &self,
        conn: &Connection,
        party_size: u32,
        slot: &TimeSlot,
        exclude_reservation: Option<i64>,
    ) -> Result<Option<Table>> {
        let mut stmt = conn.prepare(SELECT_BEST_FREE_TABLE)?;
        match stmt.query_row(
            params![
                party_size,
                datetime_to_unix_secs(slot.start()),
                datetime_to_unix_secs(slot.end()),
                exclude_reservation,
            ],
            row_to_table,
        ) {
            Ok(table) => Ok(Some(table)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
