//! Table types for the seating catalog.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A physical table with a fixed capacity.
///
/// Tables are immutable after creation: there is no resize operation. The
/// table number is unique within the establishment and serves as the
/// stable tie-break when candidates share a capacity.
///
/// # Examples
///
/// ```
/// use maitred::Table;
///
/// let table = Table::new(1, 4, 6).unwrap();
/// assert_eq!(table.number(), 4);
/// assert!(table.seats(5));
/// assert!(!table.seats(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: i64,
    number: u32,
    capacity: u32,
}

impl Table {
    /// Creates a table record.
    ///
    /// # Errors
    ///
    /// Returns an error if the table number or capacity is zero.
    pub fn new(id: i64, number: u32, capacity: u32) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError {
                field: "table_number".into(),
                message: "table number must be a positive integer".into(),
            });
        }
        if capacity == 0 {
            return Err(ValidationError {
                field: "capacity".into(),
                message: "capacity must be a positive integer".into(),
            });
        }
        Ok(Self {
            id,
            number,
            capacity,
        })
    }

    /// Returns the table identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the table number (unique within the establishment).
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the seating capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Checks whether the table can seat a party of the given size.
    #[must_use]
    pub const fn seats(&self, party_size: u32) -> bool {
        self.capacity >= party_size
    }
}
