//! Reservation types for tracking table bookings.
//!
//! This module provides the reservation record, its lifecycle status, and a
//! builder with field validation for construction from external input or
//! database rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;

/// Lifecycle status of a reservation.
///
/// Only `Confirmed` reservations participate in overlap checks; a
/// `Cancelled` reservation permanently frees its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Holds its table for the reserved slot.
    Confirmed,
    /// The party was seated and has left.
    Completed,
    /// Cancelled; excluded from overlap checks.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the canonical lowercase name used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its storage name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown reservation status '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table booking for a party over a time slot.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use maitred::{Reservation, TimeSlot};
///
/// let slot = TimeSlot::from_start_duration(
///     Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap(),
///     90,
/// )
/// .unwrap();
///
/// let reservation = Reservation::builder(1, 3, slot)
///     .customer_name("Ada Lovelace")
///     .customer_phone("555-0100")
///     .party_size(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.party_size(), 2);
/// assert!(reservation.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: i64,
    table_id: i64,
    customer_name: String,
    customer_phone: String,
    party_size: u32,
    slot: TimeSlot,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a new reservation builder.
    ///
    /// The identifier, table reference, and slot are required up front;
    /// customer fields and party size are set on the builder and validated
    /// by [`ReservationBuilder::build`].
    #[must_use]
    pub fn builder(id: i64, table_id: i64, slot: TimeSlot) -> ReservationBuilder {
        ReservationBuilder {
            id,
            table_id,
            slot,
            customer_name: None,
            customer_phone: None,
            party_size: None,
            status: ReservationStatus::Confirmed,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the identifier of the reserved table.
    #[must_use]
    pub const fn table_id(&self) -> i64 {
        self.table_id
    }

    /// Returns the customer's name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer's phone number.
    #[must_use]
    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the reserved slot.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Returns the start instant of the reserved slot.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.slot.start()
    }

    /// Returns the end instant of the reserved slot.
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.slot.end()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Checks whether this reservation currently holds its table.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

/// Builder for creating [`Reservation`] instances.
///
/// The builder validates customer fields and party size, trimming
/// whitespace and rejecting empty values.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: i64,
    table_id: i64,
    slot: TimeSlot,
    customer_name: Option<String>,
    customer_phone: Option<String>,
    party_size: Option<u32>,
    status: ReservationStatus,
}

impl ReservationBuilder {
    /// Sets the customer's name. Leading/trailing whitespace is trimmed.
    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into().trim().to_string());
        self
    }

    /// Sets the customer's phone number. Whitespace is trimmed.
    #[must_use]
    pub fn customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into().trim().to_string());
        self
    }

    /// Sets the party size.
    #[must_use]
    pub const fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = Some(party_size);
        self
    }

    /// Sets the lifecycle status (defaults to `Confirmed`).
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer name is missing or empty after trimming
    /// - The customer phone is missing or empty after trimming
    /// - The party size is missing or zero
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let customer_name = match self.customer_name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ValidationError {
                    field: "customer_name".into(),
                    message: "customer name must be non-empty".into(),
                })
            }
        };

        let customer_phone = match self.customer_phone {
            Some(phone) if !phone.is_empty() => phone,
            _ => {
                return Err(ValidationError {
                    field: "customer_phone".into(),
                    message: "customer phone must be non-empty".into(),
                })
            }
        };

        let party_size = match self.party_size {
            Some(size) if size > 0 => size,
            _ => {
                return Err(ValidationError {
                    field: "party_size".into(),
                    message: "party size must be a positive integer".into(),
                })
            }
        };

        Ok(Reservation {
            id: self.id,
            table_id: self.table_id,
            customer_name,
            customer_phone,
            party_size,
            slot: self.slot,
            status: self.status,
        })
    }
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
