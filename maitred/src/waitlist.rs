//! Waitlist types.
//!
//! The waitlist is the terminal sink for requests no table could satisfy.
//! Entries are write-only in this core: nothing promotes a waiting party to
//! a confirmed reservation, and a cancellation freeing a table does not
//! notify anyone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// Status of a waitlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitlistStatus {
    /// Waiting for a table to free up.
    Waiting,
    /// The party has been contacted.
    Notified,
    /// The entry lapsed without being seated.
    Expired,
}

impl WaitlistStatus {
    /// Returns the canonical lowercase name used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Notified => "notified",
            Self::Expired => "expired",
        }
    }

    /// Parses a status from its storage name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "notified" => Ok(Self::Notified),
            "expired" => Ok(Self::Expired),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown waitlist status '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A party waiting for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    id: i64,
    customer_name: String,
    customer_phone: String,
    party_size: u32,
    requested_time: DateTime<Utc>,
    status: WaitlistStatus,
}

impl WaitlistEntry {
    /// Creates a waitlist entry record.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer name or phone is empty after
    /// trimming, or the party size is zero.
    pub fn new(
        id: i64,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        party_size: u32,
        requested_time: DateTime<Utc>,
        status: WaitlistStatus,
    ) -> Result<Self, ValidationError> {
        let customer_name = customer_name.into().trim().to_string();
        if customer_name.is_empty() {
            return Err(ValidationError {
                field: "customer_name".into(),
                message: "customer name must be non-empty".into(),
            });
        }
        let customer_phone = customer_phone.into().trim().to_string();
        if customer_phone.is_empty() {
            return Err(ValidationError {
                field: "customer_phone".into(),
                message: "customer phone must be non-empty".into(),
            });
        }
        if party_size == 0 {
            return Err(ValidationError {
                field: "party_size".into(),
                message: "party size must be a positive integer".into(),
            });
        }
        Ok(Self {
            id,
            customer_name,
            customer_phone,
            party_size,
            requested_time,
            status,
        })
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
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

    /// Returns the time the party originally asked for.
    #[must_use]
    pub const fn requested_time(&self) -> DateTime<Utc> {
        self.requested_time
    }

    /// Returns the entry status.
    #[must_use]
    pub const fn status(&self) -> WaitlistStatus {
        self.status
    }
}
