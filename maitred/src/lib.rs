#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # maitred
//!
//! A library for managing restaurant table reservations.
//!
//! maitred allocates a bounded set of tables to time-bounded reservations
//! for a single establishment: it detects interval conflicts per table,
//! seats each party at the smallest sufficient free table, validates
//! requests against operating hours and peak-hour duration caps, and falls
//! back to suggesting an alternative table or enqueuing a waitlist entry
//! when no table satisfies a request.
//!
//! ## Core Types
//!
//! - [`TimeOfDay`] and [`TimeSlot`]: wall-clock and half-open interval types
//! - [`Restaurant`], [`Table`], [`Reservation`], [`WaitlistEntry`]: domain records
//! - [`BookingEngine`]: the long-lived facade over the decision flows
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use maitred::{TimeOfDay, TimeSlot};
//! use chrono::{TimeZone, Utc};
//!
//! // Operating hours are plain wall-clock values
//! let opening: TimeOfDay = "09:00".parse().unwrap();
//! assert_eq!(opening.hour(), 9);
//!
//! // Reservations occupy half-open slots; touching slots do not conflict
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 19, 0, 0).unwrap();
//! let dinner = TimeSlot::from_start_duration(start, 90).unwrap();
//! let next = TimeSlot::from_start_duration(dinner.end(), 60).unwrap();
//! assert!(!dinner.overlaps(&next));
//! ```

pub mod allocator;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod restaurant;
pub mod slot;
pub mod table;
pub mod validate;
pub mod waitlist;

// Re-export key types at crate root for convenience
pub use allocator::TableAllocator;
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use engine::BookingEngine;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{CreateOutcome, CreateRequest, ReservationUpdate, SuggestionReason};
pub use reservation::{Reservation, ReservationStatus};
pub use restaurant::{PeakRule, Restaurant};
pub use slot::{TimeOfDay, TimeSlot};
pub use table::Table;
pub use validate::SlotValidator;
pub use waitlist::{WaitlistEntry, WaitlistStatus};
