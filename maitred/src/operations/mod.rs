//! Decision flows built on the validator and the allocator.
//!
//! Each flow (create, modify, cancel) is a single logical unit of work:
//! its reads, constraint checks, allocation, and mutation run inside one
//! immediate transaction, so a concurrent operation can never confirm a
//! conflicting reservation between the overlap check and the write. The
//! mutation is always the last step; a failure before it leaves the
//! ledger unchanged.

pub mod cancel;
pub mod create;
pub mod modify;

pub use create::{CreateOutcome, CreateRequest, SuggestionReason};
pub use modify::ReservationUpdate;
