//! Reserve command implementation.
//!
//! Books a table for a party. Without `--table`, the engine seats the
//! party at the smallest sufficient free table; with it, the named table
//! is tried first and the engine falls back to a suggestion or the
//! waitlist.

use crate::error::CliError;
use crate::utils::{
    format_instant, load_configuration, open_engine, parse_instant, to_json, GlobalOptions,
};
use clap::Args;
use maitred::{CreateOutcome, CreateRequest, Database};

/// Book a table.
#[derive(Args)]
pub struct ReserveCommand {
    /// Customer name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Customer phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Party size
    #[arg(long, value_name = "SIZE")]
    pub party_size: u32,

    /// Start time (RFC 3339, e.g. 2024-05-01T19:00:00Z)
    #[arg(long, value_name = "TIME")]
    pub start: String,

    /// Duration in minutes
    #[arg(long, value_name = "MINUTES")]
    pub duration: u32,

    /// Book a specific table by its number
    #[arg(long, value_name = "NUMBER")]
    pub table: Option<u32>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut engine = open_engine(global, &config)?;

        let start = parse_instant(&self.start)?;
        let mut request = CreateRequest::new(
            self.name.as_str(),
            self.phone.as_str(),
            self.party_size,
            start,
            self.duration,
        );

        if let Some(number) = self.table {
            let table = Database::get_table_by_number(engine.database().connection(), number)?
                .ok_or_else(|| {
                    CliError::InvalidArguments(format!("no table with number {number}"))
                })?;
            request = request.with_table(table.id());
        }

        let outcome = engine.create(&request)?;

        if self.json {
            println!("{}", to_json(&outcome)?);
            return Ok(());
        }

        match outcome {
            CreateOutcome::Confirmed(reservation) => {
                println!(
                    "Confirmed reservation {} for {} at {} until {} (table id {})",
                    reservation.id(),
                    reservation.customer_name(),
                    format_instant(reservation.start_time()),
                    format_instant(reservation.end_time()),
                    reservation.table_id()
                );
            }
            CreateOutcome::Suggestion { reason, alternative } => {
                println!(
                    "Not booked: {reason}. Table {} (capacity {}) is available; re-run with --table {}",
                    alternative.number(),
                    alternative.capacity(),
                    alternative.number()
                );
            }
            CreateOutcome::Waitlisted(entry) => {
                println!(
                    "No tables available; added {} to the waitlist (entry {})",
                    entry.customer_name(),
                    entry.id()
                );
            }
        }
        Ok(())
    }
}
