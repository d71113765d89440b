//! Modify command implementation.

use crate::error::CliError;
use crate::utils::{
    format_instant, load_configuration, open_engine, parse_instant, to_json, GlobalOptions,
};
use clap::Args;
use maitred::ReservationUpdate;

/// Change an existing reservation.
#[derive(Args)]
pub struct ModifyCommand {
    /// Reservation identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New start time (RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub start: Option<String>,

    /// New duration in minutes
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// New party size
    #[arg(long, value_name = "SIZE")]
    pub party_size: Option<u32>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl ModifyCommand {
    /// Execute the modify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut engine = open_engine(global, &config)?;

        let mut update = ReservationUpdate::new();
        if let Some(ref start) = self.start {
            update = update.with_start_time(parse_instant(start)?);
        }
        if let Some(duration) = self.duration {
            update = update.with_duration_minutes(duration);
        }
        if let Some(party_size) = self.party_size {
            update = update.with_party_size(party_size);
        }

        let reservation = engine.modify(self.id, &update)?;

        if self.json {
            println!("{}", to_json(&reservation)?);
        } else {
            println!(
                "Reservation {} now at {} until {} for a party of {} (table id {})",
                reservation.id(),
                format_instant(reservation.start_time()),
                format_instant(reservation.end_time()),
                reservation.party_size(),
                reservation.table_id()
            );
        }
        Ok(())
    }
}
