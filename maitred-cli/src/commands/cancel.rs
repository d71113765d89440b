//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_engine, to_json, GlobalOptions};
use clap::Args;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut engine = open_engine(global, &config)?;

        let reservation = engine.cancel(self.id)?;

        if self.json {
            println!("{}", to_json(&reservation)?);
        } else {
            println!(
                "Cancelled reservation {} for {}",
                reservation.id(),
                reservation.customer_name()
            );
        }
        Ok(())
    }
}
