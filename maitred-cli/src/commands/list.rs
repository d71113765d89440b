//! List command implementation.

use crate::error::CliError;
use crate::utils::{format_instant, load_configuration, open_engine, parse_date, to_json, GlobalOptions};
use clap::Args;

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Restrict to one UTC day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let engine = open_engine(global, &config)?;

        let date = self.date.as_deref().map(parse_date).transpose()?;
        let reservations = engine.list(date)?;

        if self.json {
            println!("{}", to_json(&reservations)?);
            return Ok(());
        }

        if reservations.is_empty() {
            println!("No reservations");
            return Ok(());
        }

        for reservation in reservations {
            println!(
                "{:>5}  {}  {:>2} guests  table id {:>3}  {}  {}",
                reservation.id(),
                format_instant(reservation.start_time()),
                reservation.party_size(),
                reservation.table_id(),
                reservation.status(),
                reservation.customer_name()
            );
        }
        Ok(())
    }
}
