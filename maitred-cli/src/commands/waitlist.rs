//! Waitlist command implementation.

use crate::error::CliError;
use crate::utils::{format_instant, load_configuration, open_engine, to_json, GlobalOptions};
use clap::Args;

/// Show the waitlist.
#[derive(Args)]
pub struct WaitlistCommand {
    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl WaitlistCommand {
    /// Execute the waitlist command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let engine = open_engine(global, &config)?;

        let entries = engine.waitlist()?;

        if self.json {
            println!("{}", to_json(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("Waitlist is empty");
            return Ok(());
        }

        for entry in entries {
            println!(
                "{:>5}  {}  {:>2} guests  {}  {}",
                entry.id(),
                format_instant(entry.requested_time()),
                entry.party_size(),
                entry.status(),
                entry.customer_name()
            );
        }
        Ok(())
    }
}
