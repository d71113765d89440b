//! Add-table command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_engine, to_json, GlobalOptions};
use clap::Args;

/// Provision a table.
#[derive(Args)]
pub struct AddTableCommand {
    /// Table number (unique within the restaurant)
    #[arg(long, value_name = "NUMBER")]
    pub number: u32,

    /// Seating capacity
    #[arg(long, value_name = "SEATS")]
    pub capacity: u32,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl AddTableCommand {
    /// Execute the add-table command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut engine = open_engine(global, &config)?;

        let table = engine.add_table(self.number, self.capacity)?;

        if self.json {
            println!("{}", to_json(&table)?);
        } else {
            println!(
                "Added table {} (capacity {})",
                table.number(),
                table.capacity()
            );
        }
        Ok(())
    }
}
