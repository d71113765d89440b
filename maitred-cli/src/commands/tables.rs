//! Tables command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_engine, to_json, GlobalOptions};
use clap::Args;

/// List the table catalog.
#[derive(Args)]
pub struct TablesCommand {
    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl TablesCommand {
    /// Execute the tables command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let engine = open_engine(global, &config)?;

        let tables = engine.tables()?;

        if self.json {
            println!("{}", to_json(&tables)?);
            return Ok(());
        }

        if tables.is_empty() {
            println!("No tables provisioned");
            return Ok(());
        }

        for table in tables {
            println!("table {:>3}  capacity {}", table.number(), table.capacity());
        }
        Ok(())
    }
}
