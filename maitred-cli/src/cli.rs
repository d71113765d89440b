//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddTableCommand, CancelCommand, InitCommand, ListCommand, ModifyCommand, ReserveCommand,
    TablesCommand, WaitlistCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "maitred")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH", global = true, env = "MAITRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MAITRED_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "MAITRED_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Install the restaurant configuration and peak rules
    Init(InitCommand),

    /// Provision a table
    AddTable(AddTableCommand),

    /// List the table catalog
    Tables(TablesCommand),

    /// Book a table
    Reserve(ReserveCommand),

    /// Change an existing reservation
    Modify(ModifyCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Show the waitlist
    Waitlist(WaitlistCommand),
}
