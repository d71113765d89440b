//! Command implementations for the maitred CLI.

mod add_table;
mod cancel;
mod init;
mod list;
mod modify;
mod reserve;
mod tables;
mod waitlist;

pub use add_table::AddTableCommand;
pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use modify::ModifyCommand;
pub use reserve::ReserveCommand;
pub use tables::TablesCommand;
pub use waitlist::WaitlistCommand;
