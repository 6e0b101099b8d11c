//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and formats the structured
//! results of the core for display. [`CommandDispatcher`] routes an
//! [`Action`](crate::cli::Action) to its command.

pub mod detect;
pub mod dispatcher;
pub mod help;
pub mod list;
pub mod set;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
