//! Command-line interface for pmpref.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Action, Cli, Scope};
pub use commands::{Command, CommandDispatcher, CommandResult};
