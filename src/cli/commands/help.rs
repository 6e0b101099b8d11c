//! Usage output for a bare `pmpref` invocation.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints usage.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Rendered usage text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&usage());
        Ok(CommandResult::success())
    }
}
