//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing actions

use std::path::{Path, PathBuf};

use crate::cli::args::{Action, Cli};
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI actions to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    resolver: Resolver,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, resolver: Resolver) -> Self {
        Self {
            project_root,
            resolver,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the action selected by `cli`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.action() {
            Action::Help => super::help::HelpCommand::new().execute(ui),
            Action::Detect => {
                let cmd =
                    super::detect::DetectCommand::new(&self.resolver, &self.project_root, cli.json);
                cmd.execute(ui)
            }
            Action::List => {
                let cmd =
                    super::list::ListCommand::new(&self.resolver, &self.project_root, cli.json);
                cmd.execute(ui)
            }
            Action::Set { scope, name, bare } => {
                let cmd = super::set::SetCommand::new(
                    &self.resolver,
                    &self.project_root,
                    scope,
                    name,
                    bare,
                );
                cmd.execute(ui)
            }
        }
    }
}
