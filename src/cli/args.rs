//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct; [`Cli::action`] picks the
//! single action an invocation asks for.

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Package managers:
  npm    Node Package Manager (default with Node.js)
  pnpm   Fast, disk space efficient package manager
  yarn   Classic Yarn package manager
  bun    All-in-one JavaScript runtime & toolkit

Examples:
  pmpref --detect          Show the current package manager and why
  pmpref --global pnpm     Prefer pnpm everywhere
  pmpref --project bun     Prefer bun in this project
  pmpref --list            Show installed package managers";

/// pmpref - Package manager preference resolution.
#[derive(Debug, Parser)]
#[command(name = "pmpref")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Package manager to save as the global preference
    #[arg(value_name = "PACKAGE_MANAGER")]
    pub package_manager: Option<String>,

    /// Detect and show the current package manager
    #[arg(long)]
    pub detect: bool,

    /// List supported package managers and whether they are installed
    #[arg(long)]
    pub list: bool,

    /// Save the global preference (~/.claude/package-manager.json)
    #[arg(long, value_name = "PM", num_args = 0..=1)]
    pub global: Option<Option<String>>,

    /// Save the project preference (.claude/package-manager.json)
    #[arg(long, value_name = "PM", num_args = 0..=1)]
    pub project: Option<Option<String>>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, env = "PMPREF_CWD")]
    pub cwd: Option<PathBuf>,

    /// Print --detect and --list results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Which preference document a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Project,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Project => "project",
        }
    }
}

/// The action requested by an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage.
    Help,
    /// Show the resolution and every raw signal.
    Detect,
    /// Show every catalog entry with its install status.
    List,
    /// Write a preference. `None` means the flag was given without a value.
    Set {
        scope: Scope,
        name: Option<String>,
        bare: bool,
    },
}

impl Cli {
    /// Pick the action, in the order `--detect`, `--list`, `--global`,
    /// `--project`, then a bare package manager name.
    pub fn action(&self) -> Action {
        if self.detect {
            return Action::Detect;
        }
        if self.list {
            return Action::List;
        }
        if let Some(name) = &self.global {
            return Action::Set {
                scope: Scope::Global,
                name: name.clone(),
                bare: false,
            };
        }
        if let Some(name) = &self.project {
            return Action::Set {
                scope: Scope::Project,
                name: name.clone(),
                bare: false,
            };
        }
        match &self.package_manager {
            Some(name) => Action::Set {
                scope: Scope::Global,
                name: Some(name.clone()),
                bare: true,
            },
            None => Action::Help,
        }
    }
}
