//! List command implementation.
//!
//! `pmpref --list` shows every supported package manager with its install
//! status and command templates.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::catalog::{PackageManager, PackageManagerConfig};
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row of `--list` output.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub name: PackageManager,
    pub installed: bool,
    pub current: bool,
    pub config: &'static PackageManagerConfig,
}

/// The list command implementation.
pub struct ListCommand<'a> {
    resolver: &'a Resolver,
    project_root: PathBuf,
    json: bool,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(resolver: &'a Resolver, project_root: &Path, json: bool) -> Self {
        Self {
            resolver,
            project_root: project_root.to_path_buf(),
            json,
        }
    }

    /// Every catalog entry, in catalog order.
    pub fn entries(&self) -> Vec<ListEntry> {
        let available = self.resolver.available();
        let current = self.resolver.resolve(&self.project_root).name;

        PackageManager::ALL
            .into_iter()
            .map(|pm| ListEntry {
                name: pm,
                installed: available.contains(&pm),
                current: pm == current,
                config: pm.config(),
            })
            .collect()
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.entries();

        if self.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        ui.show_header("Package Managers");

        for entry in &entries {
            let current = if entry.current { " (current)" } else { "" };
            ui.message(&format!(
                "  {}{}",
                theme.highlight.apply_to(entry.name),
                theme.dim.apply_to(current)
            ));
            ui.message(&format!(
                "    Installed:   {}",
                if entry.installed { "yes" } else { "no" }
            ));
            ui.message(&format!("    Lock file:   {}", entry.config.lock_file));
            ui.message(&format!(
                "    Install:     {}",
                theme.command.apply_to(entry.config.install_cmd)
            ));
            ui.message(&format!(
                "    Run:         {}",
                theme.command.apply_to(entry.config.run_cmd)
            ));
            ui.message("");
        }

        Ok(CommandResult::success())
    }
}
