//! Detect command implementation.
//!
//! `pmpref --detect` shows the resolved package manager, where it came from,
//! the raw value of every signal, and which managers are installed.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::catalog::{exec_command, run_command, PackageManager};
use crate::detection::ENV_VAR;
use crate::error::Result;
use crate::resolver::{selection_prompt, Resolution, Resolver, SignalReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Structured output of `--detect --json`.
#[derive(Debug, Serialize)]
pub struct DetectReport {
    pub resolution: Resolution,
    pub signals: SignalReport,
    pub available: Vec<PackageManager>,
}

/// The detect command implementation.
pub struct DetectCommand<'a> {
    resolver: &'a Resolver,
    project_root: PathBuf,
    json: bool,
}

impl<'a> DetectCommand<'a> {
    /// Create a new detect command.
    pub fn new(resolver: &'a Resolver, project_root: &Path, json: bool) -> Self {
        Self {
            resolver,
            project_root: project_root.to_path_buf(),
            json,
        }
    }

    /// Gather everything the command displays.
    pub fn report(&self) -> DetectReport {
        DetectReport {
            resolution: self.resolver.resolve(&self.project_root),
            signals: self.resolver.signals(&self.project_root),
            available: self.resolver.available(),
        }
    }
}

impl Command for DetectCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report();

        if self.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        let resolution = report.resolution;
        let signals = &report.signals;

        ui.show_header("Package Manager Detection");

        ui.message(&format!("  {}", theme.key.apply_to("Current selection:")));
        ui.message(&format!(
            "    Package manager: {}",
            theme.highlight.apply_to(resolution.name)
        ));
        ui.message(&format!("    Source:          {}", resolution.source));
        ui.message("");

        let or = |value: &Option<String>, missing: &str| {
            value.clone().unwrap_or_else(|| missing.to_string())
        };
        ui.message(&format!(
            "  {} {}",
            theme.key.apply_to("Signals:"),
            theme.dim.apply_to(format!("(override variable {})", ENV_VAR))
        ));
        ui.message(&format!(
            "    {:<16} {}",
            "env override:",
            or(&signals.env, "not set")
        ));
        ui.message(&format!(
            "    {:<16} {}",
            "project pref:",
            or(&signals.project, "not set")
        ));
        ui.message(&format!(
            "    {:<16} {}",
            "global pref:",
            or(&signals.global, "not set")
        ));
        ui.message(&format!(
            "    {:<16} {}",
            "lock file:",
            or(&signals.lockfile, "not found")
        ));
        ui.message(&format!(
            "    {:<16} {}",
            "package.json:",
            or(&signals.manifest, "not specified")
        ));
        ui.message("");

        ui.message(&format!("  {}", theme.key.apply_to("Available package managers:")));
        for pm in PackageManager::ALL {
            let current = if pm == resolution.name { " (current)" } else { "" };
            ui.message(&format!(
                "    {} {}{}",
                theme.format_installed(report.available.contains(&pm)),
                pm,
                theme.dim.apply_to(current)
            ));
        }
        ui.message("");

        ui.message(&format!("  {}", theme.key.apply_to("Commands:")));
        ui.message(&format!(
            "    Install:        {}",
            theme.command.apply_to(resolution.config.install_cmd)
        ));
        ui.message(&format!(
            "    Run script:     {}",
            theme.command.apply_to(run_command(resolution.name, "<script>"))
        ));
        ui.message(&format!(
            "    Execute binary: {}",
            theme.command.apply_to(exec_command(resolution.name, "<binary>", &[]))
        ));

        if resolution.source.is_low_confidence() {
            ui.message("");
            ui.message(&selection_prompt());
        }

        Ok(CommandResult::success())
    }
}
