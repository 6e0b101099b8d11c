//! Set command implementation.
//!
//! `pmpref --global <pm>`, `pmpref --project <pm>`, and `pmpref <pm>` save a
//! preference document.

use std::path::{Path, PathBuf};

use crate::catalog::PackageManager;
use crate::cli::args::Scope;
use crate::error::{PmError, Result};
use crate::resolver::Resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::help::usage;

/// The set command implementation.
pub struct SetCommand<'a> {
    resolver: &'a Resolver,
    project_root: PathBuf,
    scope: Scope,
    name: Option<String>,
    bare: bool,
}

impl<'a> SetCommand<'a> {
    /// Create a new set command.
    ///
    /// `bare` marks a package manager given without a flag; an unknown bare
    /// name is reported together with usage.
    pub fn new(
        resolver: &'a Resolver,
        project_root: &Path,
        scope: Scope,
        name: Option<String>,
        bare: bool,
    ) -> Self {
        Self {
            resolver,
            project_root: project_root.to_path_buf(),
            scope,
            name,
            bare,
        }
    }
}

impl Command for SetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = self.name.as_deref() else {
            ui.error(&format!(
                "--{} requires a package manager name",
                self.scope.label()
            ));
            return Ok(CommandResult::failure(1));
        };

        let pm = match name.parse::<PackageManager>() {
            Ok(pm) => pm,
            Err(e @ PmError::UnknownPackageManager { .. }) if self.bare => {
                ui.error(&format!("Unknown option or package manager \"{}\"", name));
                ui.message(&usage());
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let store = self.resolver.store();
        let path = match self.scope {
            Scope::Global => {
                if !self.resolver.is_available(pm) {
                    ui.warning(&format!("{} is not installed on this system", pm));
                }
                store.write_global(pm.as_str())?
            }
            Scope::Project => store.write_project(&self.project_root, pm.as_str())?,
        };

        ui.success(&format!("{} preference set to: {}", capitalize(self.scope.label()), pm));
        ui.message(&format!("  Saved to: {}", path.display()));

        Ok(CommandResult::success())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceStore;
    use crate::probe::ToolProbe;
    use crate::ui::MockUI;
    use std::env::VarError;
    use tempfile::TempDir;

    struct Installed(Vec<PackageManager>);

    impl ToolProbe for Installed {
        fn is_available(&self, pm: PackageManager) -> bool {
            self.0.contains(&pm)
        }
    }

    fn resolver(temp: &TempDir, installed: Vec<PackageManager>) -> Resolver {
        Resolver::new(
            PreferenceStore::new(temp.path().join("home/.claude/package-manager.json")),
            Box::new(Installed(installed)),
            Box::new(|_: &str| Err(VarError::NotPresent)),
        )
    }

    fn set<'a>(
        resolver: &'a Resolver,
        root: &Path,
        scope: Scope,
        name: Option<&str>,
    ) -> SetCommand<'a> {
        SetCommand::new(resolver, root, scope, name.map(String::from), false)
    }

    #[test]
    fn sets_global_preference() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![PackageManager::Pnpm]);
        let mut ui = MockUI::new();

        let result = set(&resolver, temp.path(), Scope::Global, Some("pnpm"))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(resolver.store().read_global(), Some("pnpm".to_string()));
        assert!(ui.has_success("Global preference set to: pnpm"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn warns_when_global_choice_not_installed() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![]);
        let mut ui = MockUI::new();

        set(&resolver, temp.path(), Scope::Global, Some("bun"))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("bun is not installed"));
        assert_eq!(resolver.store().read_global(), Some("bun".to_string()));
    }

    #[test]
    fn sets_project_preference() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![]);
        let mut ui = MockUI::new();

        set(&resolver, temp.path(), Scope::Project, Some("yarn"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(resolver.store().read_project(temp.path()), Some("yarn".to_string()));
        assert!(ui.has_success("Project preference set to: yarn"));
        assert!(ui.has_message(".claude"));
    }

    #[test]
    fn missing_name_fails_with_exit_one() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![]);
        let mut ui = MockUI::new();

        let result = set(&resolver, temp.path(), Scope::Project, None)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("--project requires a package manager name"));
    }

    #[test]
    fn unknown_name_is_error_and_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![]);
        let mut ui = MockUI::new();

        let err = set(&resolver, temp.path(), Scope::Global, Some("pip"))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, PmError::UnknownPackageManager { .. }));
        assert!(!resolver.store().global_path().exists());
    }

    #[test]
    fn unknown_bare_name_shows_usage() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp, vec![]);
        let mut ui = MockUI::new();

        let cmd = SetCommand::new(&resolver, temp.path(), Scope::Global, Some("npmx".into()), true);
        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, PmError::UnknownPackageManager { .. }));
        assert!(ui.has_error("Unknown option or package manager"));
        assert!(ui.has_message("Usage"));
    }

    #[test]
    fn capitalize_label() {
        assert_eq!(capitalize("global"), "Global");
        assert_eq!(capitalize(""), "");
    }
}
