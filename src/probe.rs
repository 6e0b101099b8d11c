//! Installed-tool probing.
//!
//! Availability is decided by walking the `PATH` entries and looking for the
//! manager's executable. No child process is spawned, so a probe is bounded
//! by a handful of `stat` calls and can never hang. A missing executable is
//! simply `false`.
//!
//! # Example
//!
//! ```no_run
//! use pmpref::probe::{list_available, PathProbe};
//!
//! let probe = PathProbe::from_env();
//! for pm in list_available(&probe) {
//!     println!("{} is installed", pm);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::PackageManager;

/// Decides whether a package manager is installed on this host.
pub trait ToolProbe {
    /// Check whether the manager's executable resolves.
    fn is_available(&self, pm: PackageManager) -> bool;
}

/// Probe that searches a list of directories for the executable.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    path_entries: Vec<PathBuf>,
}

impl PathProbe {
    /// Probe using the current process `PATH`.
    pub fn from_env() -> Self {
        Self {
            path_entries: parse_system_path(),
        }
    }

    /// Probe using explicit search directories.
    pub fn with_paths(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// The directories searched, in order.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// Resolve the executable path for a manager, if any.
    pub fn locate(&self, pm: PackageManager) -> Option<PathBuf> {
        resolve_tool_path(pm.as_str(), &self.path_entries)
    }
}

impl ToolProbe for PathProbe {
    fn is_available(&self, pm: PackageManager) -> bool {
        let found = self.locate(pm);
        tracing::debug!("probe {}: {:?}", pm, found);
        found.is_some()
    }
}

/// Probe every catalog entry in catalog order and keep the installed ones.
///
/// Used for display and diagnostics only; never feeds into resolution
/// beyond confirming the default.
pub fn list_available(probe: &dyn ToolProbe) -> Vec<PackageManager> {
    PackageManager::ALL
        .into_iter()
        .filter(|pm| probe.is_available(*pm))
        .collect()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &[".cmd", ".exe", ".bat", ""];

#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is a regular, executable file.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for suffix in EXECUTABLE_SUFFIXES {
            let candidate = dir.join(format!("{}{}", tool, suffix));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_tool(dir: &Path, name: &str) {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn empty_path_finds_nothing() {
        let probe = PathProbe::with_paths(Vec::new());
        assert!(!probe.is_available(PackageManager::Npm));
        assert!(list_available(&probe).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_on_path() {
        let temp = TempDir::new().unwrap();
        fake_tool(temp.path(), "pnpm");

        let probe = PathProbe::with_paths(vec![temp.path().to_path_buf()]);
        assert!(probe.is_available(PackageManager::Pnpm));
        assert!(!probe.is_available(PackageManager::Yarn));
        assert_eq!(probe.locate(PackageManager::Pnpm), Some(temp.path().join("pnpm")));
    }

    #[cfg(unix)]
    #[test]
    fn ignores_non_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("yarn");
        fs::write(&path, "").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let probe = PathProbe::with_paths(vec![temp.path().to_path_buf()]);
        assert!(!probe.is_available(PackageManager::Yarn));
    }

    #[test]
    fn ignores_directory_named_like_tool() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("bun")).unwrap();

        let probe = PathProbe::with_paths(vec![temp.path().to_path_buf()]);
        assert!(!probe.is_available(PackageManager::Bun));
    }

    #[cfg(unix)]
    #[test]
    fn list_available_is_catalog_ordered_subset() {
        let temp = TempDir::new().unwrap();
        fake_tool(temp.path(), "bun");
        fake_tool(temp.path(), "npm");

        let probe = PathProbe::with_paths(vec![temp.path().to_path_buf()]);
        let first = list_available(&probe);
        assert_eq!(first, vec![PackageManager::Npm, PackageManager::Bun]);
        assert_eq!(list_available(&probe), first);
    }

    #[cfg(unix)]
    #[test]
    fn earlier_path_entry_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fake_tool(first.path(), "npm");
        fake_tool(second.path(), "npm");

        let found = resolve_tool_path(
            "npm",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(found, Some(first.path().join("npm")));
    }
}
