//! Package manager resolution.
//!
//! [`Resolver::resolve`] walks a fixed precedence chain and stops at the
//! first signal naming a supported package manager:
//!
//! 1. `CLAUDE_PACKAGE_MANAGER` environment override
//! 2. Project preference (`.claude/package-manager.json`)
//! 3. User preference (`~/.claude/package-manager.json`)
//! 4. Lockfile in the working directory
//! 5. `packageManager` field of `package.json`
//! 6. `npm`, tagged `default` if installed and `fallback` otherwise
//!
//! Resolution never fails. Every result is computed fresh; nothing is cached
//! between calls.
//!
//! # Example
//!
//! ```no_run
//! use pmpref::resolver::Resolver;
//!
//! let resolver = Resolver::from_env();
//! let resolution = resolver.resolve(std::path::Path::new("."));
//! println!("{} ({})", resolution.name, resolution.source);
//! ```

mod source;

pub use source::Source;

use serde::Serialize;
use std::env::VarError;
use std::path::Path;

use crate::catalog::{PackageManager, PackageManagerConfig};
use crate::detection::{
    detect_from_environment, detect_from_lockfile, detect_from_manifest, ENV_VAR,
};
use crate::preferences::PreferenceStore;
use crate::probe::{list_available, PathProbe, ToolProbe};

/// Manager used when no signal is present.
pub const DEFAULT_PACKAGE_MANAGER: PackageManager = PackageManager::Npm;

/// Environment variable lookup, injectable for tests.
pub type EnvLookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// A detector in the precedence chain.
type SignalFn = fn(&Resolver, &Path) -> Option<String>;

/// Precedence chain, highest priority first.
const SIGNAL_CHAIN: &[(Source, SignalFn)] = &[
    (Source::Env, env_signal),
    (Source::Project, project_signal),
    (Source::Global, global_signal),
    (Source::Lockfile, lockfile_signal),
    (Source::Manifest, manifest_signal),
];

fn env_signal(resolver: &Resolver, _cwd: &Path) -> Option<String> {
    detect_from_environment(&*resolver.env)
}

fn project_signal(resolver: &Resolver, cwd: &Path) -> Option<String> {
    resolver.store.read_project(cwd)
}

fn global_signal(resolver: &Resolver, _cwd: &Path) -> Option<String> {
    resolver.store.read_global()
}

fn lockfile_signal(_resolver: &Resolver, cwd: &Path) -> Option<String> {
    detect_from_lockfile(cwd)
}

fn manifest_signal(_resolver: &Resolver, cwd: &Path) -> Option<String> {
    detect_from_manifest(cwd)
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved package manager.
    pub name: PackageManager,
    /// Signal that produced it.
    pub source: Source,
    /// Its invocation templates.
    pub config: &'static PackageManagerConfig,
}

impl Resolution {
    fn new(name: PackageManager, source: Source) -> Self {
        Self {
            name,
            source,
            config: name.config(),
        }
    }
}

/// Raw, unvalidated value of every signal, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalReport {
    pub env: Option<String>,
    pub project: Option<String>,
    pub global: Option<String>,
    pub lockfile: Option<String>,
    pub manifest: Option<String>,
}

impl SignalReport {
    /// Raw value recorded for `source`, if it is one of the chain's signals.
    pub fn get(&self, source: Source) -> Option<&str> {
        let value = match source {
            Source::Env => &self.env,
            Source::Project => &self.project,
            Source::Global => &self.global,
            Source::Lockfile => &self.lockfile,
            Source::Manifest => &self.manifest,
            Source::Default | Source::Fallback => return None,
        };
        value.as_deref()
    }

    fn set(&mut self, source: Source, value: Option<String>) {
        match source {
            Source::Env => self.env = value,
            Source::Project => self.project = value,
            Source::Global => self.global = value,
            Source::Lockfile => self.lockfile = value,
            Source::Manifest => self.manifest = value,
            Source::Default | Source::Fallback => {}
        }
    }
}

/// Resolves which package manager applies in a directory.
pub struct Resolver {
    store: PreferenceStore,
    probe: Box<dyn ToolProbe>,
    env: EnvLookup,
}

impl Resolver {
    /// Create a resolver from explicit collaborators.
    pub fn new(store: PreferenceStore, probe: Box<dyn ToolProbe>, env: EnvLookup) -> Self {
        Self { store, probe, env }
    }

    /// Resolver wired to the process environment, home directory, and `PATH`.
    pub fn from_env() -> Self {
        Self::new(
            PreferenceStore::user_default(),
            Box::new(PathProbe::from_env()),
            Box::new(|key: &str| std::env::var(key)),
        )
    }

    /// The preference store used for reads and writes.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Resolve the package manager for `cwd`.
    pub fn resolve(&self, cwd: &Path) -> Resolution {
        for (source, detect) in SIGNAL_CHAIN {
            let Some(raw) = detect(self, cwd) else {
                continue;
            };

            match PackageManager::from_identifier(&raw) {
                Some(pm) => {
                    tracing::debug!("resolved {} from {}", pm, source);
                    return Resolution::new(pm, *source);
                }
                None if *source == Source::Env => {
                    tracing::warn!(
                        "ignoring {}={:?}: not a supported package manager",
                        ENV_VAR,
                        raw
                    );
                }
                None => {
                    tracing::debug!("ignoring unsupported {} value {:?}", source, raw);
                }
            }
        }

        let source = if self.probe.is_available(DEFAULT_PACKAGE_MANAGER) {
            Source::Default
        } else {
            Source::Fallback
        };
        tracing::debug!("no signal found, using {} ({})", DEFAULT_PACKAGE_MANAGER, source);
        Resolution::new(DEFAULT_PACKAGE_MANAGER, source)
    }

    /// Collect the raw value of every signal without validation.
    pub fn signals(&self, cwd: &Path) -> SignalReport {
        let mut report = SignalReport::default();
        for (source, detect) in SIGNAL_CHAIN {
            report.set(*source, detect(self, cwd));
        }
        report
    }

    /// Whether a single manager is installed.
    pub fn is_available(&self, pm: PackageManager) -> bool {
        self.probe.is_available(pm)
    }

    /// Installed managers, in catalog order.
    pub fn available(&self) -> Vec<PackageManager> {
        list_available(&*self.probe)
    }
}

/// Hint shown when no explicit preference exists.
pub fn selection_prompt() -> String {
    let mut lines = vec![
        "[PackageManager] No package manager preference detected.".to_string(),
        "Supported package managers:".to_string(),
    ];
    for pm in PackageManager::ALL {
        lines.push(format!("  - {:<5} {}", pm.as_str(), pm.description()));
    }
    lines.push(String::new());
    lines.push("To set your preferred package manager:".to_string());
    lines.push(format!("  - Environment: set {}=pnpm", ENV_VAR));
    lines.push("  - Global:      pmpref --global pnpm".to_string());
    lines.push("  - Project:     pmpref --project pnpm".to_string());
    lines.join("\n")
}
