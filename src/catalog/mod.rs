//! Supported package managers.
//!
//! The set of managers is closed: each [`PackageManager`] variant maps to a
//! static [`PackageManagerConfig`] holding its lockfile name and command
//! templates. Supporting a new tool means adding a variant and its config.

pub mod commands;

pub use commands::{exec_command, run_command};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PmError;

/// A supported package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

/// Invocation templates for a package manager.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManagerConfig {
    /// Canonical identifier (`npm`, `pnpm`, ...).
    pub name: &'static str,
    /// Lockfile written by installs, used for detection.
    pub lock_file: &'static str,
    /// Install dependencies.
    pub install_cmd: &'static str,
    /// Prefix for running a package script.
    pub run_cmd: &'static str,
    /// Prefix for executing a package binary.
    pub exec_cmd: &'static str,
    pub test_cmd: &'static str,
    pub build_cmd: &'static str,
    pub dev_cmd: &'static str,
}

static NPM: PackageManagerConfig = PackageManagerConfig {
    name: "npm",
    lock_file: "package-lock.json",
    install_cmd: "npm install",
    run_cmd: "npm run",
    exec_cmd: "npx",
    test_cmd: "npm test",
    build_cmd: "npm run build",
    dev_cmd: "npm run dev",
};

static PNPM: PackageManagerConfig = PackageManagerConfig {
    name: "pnpm",
    lock_file: "pnpm-lock.yaml",
    install_cmd: "pnpm install",
    run_cmd: "pnpm",
    exec_cmd: "pnpm dlx",
    test_cmd: "pnpm test",
    build_cmd: "pnpm build",
    dev_cmd: "pnpm dev",
};

static YARN: PackageManagerConfig = PackageManagerConfig {
    name: "yarn",
    lock_file: "yarn.lock",
    install_cmd: "yarn",
    run_cmd: "yarn",
    exec_cmd: "yarn dlx",
    test_cmd: "yarn test",
    build_cmd: "yarn build",
    dev_cmd: "yarn dev",
};

static BUN: PackageManagerConfig = PackageManagerConfig {
    name: "bun",
    lock_file: "bun.lockb",
    install_cmd: "bun install",
    run_cmd: "bun run",
    exec_cmd: "bunx",
    test_cmd: "bun test",
    build_cmd: "bun run build",
    dev_cmd: "bun run dev",
};

impl PackageManager {
    /// Every supported manager, in catalog order.
    ///
    /// Catalog order is the tie-break wherever several managers match at once.
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun];

    /// The canonical identifier.
    pub fn as_str(self) -> &'static str {
        self.config().name
    }

    /// Static invocation templates for this manager.
    pub fn config(self) -> &'static PackageManagerConfig {
        match self {
            Self::Npm => &NPM,
            Self::Pnpm => &PNPM,
            Self::Yarn => &YARN,
            Self::Bun => &BUN,
        }
    }

    /// Look up a manager by its exact (case-sensitive) identifier.
    pub fn from_identifier(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pm| pm.as_str() == id)
    }

    /// All identifiers in catalog order.
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|pm| pm.as_str()).collect()
    }

    /// Short human description, used in usage and selection hints.
    pub fn description(self) -> &'static str {
        match self {
            Self::Npm => "Node Package Manager (default with Node.js)",
            Self::Pnpm => "Fast, disk space efficient package manager",
            Self::Yarn => "Classic Yarn package manager",
            Self::Bun => "All-in-one JavaScript runtime & toolkit",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = PmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| PmError::unknown(s))
    }
}
