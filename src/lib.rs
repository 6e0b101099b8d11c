//! pmpref - Package manager preference resolution.
//!
//! pmpref decides which JavaScript package manager (npm, pnpm, yarn, bun)
//! applies in a directory by walking a fixed precedence chain of signals,
//! and persists explicit user and project preferences.
//!
//! # Modules
//!
//! - [`catalog`] - Supported package managers and their command templates
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Environment, lockfile, and manifest signals
//! - [`error`] - Error types and result aliases
//! - [`preferences`] - User and project preference documents
//! - [`probe`] - Installed-tool probing
//! - [`resolver`] - The precedence chain and its provenance
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pmpref::catalog::{run_command, PackageManager};
//!
//! let pm: PackageManager = "pnpm".parse().unwrap();
//! assert_eq!(pm.config().lock_file, "pnpm-lock.yaml");
//! assert_eq!(run_command(pm, "lint"), "pnpm lint");
//! ```

pub mod catalog;
pub mod cli;
pub mod detection;
pub mod error;
pub mod preferences;
pub mod probe;
pub mod resolver;
pub mod ui;

pub use catalog::PackageManager;
pub use error::{PmError, Result};
pub use resolver::{Resolution, Resolver, Source};
