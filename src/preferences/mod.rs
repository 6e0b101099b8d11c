//! Persisted package manager preferences.
//!
//! Two documents share the schema `{ "packageManager": "<identifier>" }`:
//!
//! - user scope: `~/.claude/package-manager.json`
//! - project scope: `<project>/.claude/package-manager.json`
//!
//! Reads never fail; writes validate the identifier first.

pub mod store;

pub use store::{PreferenceDocument, PreferenceStore, CONFIG_DIR, PREFERENCE_FILE};
