//! Package manager signal detection.
//!
//! Each detector is a read-only function returning the identifier it found,
//! or `None`. Detectors do not validate against the catalog; a missing,
//! unreadable, or malformed source is simply no signal.

pub mod environment;
pub mod lockfile;
pub mod manifest;

pub use environment::{detect_from_environment, ENV_VAR};
pub use lockfile::detect_from_lockfile;
pub use manifest::{detect_from_manifest, MANIFEST_FILE};
