//! Project manifest (`package.json`) detection.

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Manifest file read from the working directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Field declaring the intended package manager.
const PACKAGE_MANAGER_FIELD: &str = "packageManager";

/// Read the declared package manager from `cwd/package.json`.
///
/// The field usually takes the `name@version` form, in which case only the
/// name is returned. Any problem reading or parsing the manifest yields `None`.
pub fn detect_from_manifest(cwd: &Path) -> Option<String> {
    let path = cwd.join(MANIFEST_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("no manifest at {}: {}", path.display(), e);
            return None;
        }
    };

    let manifest: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("ignoring malformed manifest {}: {}", path.display(), e);
            return None;
        }
    };

    let declared = manifest.get(PACKAGE_MANAGER_FIELD)?.as_str()?;
    let name = declared.split('@').next().unwrap_or_default().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
