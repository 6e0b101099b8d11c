//! Lockfile detection.

use std::path::Path;

use crate::catalog::PackageManager;

/// Find the first catalog entry whose lockfile exists directly in `cwd`.
///
/// Entries are checked in catalog order, so when several lockfiles coexist
/// the result does not depend on directory listing order.
pub fn detect_from_lockfile(cwd: &Path) -> Option<String> {
    PackageManager::ALL
        .into_iter()
        .find(|pm| cwd.join(pm.config().lock_file).is_file())
        .map(|pm| pm.as_str().to_string())
}
