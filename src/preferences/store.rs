//! Preference document storage.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::PackageManager;
use crate::error::{PmError, Result};

/// Directory holding assistant configuration, both under home and project.
pub const CONFIG_DIR: &str = ".claude";

/// File name of a preference document.
pub const PREFERENCE_FILE: &str = "package-manager.json";

/// On-disk preference record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceDocument {
    /// Preferred package manager identifier.
    #[serde(default)]
    pub package_manager: Option<String>,
}

/// Reads and writes the user and project preference documents.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    global_path: PathBuf,
}

impl PreferenceStore {
    /// Create a store whose user-scope document lives at `global_path`.
    pub fn new(global_path: impl Into<PathBuf>) -> Self {
        Self {
            global_path: global_path.into(),
        }
    }

    /// Store rooted at the current user's home directory.
    pub fn user_default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| {
            tracing::debug!("home directory unknown, using working directory");
            PathBuf::new()
        });
        Self::new(home.join(CONFIG_DIR).join(PREFERENCE_FILE))
    }

    /// Path of the user-scope document.
    pub fn global_path(&self) -> &Path {
        &self.global_path
    }

    /// Path of the project-scope document for `cwd`.
    pub fn project_path(cwd: &Path) -> PathBuf {
        cwd.join(CONFIG_DIR).join(PREFERENCE_FILE)
    }

    /// Read the user-scope preference.
    pub fn read_global(&self) -> Option<String> {
        read_document(&self.global_path)
    }

    /// Read the project-scope preference for `cwd`.
    pub fn read_project(&self, cwd: &Path) -> Option<String> {
        read_document(&Self::project_path(cwd))
    }

    /// Persist the user-scope preference, returning the written path.
    pub fn write_global(&self, id: &str) -> Result<PathBuf> {
        let pm: PackageManager = id.parse()?;
        write_document(&self.global_path, pm)?;
        Ok(self.global_path.clone())
    }

    /// Persist the project-scope preference for `cwd`, returning the written path.
    pub fn write_project(&self, cwd: &Path, id: &str) -> Result<PathBuf> {
        let pm: PackageManager = id.parse()?;
        let path = Self::project_path(cwd);
        write_document(&path, pm)?;
        Ok(path)
    }
}

fn read_document(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("no preference at {}: {}", path.display(), e);
            return None;
        }
    };

    let doc: PreferenceDocument = match serde_json::from_str(&content) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!("ignoring malformed preference {}: {}", path.display(), e);
            return None;
        }
    };

    doc.package_manager.filter(|id| !id.is_empty())
}

/// Write a document using the write-to-temp-then-rename pattern.
fn write_document(path: &Path, pm: PackageManager) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let doc = PreferenceDocument {
        package_manager: Some(pm.as_str().to_string()),
    };
    let mut content = serde_json::to_string_pretty(&doc).map_err(|e| PmError::Serialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    content.push('\n');

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content)?;
    fs::rename(&temp_path, path)?;

    tracing::info!("saved package manager preference {} to {}", pm, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> PreferenceStore {
        PreferenceStore::new(temp.path().join("home").join(CONFIG_DIR).join(PREFERENCE_FILE))
    }

    #[test]
    fn read_global_absent_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(store_in(&temp).read_global(), None);
    }

    #[test]
    fn write_then_read_global_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        for pm in PackageManager::ALL {
            store.write_global(pm.as_str()).unwrap();
            assert_eq!(store.read_global(), Some(pm.as_str().to_string()));
        }
    }

    #[test]
    fn write_project_creates_config_dir() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let project = temp.path().join("project");
        fs::create_dir(&project).unwrap();

        let path = store.write_project(&project, "bun").unwrap();

        assert_eq!(path, project.join(".claude").join("package-manager.json"));
        assert_eq!(store.read_project(&project), Some("bun".to_string()));
    }

    #[test]
    fn written_document_has_expected_shape() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write_global("pnpm").unwrap();

        let content = fs::read_to_string(store.global_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "packageManager": "pnpm" }));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn write_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write_global("yarn").unwrap();
        store.write_global("npm").unwrap();

        assert_eq!(store.read_global(), Some("npm".to_string()));
    }

    #[test]
    fn write_unknown_fails_and_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let err = store.write_global("pip").unwrap_err();
        assert!(matches!(err, PmError::UnknownPackageManager { ref name, .. } if name == "pip"));
        assert!(!store.global_path().exists());
        assert!(!store.global_path().parent().unwrap().exists());

        let err = store.write_project(temp.path(), "Yarn").unwrap_err();
        assert!(matches!(err, PmError::UnknownPackageManager { .. }));
        assert!(!temp.path().join(CONFIG_DIR).exists());
    }

    #[test]
    fn write_unknown_leaves_existing_document_intact() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write_global("yarn").unwrap();
        let before = fs::read_to_string(store.global_path()).unwrap();

        assert!(store.write_global("cargo").is_err());

        assert_eq!(fs::read_to_string(store.global_path()).unwrap(), before);
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write_global("npm").unwrap();

        let temp_path = store.global_path().with_extension("json.tmp");
        assert!(!temp_path.exists(), "Temp file should not exist after save");
    }

    #[test]
    fn malformed_document_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.global_path().parent().unwrap()).unwrap();
        fs::write(store.global_path(), "packageManager: pnpm").unwrap();

        assert_eq!(store.read_global(), None);
    }

    #[test]
    fn wrong_type_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(store.global_path().parent().unwrap()).unwrap();
        fs::write(store.global_path(), r#"{"packageManager": 3}"#).unwrap();

        assert_eq!(store.read_global(), None);
    }

    #[test]
    fn empty_or_missing_field_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let project = temp.path();
        fs::create_dir_all(project.join(CONFIG_DIR)).unwrap();
        let store = store_in(&temp);

        fs::write(PreferenceStore::project_path(project), r#"{"packageManager": ""}"#).unwrap();
        assert_eq!(store.read_project(project), None);

        fs::write(PreferenceStore::project_path(project), r#"{"other": true}"#).unwrap();
        assert_eq!(store.read_project(project), None);
    }

    #[test]
    fn invalid_identifier_is_returned_unvalidated() {
        let temp = TempDir::new().unwrap();
        let project = temp.path();
        fs::create_dir_all(project.join(CONFIG_DIR)).unwrap();
        fs::write(
            PreferenceStore::project_path(project),
            r#"{"packageManager": "deno", "extra": 1}"#,
        )
        .unwrap();

        assert_eq!(store_in(&temp).read_project(project), Some("deno".to_string()));
    }
}
