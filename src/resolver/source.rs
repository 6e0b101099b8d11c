//! Provenance of a resolution.

use serde::Serialize;
use std::fmt;

/// Which signal produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// `CLAUDE_PACKAGE_MANAGER` override.
    Env,
    /// Project preference document.
    Project,
    /// User preference document.
    Global,
    /// Lockfile present in the working directory.
    Lockfile,
    /// `packageManager` field of the manifest.
    Manifest,
    /// No signal, default manager not confirmed installed.
    Fallback,
    /// No signal, default manager installed.
    Default,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Project => "project",
            Self::Global => "global",
            Self::Lockfile => "lockfile",
            Self::Manifest => "manifest",
            Self::Fallback => "fallback",
            Self::Default => "default",
        }
    }

    /// Whether the user chose this manager explicitly.
    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Env | Self::Project | Self::Global)
    }

    /// Whether the result is a guess the user should be asked to confirm.
    pub fn is_low_confidence(self) -> bool {
        matches!(self, Self::Default | Self::Fallback)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serialized_tag() {
        for source in [
            Source::Env,
            Source::Project,
            Source::Global,
            Source::Lockfile,
            Source::Manifest,
            Source::Fallback,
            Source::Default,
        ] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }

    #[test]
    fn confidence_classes() {
        assert!(Source::Env.is_explicit());
        assert!(Source::Global.is_explicit());
        assert!(!Source::Lockfile.is_explicit());
        assert!(Source::Fallback.is_low_confidence());
        assert!(Source::Default.is_low_confidence());
        assert!(!Source::Manifest.is_low_confidence());
    }
}
