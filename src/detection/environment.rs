//! Environment override detection.

use std::env::VarError;

/// Environment variable holding a per-invocation override.
pub const ENV_VAR: &str = "CLAUDE_PACKAGE_MANAGER";

/// Read the override variable through `env_fn`.
///
/// Returns the value verbatim when set and non-empty. Validation against the
/// catalog is left to the resolver.
pub fn detect_from_environment<F>(env_fn: &F) -> Option<String>
where
    F: Fn(&str) -> Result<String, VarError> + ?Sized,
{
    match env_fn(ENV_VAR) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_verbatim() {
        let env = |key: &str| {
            assert_eq!(key, ENV_VAR);
            Ok("pnpm".to_string())
        };
        assert_eq!(detect_from_environment(&env), Some("pnpm".to_string()));
    }

    #[test]
    fn does_not_validate_or_normalize() {
        let env = |_: &str| Ok("PNPM ".to_string());
        assert_eq!(detect_from_environment(&env), Some("PNPM ".to_string()));
    }

    #[test]
    fn unset_is_none() {
        let env = |_: &str| Err(VarError::NotPresent);
        assert_eq!(detect_from_environment(&env), None);
    }

    #[test]
    fn empty_is_none() {
        let env = |_: &str| Ok(String::new());
        assert_eq!(detect_from_environment(&env), None);
    }

    #[test]
    fn non_unicode_is_none() {
        let env = |_: &str| Err(VarError::NotUnicode("\u{fffd}".into()));
        assert_eq!(detect_from_environment(&env), None);
    }
}
