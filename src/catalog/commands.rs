//! Concrete command rendering from catalog templates.

use super::PackageManager;

/// Command line that runs a package script.
///
/// Scripts with a dedicated shortcut (`install`, `test`, `build`, `dev`) use
/// it; anything else goes through the manager's run prefix.
pub fn run_command(pm: PackageManager, script: &str) -> String {
    let config = pm.config();
    match script {
        "install" => config.install_cmd.to_string(),
        "test" => config.test_cmd.to_string(),
        "build" => config.build_cmd.to_string(),
        "dev" => config.dev_cmd.to_string(),
        _ => format!("{} {}", config.run_cmd, script),
    }
}

/// Command line that executes a package binary.
pub fn exec_command(pm: PackageManager, binary: &str, args: &[&str]) -> String {
    let mut parts = vec![pm.config().exec_cmd, binary];
    parts.extend_from_slice(args);
    parts.join(" ")
}
