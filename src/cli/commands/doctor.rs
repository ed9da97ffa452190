//! Environment setup check.
//!
//! Prints one status line per check. Required checks gate the exit code;
//! recommended checks only warn unless `--strict` is set.

use crate::config::{API_KEY_ENV, ConfigFile, ConfigManager};
use crate::ui::Style;

pub struct DoctorOptions {
    pub strict: bool,
}

/// Runs all setup checks and returns the process exit code.
pub fn run_doctor(options: &DoctorOptions) -> i32 {
    let manager = ConfigManager::new();
    let mut success = true;

    let file_config = check_config_file(&manager, options.strict, &mut success);
    check_credential(file_config.as_ref(), &mut success);

    if success {
        println!("\nSetup looks good.");
        exitcode::OK
    } else {
        println!("\nFix the failed checks above and run 'samvad doctor' again.");
        exitcode::CONFIG
    }
}

/// Recommended: a readable config file. A present-but-broken file is always
/// a failure; a missing one only fails in strict mode.
fn check_config_file(
    manager: &ConfigManager,
    strict: bool,
    success: &mut bool,
) -> Option<ConfigFile> {
    let path = manager.path().display().to_string();

    if !manager.path().exists() {
        if strict {
            println!("{} Config file not found: {path}", Style::error("[FAIL]"));
            *success = false;
        } else {
            println!("{} Config file not found: {path}", Style::warning("[WARN]"));
        }
        return None;
    }

    match manager.load() {
        Ok(config) => {
            println!("{} Config file: {path}", Style::success("[OK]"));
            Some(config)
        }
        Err(_) => {
            println!(
                "{} Config file is present but not parseable: {path}",
                Style::error("[FAIL]")
            );
            *success = false;
            None
        }
    }
}

/// Required: an API credential from the environment or the config file.
fn check_credential(file_config: Option<&ConfigFile>, success: &mut bool) {
    let env_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty());
    let file_key = file_config
        .and_then(|config| config.samvad.api_key.as_deref())
        .filter(|key| !key.is_empty());

    if env_key.is_some() {
        println!("{} {API_KEY_ENV} is set", Style::success("[OK]"));
    } else if file_key.is_some() {
        println!("{} API key found in config file", Style::success("[OK]"));
    } else {
        println!(
            "{} Missing required credential: set {API_KEY_ENV} or add api_key to the config file",
            Style::error("[FAIL]")
        );
        *success = false;
    }
}
