use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "SARVAM_API_KEY";

/// Default number of trailing turns sent with each completion request.
pub const DEFAULT_MAX_HISTORY: usize = 5;

/// Default chat-completions endpoint.
pub const DEFAULT_CHAT_URL: &str = "https://api.sarvam.ai/v1/chat/completions";

/// Default translation endpoint.
pub const DEFAULT_TRANSLATE_URL: &str = "https://api.sarvam.ai/translate";

/// Settings in the `[samvad]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamvadConfig {
    /// API credential stored directly in config (the environment variable is
    /// preferred).
    pub api_key: Option<String>,
    /// Default history window size.
    pub max_history: Option<usize>,
    /// Chat-completions endpoint override.
    pub chat_url: Option<String>,
    /// Translation endpoint override.
    pub translate_url: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/samvad/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub samvad: SamvadConfig,
}

/// Loads the optional configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file, or defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {}", self.config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", self.config_path.display()))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over the environment and the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// API credential override.
    pub api_key: Option<String>,
    /// History window size override.
    pub max_history: Option<usize>,
}

/// Resolved configuration after merging CLI arguments, environment and the
/// config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API credential sent as a bearer token.
    pub api_key: String,
    /// Number of trailing turns sent with each completion request.
    pub max_history: usize,
    /// The chat-completions endpoint URL.
    pub chat_url: String,
    /// The translation endpoint URL.
    pub translate_url: String,
}

/// Resolves configuration by merging CLI options with the environment and
/// config file settings.
///
/// Priority order (highest to lowest): CLI option, `SARVAM_API_KEY`
/// environment variable (credential only), config file, built-in default.
///
/// # Errors
///
/// Returns an error if no API credential is found anywhere.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let api_key = options
        .api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
        .or_else(|| config_file.samvad.api_key.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: API key\n\n\
                 Please provide it via:\n  \
                 - CLI option: samvad --api-key <key>\n  \
                 - Environment: export {API_KEY_ENV}=\"your-api-key\"\n  \
                 - Config file: ~/.config/samvad/config.toml"
            )
        })?;

    let max_history = options
        .max_history
        .or(config_file.samvad.max_history)
        .unwrap_or(DEFAULT_MAX_HISTORY)
        .max(1);

    let chat_url = config_file
        .samvad
        .chat_url
        .clone()
        .unwrap_or_else(|| DEFAULT_CHAT_URL.to_string());

    let translate_url = config_file
        .samvad
        .translate_url
        .clone()
        .unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string());

    Ok(ResolvedConfig {
        api_key,
        max_history,
        chat_url,
        translate_url,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_parses_empty_document() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.samvad.api_key.is_none());
        assert!(config.samvad.max_history.is_none());
    }

    #[test]
    fn test_config_file_parses_full_document() {
        let config: ConfigFile = toml::from_str(
            r#"
            [samvad]
            api_key = "file-key"
            max_history = 7
            chat_url = "http://localhost:8000/v1/chat/completions"
            translate_url = "http://localhost:8000/translate"
            "#,
        )
        .unwrap();

        assert_eq!(config.samvad.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.samvad.max_history, Some(7));
    }

    #[test]
    fn test_config_file_rejects_malformed_toml() {
        let result: Result<ConfigFile, _> = toml::from_str("[samvad\napi_key = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_max_history_resolves_to_at_least_one() {
        let mut file = ConfigFile::default();
        file.samvad.max_history = Some(0);

        let options = ResolveOptions {
            api_key: Some("key".to_string()),
            max_history: None,
        };

        let resolved = resolve_config(&options, &file).unwrap();
        assert_eq!(resolved.max_history, 1);
    }

    #[test]
    fn test_endpoints_default_when_unset() {
        let options = ResolveOptions {
            api_key: Some("key".to_string()),
            max_history: None,
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.chat_url, DEFAULT_CHAT_URL);
        assert_eq!(resolved.translate_url, DEFAULT_TRANSLATE_URL);
        assert_eq!(resolved.max_history, DEFAULT_MAX_HISTORY);
    }
}
