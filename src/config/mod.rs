//! Configuration file management and settings resolution.

mod manager;

pub use manager::{
    API_KEY_ENV, ConfigFile, ConfigManager, DEFAULT_CHAT_URL, DEFAULT_MAX_HISTORY,
    DEFAULT_TRANSLATE_URL, ResolveOptions, ResolvedConfig, SamvadConfig, resolve_config,
};
