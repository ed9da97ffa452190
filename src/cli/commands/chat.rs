use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub message: Option<String>,
    pub api_key: Option<String>,
    pub max_history: Option<usize>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(&options)?;
    let mut session = ChatSession::new(config);

    match options.message {
        Some(message) => {
            session.run_once(&message).await;
            Ok(())
        }
        None => session.run().await,
    }
}

fn load_session_config(options: &ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new();
    let file_config = manager.load().unwrap_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            api_key: options.api_key.clone(),
            max_history: options.max_history,
        },
        &file_config,
    )?;

    Ok(SessionConfig {
        api_key: resolved.api_key,
        chat_url: resolved.chat_url,
        max_history: resolved.max_history,
    })
}
