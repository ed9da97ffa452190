use anyhow::{Result, bail};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::language::validate_language;
use crate::translation::TranslationGateway;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub to: String,
    pub file: Option<String>,
    pub api_key: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let target = validate_language(&options.to)?;

    let manager = ConfigManager::new();
    let file_config = manager.load().unwrap_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            api_key: options.api_key.clone(),
            max_history: None,
        },
        &file_config,
    )?;

    let source_text = InputReader::read(options.file.as_deref())?;
    let source_text = source_text.trim();

    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let gateway = TranslationGateway::new(resolved.translate_url, resolved.api_key);

    let spinner = Spinner::new("Translating...");
    let translated = gateway.translate(source_text, target).await;
    spinner.stop();

    println!("{translated}");

    Ok(())
}
