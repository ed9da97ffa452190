use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::completion::REQUEST_TIMEOUT;
use crate::language::{Language, fallback_message, is_fallback_message};

/// Source locale for every translation request. Input text is English.
const SOURCE_LANGUAGE: &str = "en-IN";

/// Formality mode sent with every request.
const MODE: &str = "formal";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    input: &'a str,
    source_language_code: &'static str,
    target_language_code: &'static str,
    mode: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: String,
}

/// Client for the remote translation endpoint.
///
/// `translate` is infallible: any remote failure degrades to the canned
/// fallback message for the target language instead of surfacing an error.
pub struct TranslationGateway {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl TranslationGateway {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Translates `text` into `target`.
    ///
    /// Canned fallback messages are already stored in every supported
    /// language, so they are swapped from the table without a remote call.
    pub async fn translate(&self, text: &str, target: Language) -> String {
        if is_fallback_message(text) {
            return fallback_message(target).to_string();
        }

        match self.request_translation(text, target).await {
            Ok(translated) => translated,
            Err(_) => fallback_message(target).to_string(),
        }
    }

    async fn request_translation(&self, text: &str, target: Language) -> Result<String> {
        let request = TranslateRequest {
            input: text,
            source_language_code: SOURCE_LANGUAGE,
            target_language_code: target.translation_target(),
            mode: MODE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach translation endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Translation request failed with status {status}");
        }

        let body: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        Ok(body.translated_text)
    }
}
