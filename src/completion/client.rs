use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::prompt::SYSTEM_PROMPT;
use super::{Role, Turn};

/// Fixed model identifier for the completion endpoint.
const MODEL: &str = "sarvam-m";

/// Fixed sampling temperature.
const TEMPERATURE: f32 = 0.7;

/// Cap on generated tokens per reply.
const MAX_TOKENS: u32 = 500;

/// Client-side timeout for one remote round trip.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the chat-completions endpoint.
///
/// One request per call, no retries. Callers decide what a failure means;
/// the conversation session maps every `Err` to localized fallback text.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Requests one assistant reply for the given window of turns.
    ///
    /// The fixed system instruction is prepended here; `turns` is expected to
    /// be the already-windowed tail of the conversation history.
    pub async fn complete(&self, turns: &[Turn]) -> Result<String> {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(Message {
            role: Role::System.as_str(),
            content: SYSTEM_PROMPT,
        });
        for turn in turns {
            messages.push(Message {
                role: turn.role.as_str(),
                content: &turn.content,
            });
        }

        let request = ChatCompletionRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach completion endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Completion request failed with status {status}");
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Completion response contained no choices")
    }
}
