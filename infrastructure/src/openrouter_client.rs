use std::sync::Arc;

use anyhow::{anyhow, Context};
use domain::message::ChatTurn;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::types::Result;

use crate::config::Config;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Client for the OpenRouter chat-completions endpoint.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Arc<Client>,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Arc::new(Client::new()),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// POSTs the conversation and returns the first completion's text.
    /// `Ok(None)` means the service answered 2xx without the expected
    /// completion field; transport failures and non-success statuses
    /// are errors.
    pub async fn request_reply(&self, turns: &[ChatTurn]) -> Result<Option<String>> {
        let request = ChatRequest {
            model: &self.model,
            messages: turns,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed contacting OpenRouter")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed reading OpenRouter response")?;
        if !status.is_success() {
            return Err(anyhow!("OpenRouter API error ({}): {}", status, body.trim()));
        }

        Ok(extract_reply(&body))
    }
}

/// Pulls `choices[0].message.content` out of a response body. Any
/// malformed shape (non-JSON, missing or empty `choices`) is `None`.
pub fn extract_reply(body: &str) -> Option<String> {
    let parsed: ChatResponse = serde_json::from_str(body).ok()?;
    parsed.choices.into_iter().next().map(|c| c.message.content)
}
