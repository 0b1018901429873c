use dotenvy::dotenv;
use std::env;

/// Model used when OPENROUTER_MODEL is not configured.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";

const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl Config {
    /// Reads configuration from the environment (and a .env file if one
    /// is present). A missing API key stays empty: the call is still
    /// attempted and the service rejects it.
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            api_key: env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            model: env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            endpoint: env::var("OPENROUTER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        }
    }
}
