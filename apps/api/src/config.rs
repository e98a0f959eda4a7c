use anyhow::{Context, Result};

use crate::llm_client::LlmConfig;

const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Nothing is required: a missing `API_KEY` becomes an empty key and the
/// completion service rejects the calls, which the assistant absorbs.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: std::env::var("API_KEY").unwrap_or_default(),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_endpoint: env_or("GEMINI_ENDPOINT", DEFAULT_GEMINI_ENDPOINT),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The slice of configuration the completion client is built from.
    pub fn llm(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.api_key.clone(),
            model: self.gemini_model.clone(),
            endpoint: self.gemini_endpoint.clone(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
