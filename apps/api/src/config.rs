use anyhow::{Context, Result};

use crate::generation::prompts::DEFAULT_SYSTEM_PROMPT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_temperature: f32,
    /// Generation system prompt. An external, evolving text template: a
    /// deployment overrides it via SYSTEM_PROMPT_PATH; the built-in default
    /// matches the decoder's marker contract.
    pub system_prompt: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let system_prompt = match std::env::var("SYSTEM_PROMPT_PATH") {
            Ok(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read system prompt from '{path}'"))?,
            Err(_) => DEFAULT_SYSTEM_PROMPT.to_string(),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            gemini_temperature: std::env::var("GEMINI_TEMPERATURE")
                .unwrap_or_else(|_| "0.4".to_string())
                .parse::<f32>()
                .context("GEMINI_TEMPERATURE must be a number")?,
            system_prompt,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
