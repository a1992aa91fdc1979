use anyhow::{Context, Result};

/// Hugging Face Inference API endpoint used for question generation and
/// relevance judgments.
pub const DEFAULT_COMPLETION_URL: &str =
    "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct";

/// Summarization endpoint. Failures here degrade gracefully (see llm_client).
pub const DEFAULT_SUMMARY_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Application configuration loaded from environment variables.
/// Read once at startup; read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_key: String,
    pub completion_url: String,
    pub summary_url: String,
    pub profiles_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_api_key: require_env("HF_API_KEY")?,
            completion_url: std::env::var("COMPLETION_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string()),
            summary_url: std::env::var("SUMMARY_URL")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_URL.to_string()),
            profiles_dir: std::env::var("PROFILES_DIR").unwrap_or_else(|_| "Profiles".to_string()),
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
