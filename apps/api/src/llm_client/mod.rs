/// Completion Client — the single point of entry for all remote
/// text-generation calls in the screener.
///
/// ARCHITECTURAL RULE: no other module may call the inference API directly.
/// The session state machine only ever sees `dyn CompletionBackend`, so tests
/// drive it with a scripted fake instead of the network.
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response format: {0}")]
    Format(String),
}

/// Boundary capability for the two remote text services.
///
/// `complete` drives question generation and relevance judgments; `summarize`
/// condenses accepted answers. Summarization is a convenience, not a
/// correctness-critical step, so it never fails — implementations fall back
/// to returning the input unchanged.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
    async fn summarize(&self, text: &str) -> String;
}

#[derive(Debug, Deserialize)]
struct GeneratedOutput {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

/// Hugging Face Inference API client.
///
/// Both endpoints take `{"inputs": <text>}` and return an array of result
/// objects. No retry, no backoff: a failed call surfaces to the caller and
/// the user decides whether to try again.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    api_key: String,
    completion_url: String,
    summary_url: String,
}

impl HfClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: config.hf_api_key.clone(),
            completion_url: config.completion_url.clone(),
            summary_url: config.summary_url.clone(),
        }
    }

    async fn post_inputs(&self, url: &str, text: &str) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CompletionBackend for HfClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = self.post_inputs(&self.completion_url, prompt).await?;
        let extracted = parse_completion_body(&body)?;
        debug!("Completion extracted: {extracted}");
        Ok(extracted)
    }

    async fn summarize(&self, text: &str) -> String {
        match self.post_inputs(&self.summary_url, text).await {
            Ok(body) => match parse_summary_body(&body) {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("Summarization degraded, keeping raw answer: {e}");
                    text.to_string()
                }
            },
            Err(e) => {
                warn!("Summarization degraded, keeping raw answer: {e}");
                text.to_string()
            }
        }
    }
}

/// Parses a completion response body and extracts the generated question.
///
/// The model echoes the prompt back before its answer, so the usable output
/// is the last line of the first result's `generated_text`.
fn parse_completion_body(body: &str) -> Result<String, CompletionError> {
    let results: Vec<GeneratedOutput> = serde_json::from_str(body)
        .map_err(|e| CompletionError::Format(format!("not a generated_text array: {e}")))?;

    let first = results
        .first()
        .ok_or_else(|| CompletionError::Format("empty result array".to_string()))?;

    let extracted = first
        .generated_text
        .trim()
        .rsplit('\n')
        .next()
        .unwrap_or("")
        .trim();

    if extracted.is_empty() {
        return Err(CompletionError::Format(
            "no text generated".to_string(),
        ));
    }

    Ok(extracted.to_string())
}

/// Parses a summarization response body.
fn parse_summary_body(body: &str) -> Result<String, CompletionError> {
    let results: Vec<SummaryOutput> = serde_json::from_str(body)
        .map_err(|e| CompletionError::Format(format!("not a summary_text array: {e}")))?;

    let first = results
        .first()
        .ok_or_else(|| CompletionError::Format("empty result array".to_string()))?;

    Ok(first.summary_text.trim().to_string())
}
