use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::interview::session::InterviewSession;
use crate::interview::transcript::TranscriptWriter;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// One logical session per process (single-candidate deployment); the mutex
/// makes the orchestrator the single writer even if the client double-fires
/// a request.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<InterviewSession>>,
    /// Pluggable completion backend — the HTTP client in production, a
    /// scripted fake in tests.
    pub llm: Arc<dyn CompletionBackend>,
    pub transcripts: TranscriptWriter,
    pub config: Config,
}
