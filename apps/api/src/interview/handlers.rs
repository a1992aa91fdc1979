use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::session::{AnswerOutcome, InterviewSession, Phase, TOTAL_TURNS};
use crate::models::candidate::ProfileDraft;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionSnapshot {
    pub phase: &'static str,
    /// 1-based turn number for display, present only while in progress.
    pub turn: Option<usize>,
    pub total_turns: usize,
    pub question: Option<String>,
    pub transcript_path: Option<String>,
}

impl SessionSnapshot {
    fn from_session(session: &InterviewSession) -> Self {
        SessionSnapshot {
            phase: session.phase().as_str(),
            turn: (session.phase() == Phase::InProgress).then(|| session.current_turn() + 1),
            total_turns: TOTAL_TURNS,
            question: session.current_question().map(str::to_string),
            transcript_path: session
                .transcript_path()
                .map(|p| p.display().to_string()),
        }
    }
}

/// GET /api/v1/interview
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot::from_session(&session))
}

/// POST /api/v1/interview/profile
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut session = state.session.lock().await;
    session.submit_profile(draft, state.llm.as_ref()).await?;
    Ok(Json(SessionSnapshot::from_session(&session)))
}

#[derive(Serialize)]
pub struct QuestionResponse {
    pub turn: usize,
    pub total_turns: usize,
    pub question: String,
}

/// POST /api/v1/interview/start
pub async fn handle_start(
    State(state): State<AppState>,
) -> Result<Json<QuestionResponse>, AppError> {
    let mut session = state.session.lock().await;
    let question = session.start_interview(state.llm.as_ref()).await?;
    Ok(Json(QuestionResponse {
        turn: session.current_turn() + 1,
        total_turns: TOTAL_TURNS,
        question,
    }))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_path: Option<String>,
}

/// POST /api/v1/interview/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session
        .submit_answer(&req.answer, state.llm.as_ref(), &state.transcripts)
        .await?;

    let response = match outcome {
        AnswerOutcome::NextQuestion(question) => AnswerResponse {
            status: "next_question",
            turn: Some(session.current_turn() + 1),
            question: Some(question),
            transcript_path: None,
        },
        AnswerOutcome::Completed { transcript_path } => AnswerResponse {
            status: "complete",
            turn: None,
            question: None,
            transcript_path: Some(transcript_path.display().to_string()),
        },
    };
    Ok(Json(response))
}

/// POST /api/v1/interview/reset
/// Discards the in-memory session wholesale. `Complete` itself is terminal;
/// this is the "start over" affordance, not a transition out of it.
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    *session = InterviewSession::new();
    Json(SessionSnapshot::from_session(&session))
}
