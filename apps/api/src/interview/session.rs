//! Interview Session State Machine — orchestrates intake, the fixed-length
//! question loop, and transcript persistence.
//!
//! Flow: submit_profile → start_interview → submit_answer × TOTAL_TURNS.
//! Every external call (relevance judgment, question generation,
//! summarization) goes through the injected `CompletionBackend`, so the whole
//! machine runs against a scripted fake in tests.
//!
//! Invariant: failed transitions never partially apply — either a turn fully
//! advances or the session does not move at all.

use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{
    answer_relevance_prompt, field_relevance_prompt, followup_question_prompt,
    initial_question_prompt,
};
use crate::interview::transcript::{Transcript, TranscriptWriter};
use crate::interview::validation::{
    first_n_lines, is_valid_contact_number, is_valid_email, normalize_list_input,
    normalize_whitespace,
};
use crate::interview::verdict::extract_verdict;
use crate::llm_client::CompletionBackend;
use crate::models::candidate::{CandidateProfile, ProfileDraft, QuestionRecord, TurnHistoryEntry};

/// Fixed interview length: one question/answer cycle per turn.
pub const TOTAL_TURNS: usize = 4;

/// Number of raw answer lines sent to the relevance check on non-final
/// turns. The final turn checks the entire normalized answer instead.
const RELEVANCE_EXCERPT_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intake,
    AwaitingConsent,
    FormValidated,
    InProgress,
    Complete,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Intake => "intake",
            Phase::AwaitingConsent => "awaiting_consent",
            Phase::FormValidated => "form_validated",
            Phase::InProgress => "in_progress",
            Phase::Complete => "complete",
        }
    }
}

/// Result of an accepted answer: either the next question or completion.
#[derive(Debug)]
pub enum AnswerOutcome {
    NextQuestion(String),
    Completed { transcript_path: PathBuf },
}

/// One candidate's interview session. Single-writer: only the orchestrator
/// methods below mutate it, and only in response to a generated question or
/// an accepted answer.
#[derive(Debug)]
pub struct InterviewSession {
    phase: Phase,
    profile: Option<CandidateProfile>,
    questions: Vec<QuestionRecord>,
    history: Vec<TurnHistoryEntry>,
    current_turn: usize,
    transcript_path: Option<PathBuf>,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Intake,
            profile: None,
            questions: Vec::new(),
            history: Vec::new(),
            current_turn: 0,
            transcript_path: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    /// 0-based index of the in-progress turn.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn current_question(&self) -> Option<&str> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.questions.get(self.current_turn).map(|q| q.text.as_str())
    }

    pub fn history(&self) -> &[TurnHistoryEntry] {
        &self.history
    }

    pub fn transcript_path(&self) -> Option<&PathBuf> {
        self.transcript_path.as_ref()
    }

    /// Intake/AwaitingConsent → FormValidated.
    ///
    /// Checks run in a fixed short-circuit order: consent, email, contact
    /// number, blank tech stack / desired position, tech-stack field
    /// relevance, desired-position field relevance. The first failure wins
    /// and nothing past it is checked.
    pub async fn submit_profile(
        &mut self,
        draft: ProfileDraft,
        client: &dyn CompletionBackend,
    ) -> Result<(), AppError> {
        if !matches!(self.phase, Phase::Intake | Phase::AwaitingConsent) {
            return Err(AppError::InvalidTransition(format!(
                "Profile can only be submitted before the interview starts (phase: {})",
                self.phase.as_str()
            )));
        }

        if !draft.consent {
            self.phase = Phase::AwaitingConsent;
            return Err(AppError::Validation(
                "Please accept the privacy notice to continue.".to_string(),
            ));
        }

        if !is_valid_email(&draft.email) {
            return Err(AppError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }

        if !is_valid_contact_number(&draft.contact_number) {
            return Err(AppError::Validation(
                "Please enter a valid contact number (with or without country code)."
                    .to_string(),
            ));
        }

        let tech_stack = normalize_list_input(&draft.tech_stack);
        let desired_position = normalize_list_input(&draft.desired_position);
        if tech_stack.is_empty() || desired_position.is_empty() {
            return Err(AppError::Validation(
                "Please fill in both tech stack and desired position fields.".to_string(),
            ));
        }

        if !field_is_relevant(client, "Tech Stack", &tech_stack).await? {
            return Err(AppError::Relevance(
                "Please enter a relevant tech stack. Example: Python, SQL, React".to_string(),
            ));
        }

        if !field_is_relevant(client, "Desired Position", &desired_position).await? {
            return Err(AppError::Relevance(
                "Please enter a relevant desired position. Example: Data Analyst, Backend Developer"
                    .to_string(),
            ));
        }

        info!("Profile accepted for candidate '{}'", draft.name);
        self.profile = Some(CandidateProfile {
            name: draft.name,
            email: draft.email,
            contact_number: draft.contact_number,
            location: draft.location,
            experience_years: draft.experience_years,
            desired_position,
            tech_stack,
        });
        self.phase = Phase::FormValidated;
        Ok(())
    }

    /// FormValidated → InProgress(0). Generates the first question.
    /// On a completion failure the phase does not move, so the client may
    /// simply retry.
    pub async fn start_interview(
        &mut self,
        client: &dyn CompletionBackend,
    ) -> Result<String, AppError> {
        if self.phase != Phase::FormValidated {
            return Err(AppError::InvalidTransition(format!(
                "Interview can only start from a validated form (phase: {})",
                self.phase.as_str()
            )));
        }
        let profile = self.profile.as_ref().expect("profile set in FormValidated");

        let prompt = initial_question_prompt(
            &profile.desired_position,
            &profile.tech_stack,
            profile.experience_years,
        );
        let question = client.complete(&prompt).await?;

        info!("Interview started, turn 1 of {TOTAL_TURNS}");
        self.questions.push(QuestionRecord {
            text: question.clone(),
        });
        self.current_turn = 0;
        self.phase = Phase::InProgress;
        Ok(question)
    }

    /// InProgress(k) → InProgress(k+1), or Complete on the last turn.
    ///
    /// Non-final turns gate relevance on a 3-line excerpt of the raw answer;
    /// the final turn checks the entire normalized answer.
    pub async fn submit_answer(
        &mut self,
        raw_answer: &str,
        client: &dyn CompletionBackend,
        transcripts: &TranscriptWriter,
    ) -> Result<AnswerOutcome, AppError> {
        if self.phase != Phase::InProgress {
            return Err(AppError::InvalidTransition(format!(
                "No question is awaiting an answer (phase: {})",
                self.phase.as_str()
            )));
        }

        let cleaned = normalize_whitespace(raw_answer);
        if cleaned.is_empty() {
            return Err(AppError::Validation(
                "Please provide a response before proceeding.".to_string(),
            ));
        }

        let question = self.questions[self.current_turn].text.clone();
        let is_final_turn = self.current_turn == TOTAL_TURNS - 1;
        let relevance_input = if is_final_turn {
            cleaned.clone()
        } else {
            first_n_lines(raw_answer, RELEVANCE_EXCERPT_LINES)
        };

        let judgment = client
            .complete(&answer_relevance_prompt(&question, &relevance_input))
            .await?;
        if !extract_verdict(&judgment).is_yes() {
            return Err(AppError::Relevance(
                "Your response does not seem to be relevant to the question. \
                 Please revise your answer before proceeding."
                    .to_string(),
            ));
        }

        let answer = client.summarize(&cleaned).await;
        self.history.push(TurnHistoryEntry { question, answer });

        if is_final_turn {
            self.complete_interview(transcripts)
        } else {
            self.advance_turn(client).await
        }
    }

    /// Requests the follow-up question and advances the turn. The history
    /// entry appended by the caller is rolled back if generation fails, so a
    /// failed transition leaves the turn exactly where it was.
    async fn advance_turn(
        &mut self,
        client: &dyn CompletionBackend,
    ) -> Result<AnswerOutcome, AppError> {
        let profile = self.profile.as_ref().expect("profile set in InProgress");
        let prompt = followup_question_prompt(profile, &self.history);

        let question = match client.complete(&prompt).await {
            Ok(q) => q,
            Err(e) => {
                self.history.pop();
                return Err(e.into());
            }
        };

        self.questions.push(QuestionRecord {
            text: question.clone(),
        });
        self.current_turn += 1;
        info!("Advanced to turn {} of {TOTAL_TURNS}", self.current_turn + 1);
        Ok(AnswerOutcome::NextQuestion(question))
    }

    /// Writes the transcript and terminates the session. A write failure
    /// rolls back the final history entry and keeps the session on the last
    /// turn.
    fn complete_interview(
        &mut self,
        transcripts: &TranscriptWriter,
    ) -> Result<AnswerOutcome, AppError> {
        let profile = self.profile.as_ref().expect("profile set in InProgress");
        let now = Local::now();
        let transcript = Transcript::new(profile, &self.history, now);

        let path = match transcripts.write(&transcript, now) {
            Ok(p) => p,
            Err(e) => {
                self.history.pop();
                return Err(AppError::Internal(e));
            }
        };

        // Session is terminal: clear question/answer/turn state after the
        // transcript is durable.
        self.questions.clear();
        self.history.clear();
        self.current_turn = 0;
        self.phase = Phase::Complete;
        self.transcript_path = Some(path.clone());
        info!("Interview complete, transcript at {}", path.display());
        Ok(AnswerOutcome::Completed {
            transcript_path: path,
        })
    }
}

/// Asks the model whether a form field's value is plausible for a job
/// application. Completion failures propagate (retryable); a No or Invalid
/// verdict blocks progression.
async fn field_is_relevant(
    client: &dyn CompletionBackend,
    field_name: &str,
    value: &str,
) -> Result<bool, AppError> {
    let judgment = client
        .complete(&field_relevance_prompt(field_name, value))
        .await?;
    Ok(extract_verdict(&judgment).is_yes())
}
