use serde::{Deserialize, Serialize};

/// Raw profile form submission, exactly as the client sent it.
/// Normalization and validation happen in the intake transition.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub location: String,
    pub experience_years: u32,
    pub desired_position: String,
    pub tech_stack: String,
    pub consent: bool,
}

/// Validated candidate profile. Immutable once the interview starts;
/// `desired_position` and `tech_stack` are stored comma-list normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub location: String,
    pub experience_years: u32,
    pub desired_position: String,
    pub tech_stack: String,
}

/// One generated interview question. Append-only; index = turn number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
}

/// One accepted question/answer turn. `answer` holds the summarized text,
/// not the raw response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnHistoryEntry {
    pub question: String,
    pub answer: String,
}
