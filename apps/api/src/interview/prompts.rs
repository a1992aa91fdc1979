// Interview LLM prompt templates.
// All prompts for the interview module are defined here. Each builder is a
// total function: empty inputs just produce a weaker prompt, never an error.

use crate::models::candidate::{CandidateProfile, TurnHistoryEntry};

/// Asks the model to judge topical relevance of an answer with a binary
/// phrasing it can only complete one of two ways.
pub fn answer_relevance_prompt(question: &str, answer: &str) -> String {
    format!(
        "For the given question: {question}, determine if the answer : {answer} is relevant to the question.\n\
         Only respond with 'Yes the answer is relevant to the question' or 'No the answer is not relevant to the question'.\n\n"
    )
}

/// Asks whether a field's value is a plausible job-application value for
/// that field name; same binary phrasing convention.
pub fn field_relevance_prompt(field_name: &str, value: &str) -> String {
    format!(
        "For the given Field name : {field_name}, determine if the value : {value} is relevant in the context of a job application.\n\
         Respond only with 'Yes value is relevant to the field name' or 'No value is not relevant to the field name'."
    )
}

/// Prompt for the first interview question, conditioned on the profile only.
pub fn initial_question_prompt(position: &str, tech_stack: &str, experience_years: u32) -> String {
    format!(
        "As a technical interviewer, generate a single, unique technical question \
         for a candidate applying for {position}. The candidate is skilled in {tech_stack} \
         with {experience_years} years of experience. \
         Do not include any introductions, explanations, or answers only return the question."
    )
}

/// Prompt for a follow-up question, conditioned on the profile and the full
/// accumulated question/answer history as a transcript block. The last pair
/// is called out explicitly so the model anchors on the most recent turn.
pub fn followup_question_prompt(profile: &CandidateProfile, history: &[TurnHistoryEntry]) -> String {
    let mut prompt = format!(
        "You are a technical interviewer.\n\
         Candidate Profile:\n\
         Name: {}\n\
         Experience: {} years\n\
         Position: {}\n\
         Tech Stack: {}\n\n\
         Previous Questions & Responses:\n",
        profile.name, profile.experience_years, profile.desired_position, profile.tech_stack
    );

    for (idx, qa) in history.iter().enumerate() {
        prompt.push_str(&format!(
            "Q{n}: {q}\nA{n}: {a}\n\n",
            n = idx + 1,
            q = qa.question,
            a = qa.answer
        ));
    }

    if let Some(last) = history.last() {
        prompt.push_str(&format!(
            "The candidate answered question :'{}' with this answer:'{}'. ",
            last.question, last.answer
        ));
    }

    prompt.push_str("Based on everything, generate only one new relevant technical question, nothing else.");
    prompt
}
