//! Verdict extraction — turns the model's free-text relevance judgment into
//! a typed classification.
//!
//! The prompt asks for a fixed binary phrasing, but instruct models pad their
//! output, so the scan walks lines from the last to the first and the first
//! line that classifies wins. Within a line, the explicit phrases are tested
//! before the bare `yes`/`no` tokens.

/// Relevance classification of one model response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
    Invalid,
}

impl Verdict {
    /// Both gating call sites reduce the verdict to a boolean; `Invalid`
    /// blocks progression.
    pub fn is_yes(self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

/// Scans `response_text` bottom-up and classifies the first line that
/// matches. Pure function: same input, same classification.
pub fn extract_verdict(response_text: &str) -> Verdict {
    for line in response_text.lines().rev() {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }
        if line.contains("is not relevant") {
            return Verdict::No;
        }
        if line.contains("is relevant") {
            return Verdict::Yes;
        }
        if line.contains("yes") {
            return Verdict::Yes;
        }
        if line.contains("no") {
            return Verdict::No;
        }
    }
    Verdict::Invalid
}
