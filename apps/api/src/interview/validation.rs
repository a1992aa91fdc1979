//! Input validation and text normalization for the intake form and answers.
//!
//! Pure functions only — the orchestrator calls these before any state
//! transition, so every rule here is unit-testable without a session.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").expect("valid contact regex"));

/// Validates an email address: one-or-more of letters/digits/`_.+-` in the
/// local part, letters/digits/hyphen domain label, TLD of at least two
/// letters. Consecutive dots are rejected anywhere (the regex crate has no
/// lookahead, so this is a separate check).
pub fn is_valid_email(email: &str) -> bool {
    !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Validates a contact number: optional leading `+`, then 10-15 digits,
/// no separators.
pub fn is_valid_contact_number(number: &str) -> bool {
    CONTACT_RE.is_match(number)
}

/// Splits multi-line free text into non-empty trimmed lines and rejoins them
/// with `", "`. Used for fields intended as comma lists (tech stack,
/// desired position).
pub fn normalize_list_input(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapses all whitespace runs (including newlines) to single spaces and
/// trims the ends. Used for interview answers.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first `n` lines of the trimmed text joined by newline.
/// A text with no line breaks comes back trimmed whole. Used to cheaply
/// pre-screen long answers for relevance without sending the whole text.
pub fn first_n_lines(text: &str, n: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.lines().take(n).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.io"));
    }

    #[test]
    fn test_email_rejects_consecutive_dots() {
        assert!(!is_valid_email("a..b@example.com"));
    }

    #[test]
    fn test_email_rejects_short_tld() {
        assert!(!is_valid_email("ada@example.c"));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_rejects_bad_domain_chars() {
        assert!(!is_valid_email("ada@ex ample.com"));
        assert!(!is_valid_email("ada@exa_mple.com"));
    }

    #[test]
    fn test_valid_contact_number() {
        assert!(is_valid_contact_number("+12345678901"));
        assert!(is_valid_contact_number("1234567890"));
        assert!(is_valid_contact_number("123456789012345"));
    }

    #[test]
    fn test_contact_number_rejects_bad_lengths() {
        assert!(!is_valid_contact_number("123456789")); // 9 digits
        assert!(!is_valid_contact_number("1234567890123456")); // 16 digits
    }

    #[test]
    fn test_contact_number_rejects_separators() {
        assert!(!is_valid_contact_number("+1 234 567 8901"));
        assert!(!is_valid_contact_number("123-456-7890"));
    }

    #[test]
    fn test_normalize_list_input() {
        assert_eq!(normalize_list_input("  Python\n\nSQL \n"), "Python, SQL");
    }

    #[test]
    fn test_normalize_list_input_empty() {
        assert_eq!(normalize_list_input("\n  \n"), "");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace(" a\n\n b  c "), "a b c");
    }

    #[test]
    fn test_normalize_whitespace_blank() {
        assert_eq!(normalize_whitespace("   \n\t "), "");
    }

    #[test]
    fn test_first_n_lines() {
        assert_eq!(first_n_lines("L1\nL2\nL3\nL4", 3), "L1\nL2\nL3");
    }

    #[test]
    fn test_first_n_lines_short_text() {
        assert_eq!(first_n_lines("only line", 3), "only line");
        assert_eq!(first_n_lines("  padded  ", 3), "padded");
    }

    #[test]
    fn test_first_n_lines_empty() {
        assert_eq!(first_n_lines("   ", 3), "");
    }
}
