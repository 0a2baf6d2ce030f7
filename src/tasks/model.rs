// SPDX-License-Identifier: MIT
// Task data model and description validation.

use serde::{Deserialize, Serialize};

/// Upper bound on a task description, counted in characters (not bytes).
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// A single to-do record as persisted in the `tasks` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskRow {
    /// Store-assigned identifier. Monotonically increasing, never reused.
    pub id: i64,
    /// User-supplied text; non-empty, at most [`MAX_DESCRIPTION_CHARS`].
    pub description: String,
    /// Completion flag. False at creation, flipped by the toggle action.
    pub completed: bool,
}

/// Why a submitted description was rejected.
///
/// The `Display` text is shown to the user verbatim, so it is written as a
/// complete sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The task description cannot be empty.")]
    Empty,
    #[error("The task description is too long ({len} characters; the maximum is {MAX_DESCRIPTION_CHARS}).")]
    TooLong { len: usize },
}

/// Check a raw form value against the description rules, in order:
/// empty first, then length. Whitespace is not trimmed — a description of
/// blanks is non-empty and passes.
pub fn validate_description(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = raw.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::TooLong { len });
    }
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_rejected() {
        assert_eq!(validate_description(""), Err(ValidationError::Empty));
    }

    #[test]
    fn single_char_description_accepted() {
        assert_eq!(validate_description("x"), Ok(()));
    }

    #[test]
    fn exactly_200_chars_accepted() {
        let desc = "a".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(validate_description(&desc), Ok(()));
    }

    #[test]
    fn over_200_chars_rejected_with_length() {
        let desc = "a".repeat(MAX_DESCRIPTION_CHARS + 1);
        assert_eq!(
            validate_description(&desc),
            Err(ValidationError::TooLong { len: 201 })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 200 two-byte characters: 400 bytes but exactly 200 chars.
        let desc = "ü".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(desc.len(), 400);
        assert_eq!(validate_description(&desc), Ok(()));
    }

    #[test]
    fn whitespace_only_description_accepted() {
        // No trimming: blanks count as content.
        assert_eq!(validate_description("   "), Ok(()));
    }

    #[test]
    fn validation_messages_are_user_facing_sentences() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "The task description cannot be empty."
        );
        let msg = ValidationError::TooLong { len: 250 }.to_string();
        assert!(msg.contains("250"));
        assert!(msg.contains("200"));
    }
}
