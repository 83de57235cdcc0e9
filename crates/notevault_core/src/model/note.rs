//! Saved-note record and note text helpers.
//!
//! # Responsibility
//! - Pair secured note text with its save timestamp.
//! - Keep text measurement rules (length bound, word tokenization) in one
//!   place for service and store layers.
//!
//! # Invariants
//! - `saved_at` always reflects the moment the text was secured, in UTC.
//! - Length is counted in Unicode scalar values, not bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound for note text, counted in Unicode scalar values.
pub const NOTE_MAX_CHARS: usize = 1000;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Secured note text paired with the UTC timestamp of its save.
///
/// Created on save, replaced by the next save, removed on clear. The
/// timestamp round-trips through the session store as an RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Note text as secured, at most [`NOTE_MAX_CHARS`] scalars.
    pub text: String,
    /// Moment the text was secured.
    pub saved_at: DateTime<Utc>,
}

impl SaveRecord {
    /// Creates a record for text secured at `saved_at`.
    pub fn new(text: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            saved_at,
        }
    }

    /// Renders `saved_at` in the persisted wire format: RFC 3339 with
    /// millisecond precision and a `Z` suffix.
    pub fn saved_at_rfc3339(&self) -> String {
        self.saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Counts Unicode scalar values in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Counts whitespace-delimited non-empty tokens in `text`.
pub fn word_count(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    WHITESPACE_RE
        .split(trimmed)
        .filter(|token| !token.is_empty())
        .count()
}

/// Returns whether `text` exceeds the note length bound.
pub fn exceeds_note_limit(text: &str) -> bool {
    char_count(text) > NOTE_MAX_CHARS
}
