use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid difficulty ratings, easiest (1) to hardest (6).
pub const DIFFICULTY_RANGE: RangeInclusive<u8> = 1..=6;

/// Unique identifier for a prompt within its category.
///
/// Serializes as a bare integer, matching the store file format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PromptId(pub i64);

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single game item: text plus a difficulty rating.
///
/// `difficulty` is stored unvalidated so hand-edited store files load
/// as-is; the store enforces the 1-6 range on every mutation instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique id within the owning category.
    pub id: PromptId,
    /// The prompt text shown to the player.
    pub text: String,
    /// Difficulty rating from 1 (easy) to 6 (hard).
    pub difficulty: u8,
}

/// A prompt without an id: codec output and bulk-replace input.
///
/// Ids are never preserved through bulk paths; the store assigns fresh
/// ones when drafts are committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    /// The prompt text.
    pub text: String,
    /// Difficulty rating from 1 to 6.
    pub difficulty: u8,
}

impl PromptDraft {
    /// Create a draft from text and difficulty.
    pub fn new(text: impl Into<String>, difficulty: u8) -> Self {
        Self {
            text: text.into(),
            difficulty,
        }
    }
}
