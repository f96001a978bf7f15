//! Serializing prompts into the bulk text format.

use wop_core::Prompt;

/// The field delimiter between text and difficulty.
pub const DELIMITER: char = ',';

/// Encode prompts as `text,difficulty` lines joined by newlines.
///
/// Input order is preserved; callers typically pass the sorted output
/// of [`wop_core::PromptStore::list`].
pub fn encode(prompts: &[Prompt]) -> String {
    prompts
        .iter()
        .map(|p| format!("{}{DELIMITER}{}", p.text, p.difficulty))
        .collect::<Vec<_>>()
        .join("\n")
}
