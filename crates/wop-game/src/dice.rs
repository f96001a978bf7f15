//! The weighted difficulty die and prompt selection.
//!
//! The die is intentionally not uniform: lower difficulties carry more
//! weight (6:5:4:3:2:1 over a total of 21), so easier prompts surface
//! more often. Difficulty 1 lands with probability 6/21, difficulty 6
//! with 1/21.

use rand::Rng;
use rand::rngs::StdRng;

use wop_core::{Category, Prompt, PromptStore};

/// Relative weights for difficulties 1 through 6.
pub const DIFFICULTY_WEIGHTS: [u32; 6] = [6, 5, 4, 3, 2, 1];

/// Roll a difficulty in 1-6 using the weighted distribution.
pub fn roll_difficulty(rng: &mut StdRng) -> u8 {
    let total: u32 = DIFFICULTY_WEIGHTS.iter().sum();
    let mut roll = rng.random_range(0..total);
    for (index, weight) in DIFFICULTY_WEIGHTS.iter().enumerate() {
        if roll < *weight {
            return index as u8 + 1;
        }
        roll -= weight;
    }
    unreachable!()
}

/// Draw one prompt uniformly from the matches at the given difficulty.
///
/// Returns `None` when the category has no prompt at that difficulty;
/// callers render the fallback message.
pub fn pick_prompt<'a>(
    store: &'a PromptStore,
    category: Category,
    difficulty: u8,
    rng: &mut StdRng,
) -> Option<&'a Prompt> {
    let matches = store.at_difficulty(category, difficulty);
    if matches.is_empty() {
        return None;
    }
    Some(matches[rng.random_range(0..matches.len())])
}
