//! Bundled starter prompts.
//!
//! Used to populate a store file on first run and to recover from an
//! unreadable one. The pools are rebuilt from the constant tables on
//! every call, so callers always receive a fresh copy that later
//! mutations cannot reach.

use crate::prompt::{Prompt, PromptId};
use crate::store::PromptPools;

/// Starter truth prompts as (text, difficulty) pairs.
const SEED_TRUTHS: &[(&str, u8)] = &[
    ("What was your first impression of the person to your left?", 1),
    ("What song do you secretly love?", 1),
    ("What is the last lie you told?", 2),
    ("What is your most embarrassing habit?", 2),
    ("What is the most childish thing you still do?", 3),
    ("Who in this room would you trade lives with?", 3),
    ("What is a secret you have never told your best friend?", 4),
    ("What is the most trouble you have ever been in?", 4),
    ("What is your biggest regret?", 5),
    ("What is the most embarrassing thing on your phone right now?", 5),
    ("What is the biggest secret you are keeping from your family?", 6),
    ("What is the one thing you hope nobody here ever finds out?", 6),
];

/// Starter dare prompts as (text, difficulty) pairs.
const SEED_DARES: &[(&str, u8)] = &[
    ("Speak in an accent for the next three rounds.", 1),
    ("Do your best animal impression.", 1),
    ("Do 10 pushups.", 2),
    ("Let the group pose you for a photo.", 2),
    ("Sing the chorus of a song chosen by the group.", 3),
    ("Dance for thirty seconds with no music.", 3),
    ("Let someone else send a text from your phone.", 4),
    ("Eat a spoonful of a condiment chosen by the group.", 4),
    ("Call a friend and sing them happy birthday.", 5),
    ("Post a selfie chosen by the group.", 5),
    ("Let the group scroll your photo gallery for one minute.", 6),
    ("Prank-call a number chosen by the group.", 6),
];

/// Build a fresh copy of the bundled seed pools.
///
/// Ids are assigned sequentially per category starting at 1.
pub fn seed_pools() -> PromptPools {
    PromptPools {
        truths: build(SEED_TRUTHS),
        dares: build(SEED_DARES),
    }
}

fn build(entries: &[(&str, u8)]) -> Vec<Prompt> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (text, difficulty))| Prompt {
            id: PromptId(i as i64 + 1),
            text: (*text).to_string(),
            difficulty: *difficulty,
        })
        .collect()
}
