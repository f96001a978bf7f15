//! Multi-round roll-and-pick simulation.
//!
//! A QA utility: runs the same weighted roll and uniform pick the game
//! uses — never a separate implementation — for a fixed number of
//! rounds and reports what happened each round.

use rand::rngs::StdRng;

use wop_core::{Category, PromptStore};

use crate::dice::{pick_prompt, roll_difficulty};

/// One round of the simulation trace.
#[derive(Debug, Clone)]
pub struct SimulationRound {
    /// 1-based round number.
    pub round: u32,
    /// The difficulty the weighted die produced.
    pub difficulty: u8,
    /// The text of the drawn prompt, or `None` if the pool had no match.
    pub prompt: Option<String>,
}

/// Run `rounds` rounds of roll-and-pick against one category.
pub fn simulate(
    store: &PromptStore,
    category: Category,
    rounds: u32,
    rng: &mut StdRng,
) -> Vec<SimulationRound> {
    (1..=rounds)
        .map(|round| {
            let difficulty = roll_difficulty(rng);
            let prompt = pick_prompt(store, category, difficulty, rng).map(|p| p.text.clone());
            SimulationRound {
                round,
                difficulty,
                prompt,
            }
        })
        .collect()
}
