//! The interactive roll/reveal session.
//!
//! Mirrors the table flow of the party game: pick a pool, roll the die
//! (the result stays hidden), reveal the drawn prompt, repeat. The
//! pending roll is consumed by the reveal; rolling again before
//! revealing simply replaces it.

use chrono::Utc;
use rand::rngs::StdRng;

use wop_core::{Category, PromptStore};

use crate::config::GameConfig;
use crate::dice::{pick_prompt, roll_difficulty};
use crate::error::{GameError, GameResult};
use crate::history::{RollHistory, RollRecord};

/// An interactive Truth-or-Dare session over a prompt store.
pub struct GameSession {
    store: PromptStore,
    category: Category,
    pending: Option<u8>,
    history: RollHistory,
    rng: StdRng,
}

impl GameSession {
    /// Start a session over a store, beginning in the given category.
    pub fn new(store: PromptStore, category: Category, config: GameConfig) -> Self {
        Self {
            store,
            category,
            pending: None,
            history: RollHistory::new(),
            rng: config.build_rng(),
        }
    }

    /// The active category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The rolled-but-unrevealed difficulty, if any.
    pub fn pending(&self) -> Option<u8> {
        self.pending
    }

    /// The session's reveal history.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    /// Roll the weighted die. The result is held until revealed.
    pub fn roll(&mut self) -> u8 {
        let difficulty = roll_difficulty(&mut self.rng);
        self.pending = Some(difficulty);
        difficulty
    }

    /// Reveal the prompt for the pending roll, consuming it.
    ///
    /// Returns the rolled difficulty and the drawn prompt text, `None`
    /// when the pool has nothing at that difficulty. Every reveal is
    /// recorded in the history.
    pub fn reveal(&mut self) -> GameResult<(u8, Option<String>)> {
        let difficulty = self.pending.take().ok_or(GameError::NoPendingRoll)?;
        let prompt = pick_prompt(&self.store, self.category, difficulty, &mut self.rng)
            .map(|p| p.text.clone());
        self.history.append(RollRecord {
            category: self.category,
            difficulty,
            prompt: prompt.clone(),
            timestamp: Utc::now(),
        });
        Ok((difficulty, prompt))
    }

    /// Switch pools. Clears any pending roll.
    pub fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.pending = None;
    }

    /// Process one line of player input and return a response.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        match trimmed.to_lowercase().as_str() {
            "roll" | "r" => {
                self.roll();
                Ok("The die is cast. Type 'show' to reveal your fate.".to_string())
            }
            "show" | "s" => {
                let (difficulty, prompt) = self.reveal()?;
                Ok(match prompt {
                    Some(text) => format!("{}: {text}", self.category.label()),
                    None => format!(
                        "No {} at difficulty {difficulty}. Roll again or add some prompts.",
                        self.category,
                    ),
                })
            }
            "truth" | "truths" => {
                self.switch_category(Category::Truths);
                Ok("Switched to truths.".to_string())
            }
            "dare" | "dares" => {
                self.switch_category(Category::Dares);
                Ok("Switched to dares.".to_string())
            }
            "history" | "log" => Ok(self.history.export_text()),
            "status" => Ok(self.status_line()),
            "help" | "h" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(GameError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn status_line(&self) -> String {
        let truths = self.store.pools().truths.len();
        let dares = self.store.pools().dares.len();
        let pending = if self.pending.is_some() {
            "a roll is waiting to be revealed"
        } else {
            "no roll pending"
        };
        format!(
            "Playing {} | {truths} truths, {dares} dares | {} reveal{} so far | {pending}",
            self.category,
            self.history.len(),
            if self.history.len() == 1 { "" } else { "s" },
        )
    }
}

fn help_text() -> String {
    [
        "Commands:",
        "  roll       roll the weighted die (result stays hidden)",
        "  show       reveal the prompt for the pending roll",
        "  truth      switch to the truth pool",
        "  dare       switch to the dare pool",
        "  history    print every reveal this session",
        "  status     pool sizes and session state",
        "  quit       leave the session",
    ]
    .join("\n")
}
