//! Dice, selection, and session logic for Wahrheit oder Pflicht.
//!
//! Provides the weighted difficulty die, uniform prompt selection, a
//! multi-round simulation trace for QA, and the interactive game
//! session with its roll history.

/// Session configuration.
pub mod config;
/// The weighted difficulty die and prompt selection.
pub mod dice;
/// Error types for the game crate.
pub mod error;
/// Timestamped log of reveals within a session.
pub mod history;
/// The interactive roll/reveal session state machine.
pub mod session;
/// Multi-round roll-and-pick simulation for QA.
pub mod simulate;

pub use config::GameConfig;
pub use dice::{DIFFICULTY_WEIGHTS, pick_prompt, roll_difficulty};
pub use error::{GameError, GameResult};
pub use history::{RollHistory, RollRecord};
pub use session::GameSession;
pub use simulate::{SimulationRound, simulate};
