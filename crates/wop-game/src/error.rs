//! Error types for the game crate.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur during an interactive session.
#[derive(Debug, Error)]
pub enum GameError {
    /// A reveal was requested before any roll.
    #[error("no roll pending; type 'roll' first")]
    NoPendingRoll,

    /// Input did not match any session command.
    #[error("unknown command: {0} (type 'help')")]
    UnknownCommand(String),
}
