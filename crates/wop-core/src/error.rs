use crate::category::Category;
use crate::prompt::PromptId;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by [`crate::store::PromptStore`] mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Prompt text was empty or whitespace-only.
    #[error("prompt text must not be empty")]
    EmptyText,

    /// Difficulty outside the valid 1-6 range.
    #[error("difficulty {0} is out of range (expected 1-6)")]
    DifficultyOutOfRange(u8),

    /// No prompt with the given id exists in the category.
    #[error("no prompt with id {id} in {category}")]
    PromptNotFound {
        /// The category that was searched.
        category: Category,
        /// The id that could not be found.
        id: PromptId,
    },

    /// A bulk batch contained an invalid record; nothing was committed.
    #[error("invalid record at position {index}: {source}")]
    InvalidBatchRecord {
        /// Zero-based position of the offending record in the batch.
        index: usize,
        /// The underlying validation failure.
        source: Box<StoreError>,
    },
}

/// Errors raised by the file-backed persistence adapter.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The store file could not be read or written.
    #[error("store file i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The pools could not be serialized or deserialized.
    #[error("store file serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
