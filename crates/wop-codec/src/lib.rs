//! The bulk-edit text format: one prompt per line, `<text>,<difficulty>`.
//!
//! The split happens at the last comma on a line, so prompt text may
//! itself contain commas as long as the difficulty is the final field.
//! Two decode modes exist: strict (any bad line rejects the whole batch),
//! used for wholesale pool replacement, and lenient (bad lines are
//! skipped and counted), used by the legacy file-import path.

/// Serializing prompts into the line format.
pub mod format;
/// Parsing the line format into prompt drafts.
pub mod parse;
/// Structured per-line failure reports.
pub mod report;

pub use format::encode;
pub use parse::{LenientOutcome, decode_lenient, decode_strict};
pub use report::{LineError, LineErrorKind, ParseReport};
