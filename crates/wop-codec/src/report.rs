//! Structured per-line failure reports for bulk decode.

use std::fmt;

/// Why a single line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineErrorKind {
    /// The line had no comma, so no difficulty field exists.
    #[error("missing ',<difficulty>' field")]
    MissingDelimiter,

    /// The text before the final comma was empty after trimming.
    #[error("prompt text is empty")]
    EmptyText,

    /// The final field was not an integer in 1-6.
    #[error("difficulty \"{0}\" is not an integer in 1-6")]
    Difficulty(String),
}

/// A single invalid line: its 1-based number and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the input, counting blank lines.
    pub line: usize,
    /// Why the line was rejected.
    pub kind: LineErrorKind,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// The failure result of a strict decode: every invalid line, in order.
///
/// A batch report, not a panic path. When any line is invalid the strict
/// decode commits nothing and returns the full report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// All invalid lines, in input order.
    pub errors: Vec<LineError>,
}

impl ParseReport {
    /// Number of invalid lines.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} invalid line{}",
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" },
        )?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseReport {}
