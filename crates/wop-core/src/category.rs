use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed prompt pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Questions a player must answer honestly.
    Truths,
    /// Challenges a player must act out.
    Dares,
}

impl Category {
    /// Both categories, in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Truths, Self::Dares]
    }

    /// Try to parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "truth" | "truths" => Some(Self::Truths),
            "dare" | "dares" => Some(Self::Dares),
            _ => None,
        }
    }

    /// Singular label for game output ("Truth" / "Dare").
    pub fn label(self) -> &'static str {
        match self {
            Self::Truths => "Truth",
            Self::Dares => "Dare",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truths => write!(f, "truths"),
            Self::Dares => write!(f, "dares"),
        }
    }
}
