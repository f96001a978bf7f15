//! Timestamped log of reveals within a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wop_core::Category;

/// One revealed roll: what was rolled and what, if anything, was drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollRecord {
    /// The pool the prompt was drawn from.
    pub category: Category,
    /// The rolled difficulty.
    pub difficulty: u8,
    /// The drawn prompt text, or `None` when the pool had no match.
    pub prompt: Option<String>,
    /// When the reveal happened.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of reveals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollHistory {
    records: Vec<RollRecord>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: RollRecord) {
        self.records.push(record);
    }

    /// All records in order.
    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the history as plain text, one reveal per line.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Session History\n===============\n\n");
        for (index, record) in self.records.iter().enumerate() {
            let what = record
                .prompt
                .as_deref()
                .unwrap_or("(no prompt at this difficulty)");
            out.push_str(&format!(
                "{:>3}. [{} d{}] {what}\n",
                index + 1,
                record.category.label(),
                record.difficulty,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(difficulty: u8, prompt: Option<&str>) -> RollRecord {
        RollRecord {
            category: Category::Truths,
            difficulty,
            prompt: prompt.map(str::to_string),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_history() {
        let h = RollHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn append_and_read_back() {
        let mut h = RollHistory::new();
        h.append(record(2, Some("What is your worst habit?")));
        assert_eq!(h.len(), 1);
        assert_eq!(h.records()[0].difficulty, 2);
    }

    #[test]
    fn export_text_lists_reveals_in_order() {
        let mut h = RollHistory::new();
        h.append(record(1, Some("first prompt")));
        h.append(record(4, None));
        let text = h.export_text();
        assert!(text.contains("1. [Truth d1] first prompt"));
        assert!(text.contains("2. [Truth d4] (no prompt at this difficulty)"));
    }

    #[test]
    fn serde_round_trip() {
        let mut h = RollHistory::new();
        h.append(record(3, Some("kept")));
        let json = serde_json::to_string(&h).unwrap();
        let back: RollHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.records()[0].prompt.as_deref(), Some("kept"));
    }
}
