//! Parsing the bulk text format into prompt drafts.

use wop_core::{DIFFICULTY_RANGE, PromptDraft};

use crate::format::DELIMITER;
use crate::report::{LineError, LineErrorKind, ParseReport};

/// The result of a lenient decode: what was accepted and how much was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientOutcome {
    /// Drafts from every line that parsed.
    pub accepted: Vec<PromptDraft>,
    /// How many non-blank lines were skipped as invalid.
    pub skipped: usize,
}

/// Parse one non-blank line into a draft.
///
/// The split is on the last delimiter, so text may contain commas as
/// long as the difficulty is the final field.
fn parse_line(line: &str) -> Result<PromptDraft, LineErrorKind> {
    let Some((text, difficulty)) = line.rsplit_once(DELIMITER) else {
        return Err(LineErrorKind::MissingDelimiter);
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(LineErrorKind::EmptyText);
    }
    let raw = difficulty.trim();
    let difficulty = raw
        .parse::<u8>()
        .ok()
        .filter(|d| DIFFICULTY_RANGE.contains(d))
        .ok_or_else(|| LineErrorKind::Difficulty(raw.to_string()))?;
    Ok(PromptDraft::new(text, difficulty))
}

/// Strict decode: all-or-nothing batch semantics.
///
/// Blank and whitespace-only lines are ignored but still counted for
/// line numbering. If any remaining line is invalid the decode fails
/// with a [`ParseReport`] naming every bad line by its 1-based number,
/// and no drafts are returned.
pub fn decode_strict(input: &str) -> Result<Vec<PromptDraft>, ParseReport> {
    let mut drafts = Vec::new();
    let mut errors = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(draft) => drafts.push(draft),
            Err(kind) => errors.push(LineError {
                line: index + 1,
                kind,
            }),
        }
    }

    if errors.is_empty() {
        Ok(drafts)
    } else {
        Err(ParseReport { errors })
    }
}

/// Lenient decode: the legacy import path.
///
/// Invalid lines are skipped silently; the outcome carries the accepted
/// drafts and the skip count.
pub fn decode_lenient(input: &str) -> LenientOutcome {
    let mut accepted = Vec::new();
    let mut skipped = 0;

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(draft) => accepted.push(draft),
            Err(_) => skipped += 1,
        }
    }

    LenientOutcome { accepted, skipped }
}


#[cfg(test)]
mod round_trip {
    use proptest::prelude::*;
    use wop_core::{Prompt, PromptId};

    use crate::format::encode;
    use crate::parse::decode_strict;

    proptest! {
        // Bulk round-trip law: decode(encode(prompts)) reproduces text
        // and difficulty; ids are not preserved by design.
        #[test]
        fn decode_inverts_encode(
            entries in proptest::collection::vec(("[A-Za-z0-9 ,?!']{1,60}", 1u8..=6), 1..20)
        ) {
            let prompts: Vec<Prompt> = entries
                .iter()
                .enumerate()
                .filter_map(|(i, (text, difficulty))| {
                    let trimmed = text.trim();
                    (!trimmed.is_empty()).then(|| Prompt {
                        id: PromptId(i as i64 + 1),
                        text: trimmed.to_string(),
                        difficulty: *difficulty,
                    })
                })
                .collect();
            prop_assume!(!prompts.is_empty());

            let decoded = decode_strict(&encode(&prompts)).unwrap();
            prop_assert_eq!(decoded.len(), prompts.len());
            for (draft, prompt) in decoded.iter().zip(&prompts) {
                prop_assert_eq!(&draft.text, &prompt.text);
                prop_assert_eq!(draft.difficulty, prompt.difficulty);
            }
        }
    }
}
