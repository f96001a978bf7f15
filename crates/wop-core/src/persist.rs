//! File-backed persistence for the prompt pools.
//!
//! One JSON document per store: `{"truths": [...], "dares": [...]}`.
//! A missing file and an unreadable one converge to the same recovery
//! path: the bundled seed pools are written out and returned. Data that
//! parses is returned as-is without schema validation, so a hand-edited
//! difficulty outside 1-6 survives a load (it just never matches a roll).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistError;
use crate::seed::seed_pools;
use crate::store::PromptPools;

/// Where the pools came from on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Parsed from an existing store file.
    File,
    /// No store file existed; the seed pools were written and returned.
    Seeded,
    /// The store file existed but could not be parsed; it was replaced
    /// with the seed pools.
    Recovered,
}

/// A path-keyed persistence slot for [`PromptPools`].
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Create an adapter for the given path. Nothing is touched until
    /// [`load`](Self::load) or [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this adapter reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the pools, seeding or recovering as needed.
    ///
    /// The seed write on first run or recovery is itself fallible; a
    /// failure there means the slot is unusable and is returned as an
    /// error.
    pub fn load(&self) -> Result<(PromptPools, LoadOrigin), PersistError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let pools = seed_pools();
                self.save(&pools)?;
                return Ok((pools, LoadOrigin::Seeded));
            }
            Err(e) => return Err(PersistError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(pools) => Ok((pools, LoadOrigin::File)),
            Err(_) => {
                let pools = seed_pools();
                self.save(&pools)?;
                Ok((pools, LoadOrigin::Recovered))
            }
        }
    }

    /// Serialize the full pools and write them to the slot.
    pub fn save(&self, pools: &PromptPools) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(pools)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Prompt, PromptId};
    use tempfile::TempDir;

    fn slot(dir: &TempDir) -> StoreFile {
        StoreFile::new(dir.path().join("prompts.json"))
    }

    #[test]
    fn missing_file_seeds_and_persists() {
        let dir = TempDir::new().unwrap();
        let file = slot(&dir);

        let (pools, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::Seeded);
        assert!(!pools.is_empty());
        assert!(file.path().exists());

        // Second load reads what was just written.
        let (reloaded, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::File);
        assert_eq!(reloaded, pools);
    }

    #[test]
    fn corrupt_file_recovers_to_seed() {
        let dir = TempDir::new().unwrap();
        let file = slot(&dir);
        fs::write(file.path(), "{ not json").unwrap();

        let (pools, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::Recovered);
        assert_eq!(pools, seed_pools());

        let (_, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::File);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = slot(&dir);

        let pools = PromptPools {
            truths: vec![Prompt {
                id: PromptId(1),
                text: "What is your favourite colour?".to_string(),
                difficulty: 1,
            }],
            dares: Vec::new(),
        };
        file.save(&pools).unwrap();

        let (loaded, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::File);
        assert_eq!(loaded, pools);
    }

    #[test]
    fn load_is_permissive_about_difficulty() {
        let dir = TempDir::new().unwrap();
        let file = slot(&dir);
        fs::write(
            file.path(),
            r#"{"truths": [{"id": 1, "text": "hand-edited", "difficulty": 99}], "dares": []}"#,
        )
        .unwrap();

        let (pools, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::File);
        assert_eq!(pools.truths[0].difficulty, 99);
    }

    #[test]
    fn load_tolerates_missing_and_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let file = slot(&dir);
        fs::write(
            file.path(),
            r#"{"version": 2, "truths": [{"id": 1, "text": "only truths", "difficulty": 3}]}"#,
        )
        .unwrap();

        let (pools, origin) = file.load().unwrap();
        assert_eq!(origin, LoadOrigin::File);
        assert_eq!(pools.truths.len(), 1);
        assert!(pools.dares.is_empty());
    }
}
