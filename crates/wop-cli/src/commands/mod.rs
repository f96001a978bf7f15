pub mod add;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod play;
pub mod remove;
pub mod replace;
pub mod roll;
pub mod simulate;

use std::path::Path;

use colored::Colorize;

use wop_core::{Category, LoadOrigin, PromptStore, StoreFile};

/// Parse a user-supplied category string.
fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s)
        .ok_or_else(|| format!("unknown category \"{s}\" (expected truths or dares)"))
}

/// Open the store file, reporting first-run seeding or recovery.
fn open_store(path: &Path) -> Result<(PromptStore, StoreFile), String> {
    let store_file = StoreFile::new(path);
    let (pools, origin) = store_file
        .load()
        .map_err(|e| format!("cannot open {}: {e}", path.display()))?;

    match origin {
        LoadOrigin::Seeded => {
            eprintln!(
                "  {} new store seeded at {}",
                "note:".dimmed(),
                path.display()
            );
        }
        LoadOrigin::Recovered => {
            eprintln!(
                "  {} unreadable store replaced with seed data at {}",
                "warning:".yellow(),
                path.display()
            );
        }
        LoadOrigin::File => {}
    }

    Ok((PromptStore::new(pools), store_file))
}

/// Persist after a successful mutation. The in-memory change already
/// happened; a failed write is reported without undoing it.
fn save_store(store_file: &StoreFile, store: &PromptStore) -> Result<(), String> {
    store_file
        .save(store.pools())
        .map_err(|e| format!("changes were applied in memory but could not be saved: {e}"))
}
