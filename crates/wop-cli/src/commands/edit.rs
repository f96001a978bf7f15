use std::path::Path;

use wop_core::PromptId;

pub fn run(file: &Path, category: &str, id: i64, text: &str, difficulty: u8) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (mut store, store_file) = super::open_store(file)?;

    let prompt = store
        .update(category, PromptId(id), text, difficulty)
        .map_err(|e| e.to_string())?;
    super::save_store(&store_file, &store)?;

    println!(
        "  Updated {} in {category}: \"{}\" (difficulty {})",
        prompt.id, prompt.text, prompt.difficulty
    );
    Ok(())
}
