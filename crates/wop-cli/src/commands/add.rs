use std::path::Path;

pub fn run(file: &Path, category: &str, text: &str, difficulty: u8) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (mut store, store_file) = super::open_store(file)?;

    let prompt = store
        .add(category, text, difficulty)
        .map_err(|e| e.to_string())?;
    super::save_store(&store_file, &store)?;

    println!(
        "  Added to {category} with id {} (difficulty {})",
        prompt.id, prompt.difficulty
    );
    Ok(())
}
