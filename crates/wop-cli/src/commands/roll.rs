use std::path::Path;

use colored::Colorize;

use wop_game::{GameConfig, pick_prompt, roll_difficulty};

pub fn run(file: &Path, category: &str, seed: Option<u64>) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (store, _) = super::open_store(file)?;

    let mut rng = GameConfig { seed }.build_rng();
    let difficulty = roll_difficulty(&mut rng);

    match pick_prompt(&store, category, difficulty, &mut rng) {
        Some(prompt) => println!("  {} {}", category.label().bold(), prompt.text),
        None => println!(
            "  No {category} at difficulty {difficulty}. Roll again or add some with 'wop add'."
        ),
    }
    Ok(())
}
