use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wop_game::{GameConfig, simulate};

pub fn run(file: &Path, category: &str, rounds: u32, seed: u64) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (store, _) = super::open_store(file)?;

    let mut rng = GameConfig::default().with_seed(seed).build_rng();
    let trace = simulate(&store, category, rounds, &mut rng);

    println!(
        "  {} {category} {}",
        "Simulation".bold(),
        format!("({rounds} rounds, seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Round", "Difficulty", "Prompt"]);
    for round in &trace {
        table.add_row(vec![
            round.round.to_string(),
            round.difficulty.to_string(),
            round
                .prompt
                .clone()
                .unwrap_or_else(|| "(none at this difficulty)".to_string()),
        ]);
    }
    println!("{table}");

    let drawn = trace.iter().filter(|r| r.prompt.is_some()).count();
    println!();
    println!("  {drawn}/{rounds} rounds drew a prompt");
    Ok(())
}
