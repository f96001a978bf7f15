use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wop_core::Category;

pub fn run(file: &Path, category: Option<&str>, difficulty: Option<u8>) -> Result<(), String> {
    let (store, _) = super::open_store(file)?;

    let categories: Vec<Category> = match category {
        Some(s) => vec![super::parse_category(s)?],
        None => Category::all().to_vec(),
    };

    for category in categories {
        let prompts: Vec<_> = store
            .list(category)
            .into_iter()
            .filter(|p| difficulty.is_none_or(|d| p.difficulty == d))
            .collect();

        println!("  {}", category.to_string().bold());

        if prompts.is_empty() {
            println!("  (empty)");
            println!();
            continue;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Id", "Difficulty", "Text"]);
        for prompt in &prompts {
            table.add_row(vec![
                prompt.id.to_string(),
                prompt.difficulty.to_string(),
                prompt.text.clone(),
            ]);
        }
        println!("{table}");
        println!("  {} prompts", prompts.len());
        println!();
    }

    Ok(())
}
