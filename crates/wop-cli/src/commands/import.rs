use std::path::Path;

pub fn run(file: &Path, category: &str, input: &Path) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let text = std::fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {e}", input.display()))?;

    let outcome = wop_codec::decode_lenient(&text);
    if outcome.accepted.is_empty() {
        println!(
            "  Nothing imported ({} lines skipped). Expected one 'text,difficulty' per line.",
            outcome.skipped
        );
        return Ok(());
    }

    let (mut store, store_file) = super::open_store(file)?;
    for draft in &outcome.accepted {
        store
            .add(category, &draft.text, draft.difficulty)
            .map_err(|e| e.to_string())?;
    }
    super::save_store(&store_file, &store)?;

    println!(
        "  Imported {} prompts into {category} ({} skipped)",
        outcome.accepted.len(),
        outcome.skipped
    );
    Ok(())
}
