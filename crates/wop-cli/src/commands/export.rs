use std::path::Path;

pub fn run(file: &Path, category: &str, output: Option<&Path>) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (store, _) = super::open_store(file)?;

    let content = wop_codec::encode(&store.list(category));

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported {category} to {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
