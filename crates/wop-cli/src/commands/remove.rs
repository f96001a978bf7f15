use std::path::Path;

use wop_core::PromptId;

pub fn run(file: &Path, category: &str, id: i64) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (mut store, store_file) = super::open_store(file)?;

    if store.remove(category, PromptId(id)) {
        super::save_store(&store_file, &store)?;
        println!("  Removed {id} from {category}");
    } else {
        println!("  Nothing to remove: no prompt with id {id} in {category}");
    }
    Ok(())
}
