use std::io::Read;
use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path, category: &str, input: &Path) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let text = read_input(input)?;

    let drafts = match wop_codec::decode_strict(&text) {
        Ok(drafts) => drafts,
        Err(report) => {
            eprintln!("{}", "nothing was changed:".yellow());
            eprint!("{report}");
            return Err("bulk replace rejected".to_string());
        }
    };

    let (mut store, store_file) = super::open_store(file)?;
    let replaced = store.list(category).len();
    store
        .replace_all(category, &drafts)
        .map_err(|e| e.to_string())?;
    super::save_store(&store_file, &store)?;

    println!(
        "  Replaced {replaced} prompts in {category} with {}",
        drafts.len()
    );
    Ok(())
}

fn read_input(input: &Path) -> Result<String, String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("cannot read {}: {e}", input.display()))
    }
}
