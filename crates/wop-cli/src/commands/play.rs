use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use wop_game::{GameConfig, GameSession};

/// Suspense pause before each reveal, matching the table-game pacing.
const REVEAL_DELAY: Duration = Duration::from_secs(2);

pub fn run(file: &Path, category: &str, seed: Option<u64>, fast: bool) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let (store, _) = super::open_store(file)?;

    let config = GameConfig { seed };
    let mut session = GameSession::new(store, category, config);

    println!("  {} {category}", "Playing".bold());
    println!("  Type 'roll' to roll the die, 'show' to reveal, 'help' for everything else.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let revealing = matches!(input.to_lowercase().as_str(), "show" | "s");
        if revealing && !fast && session.pending().is_some() {
            print!("  ...");
            io::stdout().flush().map_err(|e| e.to_string())?;
            thread::sleep(REVEAL_DELAY);
            println!();
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
