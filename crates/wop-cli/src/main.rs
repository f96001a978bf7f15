//! CLI frontend for Wahrheit oder Pflicht — a Truth-or-Dare engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wop",
    about = "Wahrheit oder Pflicht — a Truth-or-Dare party game engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List prompts, sorted by difficulty
    List {
        /// Category to list (truths or dares); both when omitted
        category: Option<String>,

        /// Only show prompts at this difficulty
        #[arg(short, long)]
        difficulty: Option<u8>,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Add a single prompt to a category
    Add {
        /// Category (truths or dares)
        category: String,

        /// The prompt text
        text: String,

        /// Difficulty from 1 (easy) to 6 (hard)
        #[arg(short, long)]
        difficulty: u8,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Edit an existing prompt in place
    Edit {
        /// Category (truths or dares)
        category: String,

        /// Id of the prompt to edit
        id: i64,

        /// Replacement text
        text: String,

        /// Replacement difficulty from 1 to 6
        #[arg(short, long)]
        difficulty: u8,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Remove a prompt; removing a missing id is not an error
    Remove {
        /// Category (truths or dares)
        category: String,

        /// Id of the prompt to remove
        id: i64,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Replace a category's whole pool from bulk text (strict, atomic)
    Replace {
        /// Category (truths or dares)
        category: String,

        /// Input path with one 'text,difficulty' per line, or '-' for stdin
        input: PathBuf,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Append prompts from bulk text, skipping bad lines (lenient)
    Import {
        /// Category (truths or dares)
        category: String,

        /// Input path with one 'text,difficulty' per line
        input: PathBuf,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Export a category in the bulk text format
    Export {
        /// Category (truths or dares)
        category: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Play an interactive session
    Play {
        /// Starting category (truths or dares)
        category: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the suspense pause before each reveal
        #[arg(long)]
        fast: bool,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Roll the weighted die once and print the drawn prompt
    Roll {
        /// Category (truths or dares)
        category: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },

    /// Run a roll-and-pick simulation and print the trace
    Simulate {
        /// Category (truths or dares)
        category: String,

        /// Number of rounds to simulate
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// RNG seed for a deterministic trace
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Path to the JSON store file
        #[arg(short, long, default_value = "prompts.json")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            category,
            difficulty,
            file,
        } => commands::list::run(&file, category.as_deref(), difficulty),
        Commands::Add {
            category,
            text,
            difficulty,
            file,
        } => commands::add::run(&file, &category, &text, difficulty),
        Commands::Edit {
            category,
            id,
            text,
            difficulty,
            file,
        } => commands::edit::run(&file, &category, id, &text, difficulty),
        Commands::Remove { category, id, file } => commands::remove::run(&file, &category, id),
        Commands::Replace {
            category,
            input,
            file,
        } => commands::replace::run(&file, &category, &input),
        Commands::Import {
            category,
            input,
            file,
        } => commands::import::run(&file, &category, &input),
        Commands::Export {
            category,
            output,
            file,
        } => commands::export::run(&file, &category, output.as_deref()),
        Commands::Play {
            category,
            seed,
            fast,
            file,
        } => commands::play::run(&file, &category, seed, fast),
        Commands::Roll {
            category,
            seed,
            file,
        } => commands::roll::run(&file, &category, seed),
        Commands::Simulate {
            category,
            rounds,
            seed,
            file,
        } => commands::simulate::run(&file, &category, rounds, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
