//! quizforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Multiple-choice quiz practice engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a unit quiz interactively
    Play {
        /// Path to a catalog .toml file or directory
        #[arg(long, default_value = "courses.toml")]
        catalog: PathBuf,

        /// Course identifier
        #[arg(long)]
        course: String,

        /// Unit identifier
        #[arg(long)]
        unit: String,

        /// Seed for deterministic question generation
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered topic generators (and catalog units, if given)
    Topics {
        /// Path to a catalog .toml file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create a starter courses.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            catalog,
            course,
            unit,
            seed,
            json,
        } => commands::play::execute(catalog, course, unit, seed, json),
        Commands::Topics { catalog } => commands::topics::execute(catalog),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
