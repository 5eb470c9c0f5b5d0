mod args;
mod config;
mod handlers;

use clap::{Parser, Subcommand};
use motif_index::AlphabetRegistry;

#[derive(Parser)]
#[command(name = "motif-index")]
#[command(version)]
#[command(about = "Index fixed-length DNA motifs as sorted integer codes, and decode them back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a sorted integer index from a motif collection
    Index(args::IndexArgs),

    /// Decode an index file back into motifs
    Reverse(args::ReverseArgs),

    /// List available alphabets
    Alphabets,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabet registry with user overrides
    let registry = AlphabetRegistry::load_with_overrides()?;

    match cli.command {
        Command::Index(args) => handlers::index::handle(args, &registry),
        Command::Reverse(args) => handlers::reverse::handle(args, &registry),
        Command::Alphabets => handlers::alphabets::handle(&registry),
    }
}
