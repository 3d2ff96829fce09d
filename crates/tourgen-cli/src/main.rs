//! Tourgen CLI - Command-line interface for TSP graph dataset generation.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tourgen")]
#[command(author, version, about = "Synthetic TSP graph generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of labeled graphs and print a summary
    Generate(commands::generate::GenerateArgs),

    /// Show or write batch configuration files
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs on stderr, summaries on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
