//! Configuration file commands.

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tourgen_config::BatchConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the default configuration as TOML
    Default,

    /// Write the default configuration to a file
    Init {
        /// Output TOML file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Validate a configuration file
    Check {
        /// TOML file to check
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Default => {
            print!("{}", BatchConfig::default().to_toml()?);
            Ok(())
        }
        ConfigCommand::Init { output, force } => init(&output, force),
        ConfigCommand::Check { path } => check(&path),
    }
}

fn init(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "'{}' already exists. Use --force to overwrite.",
            output.display()
        );
    }
    BatchConfig::default().save(output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn check(path: &Path) -> anyhow::Result<()> {
    let config = BatchConfig::load(path)?;
    config.validate()?;
    println!(
        "OK: {} graphs, nodes [{}, {}), weights [{}, {}), {} 2-opt passes",
        config.count,
        config.node_range.0,
        config.node_range.1,
        config.weight_range.0,
        config.weight_range.1,
        config.solver.optimization_passes
    );
    Ok(())
}
