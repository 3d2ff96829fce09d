//! Batch generation command.

use anyhow::Context;
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;
use tourgen_config::BatchConfig;
use tourgen_core::{Batch, tour_weight};

/// Summary output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per graph
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Batch configuration file (TOML); flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of graphs to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Node-count range [START, END)
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    nodes: Option<Vec<i64>>,

    /// Edge-weight range [START, END)
    #[arg(long, num_args = 2, value_names = ["START", "END"], allow_negative_numbers = true)]
    weights: Option<Vec<i64>>,

    /// RNG seed (random if unset)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum 2-opt passes after greedy construction
    #[arg(long)]
    passes: Option<usize>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Per-graph report line.
#[derive(Debug, Serialize)]
struct GraphSummary {
    index: usize,
    nodes: usize,
    edges: usize,
    tour: Vec<u32>,
    tour_weight: i64,
}

impl GenerateArgs {
    /// Merge the config file (if any) with command-line overrides.
    fn resolve(&self) -> anyhow::Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BatchConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(range) = &self.nodes {
            config.node_range = (range[0], range[1]);
        }
        if let Some(range) = &self.weights {
            config.weight_range = (range[0], range[1]);
        }
        if let Some(passes) = self.passes {
            config.solver.optimization_passes = passes;
        }
        Ok(config)
    }
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    let generator = config.batch_generator()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        count = config.count,
        seed,
        nodes = ?config.node_range,
        weights = ?config.weight_range,
        passes = config.solver.optimization_passes,
        "generating batch"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let batch = generator.generate(&mut rng, config.count)?;

    for summary in summarize(&batch)? {
        match args.format {
            OutputFormat::Text => println!(
                "#{:<4} nodes={:<3} edges={:<4} weight={:<6} tour={}",
                summary.index,
                summary.nodes,
                summary.edges,
                summary.tour_weight,
                summary
                    .tour
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join("-")
            ),
            OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        }
    }

    tracing::info!(graphs = batch.len(), "done");
    Ok(())
}

fn summarize(batch: &Batch) -> anyhow::Result<Vec<GraphSummary>> {
    batch
        .raw
        .iter()
        .zip(&batch.tours)
        .enumerate()
        .map(|(index, (raw, tour))| {
            Ok(GraphSummary {
                index,
                nodes: raw.node_count(),
                edges: raw.edge_count(),
                tour: tour.order().iter().map(|id| id.index()).collect(),
                tour_weight: tour_weight(raw)?,
            })
        })
        .collect()
}
