//! Batch assembly: generate → solve → project, N times.
//!
//! Every sample in a [`Batch`] is produced independently by the full pipeline.
//! The four sequences are index-aligned: `raw[i]` is the source of
//! `inputs[i]`, `targets[i]` and `tours[i]`. A failure on any sample aborts the
//! whole batch.

use rand::Rng;

use crate::error::Result;
use crate::features::project;
use crate::generator::{GraphGenerator, IntRange};
use crate::graph::{FeatureGraph, TspGraph};
use crate::solver::{Tour, TourSolver};

/// One fully processed graph.
#[derive(Clone, Debug)]
pub struct Sample {
    /// Input features (tour flags, weights, `[0.0]`).
    pub input: FeatureGraph,
    /// Target labels (one-hot tour membership, tour weight).
    pub target: FeatureGraph,
    /// Labeled source graph.
    pub raw: TspGraph,
    /// Tour the labels were derived from.
    pub tour: Tour,
}

/// Index-aligned sequences of generated graphs.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    /// Input graphs.
    pub inputs: Vec<FeatureGraph>,
    /// Target graphs.
    pub targets: Vec<FeatureGraph>,
    /// Labeled source graphs.
    pub raw: Vec<TspGraph>,
    /// Computed tours.
    pub tours: Vec<Tour>,
}

/// Upper bound on the samples a batch reserves room for up front.
const PREALLOC_LIMIT: usize = 1024;

impl Batch {
    fn with_capacity(count: usize) -> Self {
        let count = count.min(PREALLOC_LIMIT);
        Self {
            inputs: Vec::with_capacity(count),
            targets: Vec::with_capacity(count),
            raw: Vec::with_capacity(count),
            tours: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, sample: Sample) {
        self.inputs.push(sample.input);
        self.targets.push(sample.target);
        self.raw.push(sample.raw);
        self.tours.push(sample.tour);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the batch holds no samples.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Splits into `(inputs, targets, raw)`.
    pub fn into_parts(self) -> (Vec<FeatureGraph>, Vec<FeatureGraph>, Vec<TspGraph>) {
        (self.inputs, self.targets, self.raw)
    }
}

/// Runs the full pipeline with a fixed generator and solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchGenerator {
    generator: GraphGenerator,
    solver: TourSolver,
}

impl BatchGenerator {
    /// Creates a batch generator with the default solver.
    pub fn new(generator: GraphGenerator) -> Self {
        Self {
            generator,
            solver: TourSolver::default(),
        }
    }

    /// Replaces the solver.
    pub fn with_solver(mut self, solver: TourSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Graph generator in use.
    pub fn generator(&self) -> &GraphGenerator {
        &self.generator
    }

    /// Tour solver in use.
    pub fn solver(&self) -> &TourSolver {
        &self.solver
    }

    /// Generates, solves and projects a single graph.
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sample> {
        let graph = self.generator.generate(rng);
        let (raw, tour) = self.solver.label(graph)?;
        let (input, target) = project(&raw)?;
        Ok(Sample {
            input,
            target,
            raw,
            tour,
        })
    }

    /// Generates `count` samples. Any failure discards the partial batch.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Batch> {
        let mut batch = Batch::with_capacity(count);
        for _index in 0..count {
            let sample = self.generate_one(rng)?;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                index = _index,
                nodes = sample.raw.node_count(),
                "generated sample"
            );
            batch.push(sample);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count, "generated batch");

        Ok(batch)
    }
}

/// Generates `count` labeled graphs with their input and target projections.
///
/// Ranges are half-open and validated before any graph is generated.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    node_range: impl Into<IntRange>,
    weight_range: impl Into<IntRange>,
) -> Result<Batch> {
    BatchGenerator::new(GraphGenerator::new(node_range, weight_range)?).generate(rng, count)
}
