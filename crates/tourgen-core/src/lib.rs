//! Tourgen Core - synthetic TSP graphs for graph-network training
//!
//! This crate generates small random complete graphs, labels each with an
//! approximate Traveling Salesman tour, and projects the labeled graph into a
//! pair of feature graphs: an *input* graph (tour flags and edge weights) and a
//! *target* graph (one-hot tour membership and total tour weight).
//!
//! # Pipeline
//!
//! - [`GraphGenerator`] - random complete graph with uniform integer weights
//! - [`TourSolver`] - greedy edge matching plus 2-opt, writes `solution` labels
//! - [`features`] - pure projections into [`FeatureGraph`]s
//! - [`BatchGenerator`] / [`generate_batch`] - N independent samples
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tourgen_core::generate_batch;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let batch = generate_batch(&mut rng, 5, (5, 9), (1, 10)).unwrap();
//!
//! assert_eq!(batch.inputs.len(), 5);
//! for (raw, target) in batch.raw.iter().zip(&batch.targets) {
//!     assert_eq!(raw.edge_count(), target.edge_count());
//! }
//! ```
//!
//! # Randomness
//!
//! Every random draw goes through a caller-supplied [`rand::Rng`]. Nothing in
//! this crate touches a global generator, so seeded RNGs give reproducible
//! batches and separate RNGs can drive separate threads.
//!
//! # Logging
//!
//! Enable the `tracing` feature to emit `tracing` events from generation and
//! solving.

pub mod batch;
pub mod error;
pub mod features;
pub mod generator;
pub mod graph;
pub mod solver;

pub use batch::{Batch, BatchGenerator, Sample, generate_batch};
pub use error::{DatasetError, Element, Result};
pub use features::{input_graph, one_hot, project, target_graph, tour_weight};
pub use generator::{
    GraphGenerator, IntRange, MAX_NODES, MAX_WEIGHT, complete_graph, random_graph,
};
pub use graph::{
    Edge, EdgeId, EdgeLabel, FeatureGraph, Features, Graph, GraphError, NodeId, NodeLabel,
    TspGraph,
};
pub use solver::{DistanceMatrix, Tour, TourSolver};
