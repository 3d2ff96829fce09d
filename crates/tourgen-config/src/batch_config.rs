//! Batch configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tourgen_core::{BatchGenerator, GraphGenerator, TourSolver};

use crate::error::ConfigError;

/// Settings for one batch-generation run.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # TOML Format
///
/// ```toml
/// count = 32
/// seed = 7
/// node_range = [5, 9]
/// weight_range = [1, 10]
///
/// [solver]
/// optimization_passes = 3
/// ```
///
/// Ranges are half-open `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of graphs to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// RNG seed. Unset means seed from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Node-count range `[start, end)`.
    #[serde(default = "default_node_range")]
    pub node_range: (i64, i64),

    /// Edge-weight range `[start, end)`.
    #[serde(default = "default_weight_range")]
    pub weight_range: (i64, i64),

    /// Tour solver settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Tour solver settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of 2-opt passes after greedy construction.
    #[serde(default = "default_optimization_passes")]
    pub optimization_passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            optimization_passes: default_optimization_passes(),
        }
    }
}

fn default_count() -> usize {
    32
}

fn default_node_range() -> (i64, i64) {
    let r = GraphGenerator::DEFAULT_NODE_RANGE;
    (r.start, r.end)
}

fn default_weight_range() -> (i64, i64) {
    let r = GraphGenerator::DEFAULT_WEIGHT_RANGE;
    (r.start, r.end)
}

fn default_optimization_passes() -> usize {
    TourSolver::DEFAULT_OPTIMIZATION_PASSES
}

impl BatchConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self {
            count: default_count(),
            seed: None,
            node_range: default_node_range(),
            weight_range: default_weight_range(),
            solver: SolverConfig::default(),
        }
    }

    /// Set the number of graphs.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the node-count range.
    pub fn with_node_range(mut self, start: i64, end: i64) -> Self {
        self.node_range = (start, end);
        self
    }

    /// Set the edge-weight range.
    pub fn with_weight_range(mut self, start: i64, end: i64) -> Self {
        self.weight_range = (start, end);
        self
    }

    /// Set the 2-opt pass limit.
    pub fn with_optimization_passes(mut self, passes: usize) -> Self {
        self.solver.optimization_passes = passes;
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the ranges without building anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.batch_generator().map(|_| ())
    }

    /// Build the batch generator described by this configuration.
    pub fn batch_generator(&self) -> Result<BatchGenerator, ConfigError> {
        let generator = GraphGenerator::new(self.node_range, self.weight_range)?;
        Ok(BatchGenerator::new(generator)
            .with_solver(TourSolver::new(self.solver.optimization_passes)))
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
