//! Configuration management for tourgen dataset generation.
//!
//! Batch runs are described by a [`BatchConfig`], loaded from or saved to TOML.
//! A validated configuration turns into a ready
//! [`BatchGenerator`](tourgen_core::BatchGenerator).
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tourgen_config::BatchConfig;
//!
//! let config = BatchConfig::from_toml(
//!     r#"
//!     count = 4
//!     node_range = [4, 5]
//!     weight_range = [1, 2]
//!     "#,
//! )
//! .unwrap();
//!
//! let generator = config.batch_generator().unwrap();
//! let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
//! let batch = generator.generate(&mut rng, config.count).unwrap();
//! assert_eq!(batch.len(), 4);
//! ```

mod batch_config;
mod error;

pub use batch_config::{BatchConfig, SolverConfig};
pub use error::ConfigError;
