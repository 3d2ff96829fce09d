//! Integration tests for tourgen-config.
//!
//! These tests verify file round-trips and that configurations drive the core
//! pipeline end to end.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use tourgen_config::{BatchConfig, ConfigError};

/// Save a configuration, load it back, and generate with it.
#[test]
fn test_save_load_generate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.toml");

    let config = BatchConfig::new()
        .with_count(5)
        .with_seed(17)
        .with_node_range(4, 5)
        .with_weight_range(1, 2);
    config.save(&path).expect("should save config");

    let loaded = BatchConfig::load(&path).expect("should load config");
    assert_eq!(loaded, config);

    let generator = loaded.batch_generator().unwrap();
    let mut rng = StdRng::seed_from_u64(loaded.seed.unwrap());
    let batch = generator.generate(&mut rng, loaded.count).unwrap();

    assert_eq!(batch.len(), 5);
    for target in &batch.targets {
        assert_eq!(target.attrs(), &vec![4.0]);
    }
}

/// Loading a missing file reports the path.
#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = BatchConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

/// A hand-written file with only some keys set.
#[test]
fn test_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "count = 3\n\n[solver]\noptimization_passes = 1\n").unwrap();

    let config = BatchConfig::load(&path).unwrap();
    assert_eq!(config.count, 3);
    assert_eq!(config.node_range, (5, 9));
    assert_eq!(config.solver.optimization_passes, 1);
    assert!(config.validate().is_ok());
}

/// Saving into a directory that does not exist fails with the write path.
#[test]
fn test_save_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("batch.toml");

    let err = BatchConfig::new().save(&path).unwrap_err();
    assert!(matches!(err, ConfigError::WriteFile { .. }));
}
