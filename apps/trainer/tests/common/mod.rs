//! Common test utilities for integration tests.
//!
//! `TestContext` owns a temporary directory holding the catalog file and the
//! SQLite database, so a test can tear the state down and build it again to
//! simulate an application restart.

pub mod fixtures;

use std::path::PathBuf;

use tempfile::TempDir;
use vocab_trainer::config::TrainerConfig;
use vocab_trainer::state::AppState;

pub struct TestContext {
    dir: TempDir,
    pub config: TrainerConfig,
}

impl TestContext {
    /// Create a context backed by the standard fixture catalog.
    pub fn new() -> Self {
        Self::with_catalog(&fixtures::catalog_json())
    }

    pub fn with_catalog(catalog_json: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog_path = dir.path().join("vocabulary.json");
        std::fs::write(&catalog_path, catalog_json).expect("Failed to write catalog");

        let config = TrainerConfig {
            db_path: dir.path().join("data").join("trainer.db"),
            catalog_path: Some(catalog_path),
            ..TrainerConfig::default()
        };
        Self { dir, config }
    }

    /// Build fresh application state over the same files.
    pub fn state(&self) -> AppState {
        vocab_trainer::build_state(self.config.clone()).expect("Failed to build state")
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.db_path.clone()
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
