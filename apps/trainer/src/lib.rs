//! Vocabulary trainer application layer.
//!
//! Wires the core library to a SQLite snapshot store and exposes the
//! session controller through plain command functions.

pub mod commands;
pub mod config;
pub mod controller;
pub mod db;
pub mod state;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::VocabularyCatalog;

use crate::config::TrainerConfig;
use crate::controller::SessionController;
use crate::db::SqliteRepository;
use crate::state::AppState;

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Read the vocabulary catalog, or an empty one when no path is set.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<VocabularyCatalog> {
    let Some(path) = path else {
        tracing::warn!("no catalog configured, starting with an empty library");
        return Ok(VocabularyCatalog::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = VocabularyCatalog::from_json(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), chapters = catalog.chapters().len(), "catalog loaded");
    Ok(catalog)
}

/// Build application state from an explicit configuration.
pub fn build_state(config: TrainerConfig) -> anyhow::Result<AppState> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;

    // Ensure data directory exists
    if let Some(parent) = config.db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    tracing::info!(path = %config.db_path.display(), "opening database");
    let repository = SqliteRepository::open(&config.db_path)?;

    Ok(AppState::new(SessionController::new(
        catalog, repository, config,
    )))
}

/// Load `.env`, start logging and build state from the environment.
pub fn run_from_env() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();
    init_tracing();
    build_state(TrainerConfig::from_env())
}
