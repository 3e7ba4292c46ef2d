//! Trainer configuration.

use std::path::PathBuf;

use vocab_core::DEFAULT_EXAM_QUESTIONS;

/// Number of sessions shown in the recent activity list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    pub db_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub exam_questions: usize,
    pub recent_limit: usize,
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-trainer")
        .join("trainer.db")
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            catalog_path: None,
            exam_questions: DEFAULT_EXAM_QUESTIONS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl TrainerConfig {
    /// Defaults overridden by `VOCAB_TRAINER_*` environment variables.
    ///
    /// Numeric values that fail to parse keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("VOCAB_TRAINER_DB") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("VOCAB_TRAINER_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(size) = lookup("VOCAB_TRAINER_EXAM_SIZE").and_then(|v| v.parse().ok()) {
            config.exam_questions = size;
        }
        if let Some(limit) = lookup("VOCAB_TRAINER_RECENT_LIMIT").and_then(|v| v.parse().ok()) {
            config.recent_limit = limit;
        }

        config
    }
}
