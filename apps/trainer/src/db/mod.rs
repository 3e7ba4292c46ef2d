//! Local SQLite snapshot store.

pub mod date_utils;
pub mod error;
pub mod history;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use history::{load_history, read_history, save_history, HISTORY_KEY};
pub use repository::{SnapshotStore, SqliteRepository};
