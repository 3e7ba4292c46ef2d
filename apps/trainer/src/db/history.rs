//! Session history persisted as a single JSON snapshot.

use tracing::warn;
use vocab_core::SessionRecord;

use crate::db::error::DbError;
use crate::db::repository::SnapshotStore;

/// Snapshot key holding the history array, most recent first.
pub const HISTORY_KEY: &str = "practice_app_sessions";

/// Read and decode the stored history.
///
/// # Errors
///
/// Returns `DbError::CorruptSnapshot` if the stored value is not a valid
/// history array, or `DbError::Sqlite` if the read fails.
pub fn read_history(store: &dyn SnapshotStore) -> Result<Vec<SessionRecord>, DbError> {
    let Some(raw) = store.read_snapshot(HISTORY_KEY)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| DbError::CorruptSnapshot {
        key: HISTORY_KEY.to_string(),
        source,
    })
}

/// Load history at startup. Any failure degrades to an empty history.
pub fn load_history(store: &dyn SnapshotStore) -> Vec<SessionRecord> {
    match read_history(store) {
        Ok(history) => history,
        Err(e) => {
            warn!(error = %e, "failed to load session history, starting empty");
            Vec::new()
        }
    }
}

/// Replace the stored history with `history`.
pub fn save_history(store: &dyn SnapshotStore, history: &[SessionRecord]) -> Result<(), DbError> {
    let raw = serde_json::to_string(history)?;
    store.write_snapshot(HISTORY_KEY, &raw)
}
