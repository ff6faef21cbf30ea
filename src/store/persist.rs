//! Snapshot persistence: the dashboard state survives restarts as one
//! JSON file, rewritten after every state-changing command.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::DashboardState;

/// Persisted snapshot: the state plus the time it was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub state: DashboardState,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("state file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Load the snapshot, or `None` when no state file exists yet.
pub fn load(path: &Path) -> Result<Option<Snapshot>, PersistError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Write the state, stamped with the current time, as pretty JSON.
/// Parent directories are created as needed.
pub fn save(path: &Path, state: &DashboardState) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let snapshot = Snapshot {
        saved_at: Utc::now(),
        state: state.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}
