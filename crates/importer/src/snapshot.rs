//! Loading and saving the store as a JSON snapshot.

use std::path::Path;

use storage::WorkoutStore;
use tracing::{debug, info};

use crate::Result;

/// Loads a store snapshot. A missing file is an empty store, not an error.
pub async fn load_store(path: &Path) -> Result<WorkoutStore> {
    if !tokio::fs::try_exists(path).await? {
        info!("No store at {}, starting empty", path.display());
        return Ok(WorkoutStore::new());
    }

    let content = tokio::fs::read_to_string(path).await?;
    let store: WorkoutStore = serde_json::from_str(&content)?;

    debug!(
        "Loaded {} exercises and {} sessions from {}",
        store.exercises().len(),
        store.sessions().len(),
        path.display()
    );

    Ok(store)
}

pub async fn save_store(path: &Path, store: &WorkoutStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(store)?;
    tokio::fs::write(path, json).await?;

    debug!("Saved store to {}", path.display());
    Ok(())
}
