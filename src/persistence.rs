use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{GrocerError, Result};

/// Why a data file could not be used. Logged, never returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    Missing,
    Unreadable,
    Malformed,
}

pub fn try_load<T: DeserializeOwned>(path: &Path) -> std::result::Result<T, LoadFailure> {
    if !path.exists() {
        return Err(LoadFailure::Missing);
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "could not read data file");
        LoadFailure::Unreadable
    })?;
    serde_json::from_str(&content).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "malformed data file, starting empty");
        LoadFailure::Malformed
    })
}

/// Load a data file, falling back to `T::default()` when it is absent or unusable.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match try_load(path) {
        Ok(data) => data,
        Err(LoadFailure::Missing) => {
            tracing::debug!(path = %path.display(), "no data file yet");
            T::default()
        }
        Err(_) => T::default(),
    }
}

/// Overwrite the whole file with the current state.
pub fn save<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| GrocerError::Persistence(format!("{}: {e}", parent.display())))?;
    }
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, format!("{json}\n"))
        .map_err(|e| GrocerError::Persistence(format!("{}: {e}", path.display())))?;
    Ok(())
}
