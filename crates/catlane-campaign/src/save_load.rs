//! Unlock progress persistence.
//!
//! A single JSON record holding the unlocked stage set. Reads fall back
//! to the default (only stage 1) on any failure; writes are best-effort
//! and must never fail the tick that triggered them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted progression record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub unlocked_stages: Vec<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            unlocked_stages: vec![1],
        }
    }
}

/// Persistence failure. Surfaced to the caller for logging only.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load progress from `path`. Missing or unparseable files yield the
/// default record.
pub fn load_progress(path: &Path) -> Progress {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return Progress::default(),
    };
    serde_json::from_str(&json).unwrap_or_default()
}

/// Write progress to `path`, creating parent directories as needed.
pub fn save_progress(path: &Path, progress: &Progress) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(progress)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_roundtrip() {
        let progress = Progress {
            unlocked_stages: vec![1, 2, 3],
        };
        let json = serde_json::to_string(&progress).unwrap();
        let restored: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.unlocked_stages, vec![1, 2, 3]);
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir().join("catlane_test_save_load");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("progress.json");

        let progress = Progress {
            unlocked_stages: vec![1, 2],
        };
        save_progress(&path, &progress).unwrap();
        let loaded = load_progress(&path);
        assert_eq!(loaded.unlocked_stages, vec![1, 2]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_loads_default() {
        let path = std::env::temp_dir().join("catlane_test_missing/progress.json");
        let loaded = load_progress(&path);
        assert_eq!(loaded.unlocked_stages, vec![1]);
    }

    #[test]
    fn corrupt_file_loads_default() {
        let dir = std::env::temp_dir().join("catlane_test_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("progress.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = load_progress(&path);
        assert_eq!(loaded.unlocked_stages, vec![1]);

        let _ = fs::remove_dir_all(&dir);
    }
}
