//! File persistence
//!
//! Features:
//! - JSON read/write helpers with parent directory creation
//! - File-backed high score store (a bare JSON integer)
//! - Missing or corrupt data falls back to defaults, never an error

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};

use crate::highscores::HighScoreStore;

/// High score file name inside the data directory
pub const HIGH_SCORE_FILE: &str = "highscore.json";

/// Application directory under the platform data dir
pub const APP_DIR: &str = "cloudburst";

/// Platform data directory for this game, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and parse a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Serialize to pretty JSON and write, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}

/// High score kept in a file as a single JSON integer
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/highscore.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(HIGH_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&mut self) -> u64 {
        if !self.path.exists() {
            log::info!("No high score at {:?}, starting from 0", self.path);
            return 0;
        }
        match read_json::<u64>(&self.path) {
            Ok(score) => {
                log::info!("Loaded high score {} from {:?}", score, self.path);
                score
            }
            Err(e) => {
                log::warn!("Unreadable high score file {:?}: {}. Using 0.", self.path, e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u64) {
        match write_json(&self.path, &score) {
            Ok(()) => log::info!("High score {} saved to {:?}", score, self.path),
            Err(e) => log::error!("Failed to save high score to {:?}: {}", self.path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cloudburst-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = scratch_dir("missing");
        let mut store = FileHighScoreStore::in_dir(&dir);
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileHighScoreStore::in_dir(&dir);
        store.save_high_score(31_400);
        assert_eq!(store.load_high_score(), 31_400);
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.trim(), "31400");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_plain_integer_file_is_accepted() {
        let dir = scratch_dir("plain");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(HIGH_SCORE_FILE), "4500\n").unwrap();
        let mut store = FileHighScoreStore::in_dir(&dir);
        assert_eq!(store.load_high_score(), 4500);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = scratch_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(HIGH_SCORE_FILE), "not a number").unwrap();
        let mut store = FileHighScoreStore::in_dir(&dir);
        assert_eq!(store.load_high_score(), 0);

        std::fs::write(dir.join(HIGH_SCORE_FILE), "-12").unwrap();
        assert_eq!(store.load_high_score(), 0);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
