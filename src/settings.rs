//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::persistence::{default_data_dir, read_json, write_json};

/// Settings file name inside the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no blinking sprites)
    pub reduced_motion: bool,

    // === HUD ===
    /// Draw the controls legend
    pub show_controls: bool,

    /// Override for where settings and the high score live
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            reduced_motion: false,
            show_controls: true,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Directory holding settings and the high score
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Whether blinking effects may animate
    pub fn effective_blink(&self) -> bool {
        !self.reduced_motion
    }

    /// Load from `<dir>/settings.json`, falling back to defaults
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match read_json::<Settings>(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                settings.clamped()
            }
            Err(e) => {
                log::warn!("Unreadable settings {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Load from the platform data directory
    pub fn load() -> Self {
        Self::load_from(&default_data_dir())
    }

    /// Write to `<data_dir>/settings.json`
    pub fn save(&self) -> io::Result<()> {
        let path = self.data_dir().join(SETTINGS_FILE);
        write_json(&path, self)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Volumes forced into 0.0 - 1.0
    fn clamped(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}
