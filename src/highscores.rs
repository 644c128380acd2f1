//! Persisted best-score scalar
//!
//! A single monotonic integer under a fixed key, stored as JSON in the
//! platform data directory. Load failures fall back to a fresh record;
//! save failures are logged and swallowed - the game never dies over a
//! scoreboard.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Best score across all runs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub best: u32,
}

impl HighScores {
    /// Fixed storage key; doubles as the on-disk file stem
    const STORAGE_KEY: &'static str = "mood_dash_highscore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in a finished run's score. Returns true when it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("mood-dash").join(format!("{}.json", Self::STORAGE_KEY)))
    }

    /// Load from the default location, or start fresh.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no data directory available, high score won't persist");
                Self::new()
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded high score: {}", scores.best);
                    scores
                }
                Err(e) => {
                    log::warn!("high score file corrupt ({e}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save to the default location, best effort.
    pub fn save(&self) {
        if let Some(path) = Self::default_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &std::path::Path) {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string(self).map_err(std::io::Error::other)?;
            std::fs::write(path, json)
        };
        match write() {
            Ok(()) => log::info!("high score saved ({})", self.best),
            Err(e) => log::warn!("failed to save high score: {e}"),
        }
    }
}
