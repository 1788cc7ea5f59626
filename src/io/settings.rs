//! Persisted user settings, stored in the OS config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::PanSettings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewer settings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Day column width in pixels.
    pub column_width: f32,
    pub pan_multiplier: f32,
    /// Pixels of movement before a press becomes a drag.
    pub drag_threshold: f32,
    pub click_suppress_ms: u64,
    /// How often the feed file is checked for changes.
    pub feed_poll_secs: u64,
    /// Feed opened last time, reopened on start.
    pub last_feed: Option<PathBuf>,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            column_width: 56.0,
            pan_multiplier: 1.5,
            drag_threshold: 5.0,
            click_suppress_ms: 100,
            feed_poll_secs: 2,
            last_feed: None,
        }
    }
}

impl TimelineSettings {
    pub fn pan_settings(&self) -> PanSettings {
        PanSettings {
            multiplier: self.pan_multiplier,
            threshold: self.drag_threshold,
            click_suppress: Duration::from_millis(self.click_suppress_ms),
        }
    }

    pub fn feed_poll_interval(&self) -> Duration {
        Duration::from_secs(self.feed_poll_secs.max(1))
    }

    /// Read settings; an unreadable file yields the defaults.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Config directory for the viewer, falling back to the working directory.
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "ProjectTimeline")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}
