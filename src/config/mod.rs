//! Configuration module for Motor Curve Studio
//!
//! This module handles the persisted user preferences: language, plot time
//! scale, simplification tolerance, wave generator settings and the last
//! export directory. The curve being edited is never persisted.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.hxyulin.motor-curve-studio/`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.motor-curve-studio/`
//! - **Windows**: `%APPDATA%\dev.hxyulin.motor-curve-studio\`
//!
//! # Files
//!
//! - `preferences.json` - Editor preferences
//!
//! # Example
//!
//! ```ignore
//! use motor_curve_studio::config::Preferences;
//!
//! let mut prefs = Preferences::load_or_default();
//! prefs.time_scale = 2.0;
//! prefs.save()?;
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{CurveError, Result};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.motor-curve-studio";

/// Preferences filename
pub const PREFERENCES_FILE: &str = "preferences.json";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        CurveError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            CurveError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the preferences file
pub fn preferences_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(PREFERENCES_FILE))
}

// ==================== Load / Save ====================

impl Preferences {
    /// Load preferences from the default location
    pub fn load() -> Result<Self> {
        let path = preferences_path().ok_or_else(|| {
            CurveError::Config("Could not determine preferences path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load preferences from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CurveError::Config(format!("Failed to read preferences: {}", e)))?;

        let prefs: Self = serde_json::from_str(&content)
            .map_err(|e| CurveError::Config(format!("Failed to parse preferences: {}", e)))?;

        Ok(prefs.sanitized())
    }

    /// Load preferences, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load preferences, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save preferences to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(PREFERENCES_FILE))
    }

    /// Save preferences to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            CurveError::Serialization(format!("Failed to serialize preferences: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(|e| CurveError::Config(format!("Failed to write preferences: {}", e)))
    }
}
