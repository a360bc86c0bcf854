//! User preferences that survive restarts
//!
//! Everything the editor lets the user tune, except the curve itself, which
//! lives only for the session. Values read from disk go through
//! [`Preferences::sanitized`] so a hand-edited file can never push a
//! parameter outside the range its slider offers.

use crate::curve::mapper::{DEFAULT_TIME_SCALE, TIME_SCALE_RANGE};
use crate::curve::simplify::{DEFAULT_EPSILON, EPSILON_RANGE};
use crate::curve::WaveParams;
use crate::i18n::Language;
use crate::types::clamp_param;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Version for future migration support
    #[serde(default = "default_preferences_version")]
    pub version: u32,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Seconds spanned by the plot
    #[serde(default = "default_time_scale")]
    pub time_scale: f32,

    /// Simplification tolerance shared by the readout and the export
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,

    /// Last used wave generator settings
    #[serde(default)]
    pub wave: WaveParams,

    /// Directory of the last exported sketch
    #[serde(default)]
    pub last_export_dir: Option<PathBuf>,
}

fn default_preferences_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_time_scale() -> f32 {
    DEFAULT_TIME_SCALE
}

fn default_epsilon() -> f32 {
    DEFAULT_EPSILON
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: 1,
            language: Language::default(),
            dark_mode: true,
            time_scale: DEFAULT_TIME_SCALE,
            epsilon: DEFAULT_EPSILON,
            wave: WaveParams::default(),
            last_export_dir: None,
        }
    }
}

impl Preferences {
    /// Clamp every parameter into its editable range
    pub fn sanitized(self) -> Self {
        Self {
            time_scale: clamp_param(self.time_scale, TIME_SCALE_RANGE, DEFAULT_TIME_SCALE),
            epsilon: clamp_param(self.epsilon, EPSILON_RANGE, DEFAULT_EPSILON),
            wave: self.wave.sanitized(),
            ..self
        }
    }

    /// Remember where a sketch was just written
    pub fn remember_export(&mut self, path: &std::path::Path) {
        self.last_export_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();
        assert_eq!(prefs.time_scale, 1.0);
        assert_eq!(prefs.epsilon, 0.5);
        assert_eq!(prefs.wave.amplitude, 50.0);
        assert_eq!(prefs.wave.frequency, 1.0);
        assert_eq!(prefs.wave.density, 0.02);
        assert!(!prefs.wave.append);
        assert_eq!(prefs.language, Language::English);
        assert!(prefs.last_export_dir.is_none());
    }

    #[test]
    fn test_sanitized_clamps_out_of_range() {
        let prefs = Preferences {
            time_scale: 25.0,
            epsilon: -1.0,
            wave: WaveParams {
                amplitude: 80.0,
                frequency: 0.0,
                density: f32::NAN,
                append: true,
            },
            ..Preferences::default()
        }
        .sanitized();

        assert_eq!(prefs.time_scale, 10.0);
        assert_eq!(prefs.epsilon, 0.0);
        assert_eq!(prefs.wave.amplitude, 50.0);
        assert_eq!(prefs.wave.frequency, 0.1);
        assert_eq!(prefs.wave.density, 0.02);
        assert!(prefs.wave.append);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"time_scale": 4.0}"#).unwrap();
        assert_eq!(prefs.time_scale, 4.0);
        assert_eq!(prefs.epsilon, DEFAULT_EPSILON);
        assert!(prefs.dark_mode);
        assert_eq!(prefs.version, 1);
    }

    #[test]
    fn test_remember_export() {
        let mut prefs = Preferences::default();
        prefs.remember_export(Path::new("/tmp/sketches/motor_curve.ino"));
        assert_eq!(prefs.last_export_dir, Some(PathBuf::from("/tmp/sketches")));

        prefs.remember_export(Path::new("motor_curve.ino"));
        assert_eq!(prefs.last_export_dir, None);
    }
}
