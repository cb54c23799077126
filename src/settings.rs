//! Game settings
//!
//! Stored as JSON. Missing fields take their defaults, so a settings file
//! only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TRANSITION_DELAY_MS;
use crate::sim::{COLORS, Color, SHAPES, ShapeKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause between a correct pick and the next round
    pub transition_delay_ms: u32,
    /// Fixed seed for reproducible sessions (random when unset)
    pub seed: Option<u64>,
    /// Colors the puzzle may use (at least 4 distinct)
    pub colors: Vec<Color>,
    /// Shapes the puzzle may use (at least 4 distinct)
    pub shapes: Vec<ShapeKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_delay_ms: TRANSITION_DELAY_MS,
            seed: None,
            colors: COLORS.to_vec(),
            shapes: SHAPES.to_vec(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.transition_delay_ms, 2000);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.colors.len(), 5);
        assert_eq!(settings.shapes.len(), 5);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "seed": 7, "colors": ["RED", "BLUE", "GREEN", "YELLOW"] }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.colors, vec![Color::Red, Color::Blue, Color::Green, Color::Yellow]);
        assert_eq!(settings.shapes, SHAPES.to_vec());
        assert_eq!(settings.transition_delay_ms, TRANSITION_DELAY_MS);
    }

    #[test]
    fn test_unknown_color_is_error() {
        assert!(Settings::from_json(r#"{ "colors": ["PURPLE"] }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(99),
            transition_delay_ms: 500,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("shape_spy_missing_settings_file.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("shape_spy_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(3),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("shape_spy_bad_settings_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }
}
