//! World and gameplay settings
//!
//! Loaded from a JSON file by the runner. Every field has a default so
//! partial files are accepted.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How a human player's input resolves when both keys on an axis are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OppositeKeys {
    /// Left beats right, up beats down
    #[default]
    FirstWins,
    /// Opposite keys cancel to zero on that axis
    Cancel,
}

impl OppositeKeys {
    pub fn as_str(&self) -> &'static str {
        match self {
            OppositeKeys::FirstWins => "FirstWins",
            OppositeKeys::Cancel => "Cancel",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "firstwins" | "first" => Some(OppositeKeys::FirstWins),
            "cancel" => Some(OppositeKeys::Cancel),
            _ => None,
        }
    }
}

/// Errors raised while reading or writing settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A value parsed but is out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings i/o error: {err}"),
            Self::Json(err) => write!(f, "settings parse error: {err}"),
            Self::Invalid(what) => write!(f, "invalid setting: {what}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// World width in units
    pub world_width: f32,
    /// World height in units
    pub world_height: f32,
    /// Seed for the AI tie-break RNG
    pub seed: u64,

    // === Movement ===
    /// Player movement per tick
    pub player_speed: f32,
    /// Opposite-key resolution for human players
    pub opposite_keys: OppositeKeys,

    // === AI ===
    /// Threat radius is `world_width / threat_radius_divisor`
    pub threat_radius_divisor: f32,

    // === Runner ===
    /// Ticks the headless demo runs for
    pub demo_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            seed: DEFAULT_SEED,

            player_speed: PLAYER_SPEED,
            opposite_keys: OppositeKeys::FirstWins,

            threat_radius_divisor: THREAT_RADIUS_DIVISOR,

            demo_ticks: DEMO_TICKS,
        }
    }
}

impl Settings {
    /// Default settings with a different seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Radius within which enemies count as threats
    pub fn threat_radius(&self) -> f32 {
        self.world_width / self.threat_radius_divisor
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.world_width > 0.0) || !(self.world_height > 0.0) {
            return Err(SettingsError::Invalid("world size must be positive"));
        }
        if !(self.player_speed > 0.0) {
            return Err(SettingsError::Invalid("player_speed must be positive"));
        }
        if !(self.threat_radius_divisor > 0.0) {
            return Err(SettingsError::Invalid("threat_radius_divisor must be positive"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings ({err})");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threat_radius() {
        let settings = Settings::default();
        assert!((settings.threat_radius() - WORLD_WIDTH / 2.5).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "opposite_keys": "Cancel" }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.opposite_keys, OppositeKeys::Cancel);
        assert_eq!(settings.world_width, WORLD_WIDTH);
        assert_eq!(settings.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "player_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "world_width": -10.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().starts_with("settings parse error"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("brad_dash_missing_settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("brad_dash_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: 42,
            opposite_keys: OppositeKeys::Cancel,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_opposite_keys_from_str() {
        assert_eq!(OppositeKeys::from_str("cancel"), Some(OppositeKeys::Cancel));
        assert_eq!(OppositeKeys::from_str("First"), Some(OppositeKeys::FirstWins));
        assert_eq!(OppositeKeys::from_str("sideways"), None);
        assert_eq!(OppositeKeys::Cancel.as_str(), "Cancel");
    }
}
