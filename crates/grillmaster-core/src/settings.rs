//! User settings snapshot.
//!
//! Settings are consumed by the presentation layer; the timer engine
//! itself never reads them. They live in their own JSON file next to
//! the timers snapshot and use the same full-replace write discipline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError};
use crate::storage::data_dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    C,
    F,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_unit")]
    pub temperature_unit: TemperatureUnit,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub favorite_presets: Vec<String>,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
}

fn default_unit() -> TemperatureUnit {
    TemperatureUnit::F
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::F,
            notifications_enabled: true,
            favorite_presets: Vec::new(),
            sound_enabled: true,
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("settings.json"))
    }

    /// Load from the data directory. Missing or unreadable settings
    /// fall back to defaults.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<(), StorageError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path, full-replace.
    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get a settings value as a string by snapshot key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "temperatureUnit" => Some(match self.temperature_unit {
                TemperatureUnit::C => "C".to_string(),
                TemperatureUnit::F => "F".to_string(),
            }),
            "notificationsEnabled" => Some(self.notifications_enabled.to_string()),
            "favoritePresets" => serde_json::to_string(&self.favorite_presets).ok(),
            "soundEnabled" => Some(self.sound_enabled.to_string()),
            _ => None,
        }
    }

    /// Set a settings value by snapshot key.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not
    /// parse for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        match key {
            "temperatureUnit" => {
                self.temperature_unit = match value {
                    "C" => TemperatureUnit::C,
                    "F" => TemperatureUnit::F,
                    other => {
                        return Err(ValidationError::InvalidValue {
                            key: key.to_string(),
                            message: format!("expected C or F, got '{other}'"),
                        })
                    }
                };
            }
            "notificationsEnabled" => {
                self.notifications_enabled = parse_bool(key, value)?;
            }
            "favoritePresets" => {
                self.favorite_presets =
                    serde_json::from_str(value).map_err(|e| ValidationError::InvalidValue {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
            }
            "soundEnabled" => {
                self.sound_enabled = parse_bool(key, value)?;
            }
            other => return Err(ValidationError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Convert `temp` from `from_unit` into the configured display
    /// unit, rounded to the nearest degree.
    pub fn convert_temperature(&self, temp: f64, from_unit: TemperatureUnit) -> f64 {
        if self.temperature_unit == from_unit {
            return temp;
        }
        match from_unit {
            TemperatureUnit::F => ((temp - 32.0) * 5.0 / 9.0).round(),
            TemperatureUnit::C => (temp * 9.0 / 5.0 + 32.0).round(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidValue {
        key: key.to_string(),
        message: format!("expected true or false, got '{value}'"),
    })
}
