//! Player settings and preferences
//!
//! Controls only: key bindings and look tuning. Gameplay constants are fixed
//! (see [`crate::consts`]). Read from a JSON file by the native binary.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MOUSE_SENSITIVITY;
use crate::sim::PlayerController;

/// Key identifiers for each action, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub fire: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".into(),
            back: "s".into(),
            left: "a".into(),
            right: "d".into(),
            fire: " ".into(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: KeyBindings,
    /// Radians of view rotation per pointer unit
    pub mouse_sensitivity: f32,
    /// Flip vertical look
    pub invert_y: bool,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            mouse_sensitivity: MOUSE_SENSITIVITY,
            invert_y: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults if it is missing
    /// or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        if !self.mouse_sensitivity.is_finite() || self.mouse_sensitivity <= 0.0 {
            log::warn!(
                "Ignoring mouse_sensitivity {}, using {}",
                self.mouse_sensitivity,
                MOUSE_SENSITIVITY
            );
            self.mouse_sensitivity = MOUSE_SENSITIVITY;
        }
        self
    }

    /// Controller tuning these settings describe
    pub fn controller(&self) -> PlayerController {
        PlayerController {
            sensitivity: self.mouse_sensitivity,
            invert_y: self.invert_y,
            ..PlayerController::default()
        }
    }
}
