//! Report settings
//!
//! Loaded from YAML, every field optional:
//!
//! ```yaml
//! accidentals: ascii        # unicode (default) | ascii
//! degree_labels: integer    # roman (default) | integer
//! show_harmonies: true
//! show_diatonic_chords: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// How sharps and flats are printed in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalStyle {
    /// ♯ and ♭
    #[default]
    Unicode,
    /// # and b
    Ascii,
}

impl AccidentalStyle {
    pub fn apply(self, text: &str) -> String {
        match self {
            AccidentalStyle::Unicode => text.to_string(),
            AccidentalStyle::Ascii => text.replace('♯', "#").replace('♭', "b"),
        }
    }
}

/// How scale degrees are labelled in chord listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLabel {
    /// Imaj7, ii7, ... viiø7
    #[default]
    Roman,
    /// 1, 2, ... 7
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub accidentals: AccidentalStyle,
    pub degree_labels: DegreeLabel,
    pub show_harmonies: bool,
    pub show_diatonic_chords: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            accidentals: AccidentalStyle::Unicode,
            degree_labels: DegreeLabel::Roman,
            show_harmonies: true,
            show_diatonic_chords: true,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        // an empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_yaml(&content)?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}
