//! Persisted browser preferences.
//!
//! Read once at startup from `--config` or the platform config directory.
//! A missing or unreadable file means defaults; command-line flags override
//! whatever is loaded.

use std::path::{Path, PathBuf};

use catalog_core::Layout;
use catalog_ingest::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

impl Settings {
    /// Load from `explicit` when given, otherwise from the default path.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()),
        }
    }

    /// Load settings from a specific path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Ignoring malformed settings file");
                Self::default()
            }
        }
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "Discover", "catalog-browser")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Language used to resolve destination text and labels.
    pub language: String,
    /// Destination document used when none is given on the command line.
    pub data_path: Option<PathBuf>,
    /// Label table file.
    pub i18n_path: Option<PathBuf>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            data_path: None,
            i18n_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub layout: Layout,
    /// Print render plans as JSON instead of text.
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(Some(&dir.path().join("absent.toml")));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.general.language, "en");
        assert_eq!(settings.display.layout, Layout::Grid);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[general]\nlanguage = \"es\"\ndata_path = \"assets/data/destinations.json\"\n\n[display]\nlayout = \"map\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.general.language, "es");
        assert_eq!(
            settings.general.data_path.as_deref(),
            Some(Path::new("assets/data/destinations.json"))
        );
        assert_eq!(settings.general.i18n_path, None);
        assert_eq!(settings.display.layout, Layout::Map);
        assert!(!settings.display.json);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[display]\nlayout = \"carousel\"\n").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn serializes_back_to_toml() {
        let text = toml::to_string(&Settings::default()).unwrap();
        assert!(text.contains("language = \"en\""));
        assert!(text.contains("layout = \"grid\""));
    }
}
