//! Generator settings
//!
//! Loads optional overrides from config/placeholder_assets.toml. Only where
//! the assets land and how chatty the log is can change; the images
//! themselves are fixed.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, SETTINGS_FILE, crate_root};
use crate::error::{GenerationError, GenerationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Where the assets are written. Relative paths are taken from the crate root.
    pub output_dir: Option<PathBuf>,
    /// env_logger filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Outcome of a settings load, logged by the caller once a logger is running
#[derive(Debug)]
pub enum SettingsSource {
    File(PathBuf),
    Missing(PathBuf),
    Invalid(GenerationError),
}

impl SettingsSource {
    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => info!("Loaded settings from {}", path.display()),
            SettingsSource::Missing(path) => {
                info!("No settings file at {}, using defaults", path.display())
            }
            SettingsSource::Invalid(e) => warn!("{}, using defaults", e),
        }
    }
}

impl GeneratorSettings {
    /// Load settings from the default file, or return defaults
    pub fn load() -> (Self, SettingsSource) {
        Self::load_from(&crate_root().join(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unusable
    pub fn load_from(path: &Path) -> (Self, SettingsSource) {
        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(path.to_path_buf()));
        }

        match Self::try_load_from(path) {
            Ok(settings) => (settings, SettingsSource::File(path.to_path_buf())),
            Err(e) => (Self::default(), SettingsSource::Invalid(e)),
        }
    }

    /// Strict variant of [`load_from`](Self::load_from)
    pub fn try_load_from(path: &Path) -> GenerationResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|source| GenerationError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply the output directory override from the environment, if set
    pub fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            if !dir.trim().is_empty() {
                info!("{} overrides output directory: {}", OUTPUT_DIR_ENV, dir);
                self.output_dir = Some(PathBuf::from(dir));
            }
        }
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => crate_root().join(dir),
            None => crate_root().join(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Settings that write into `dir`
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.log_filter, "info");
        assert_eq!(
            settings.resolve_output_dir(),
            crate_root().join("public").join("assets")
        );
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = GeneratorSettings::parse("log_filter = \"debug\"\n").unwrap();
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.output_dir, None);

        let empty = GeneratorSettings::parse("").unwrap();
        assert_eq!(empty, GeneratorSettings::default());
    }

    #[test]
    fn test_relative_output_dir_is_under_crate_root() {
        let settings = GeneratorSettings::parse("output_dir = \"build/assets\"").unwrap();
        assert_eq!(
            settings.resolve_output_dir(),
            crate_root().join("build/assets")
        );
    }

    #[test]
    fn test_absolute_output_dir_is_kept() {
        let dir = std::env::temp_dir().join("placeholder-assets");
        let settings = GeneratorSettings::with_output_dir(&dir);
        assert_eq!(settings.resolve_output_dir(), dir);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "output_dir = [not toml").unwrap();

        assert!(matches!(
            GeneratorSettings::try_load_from(&path),
            Err(GenerationError::Settings { .. })
        ));
        let (settings, source) = GeneratorSettings::load_from(&path);
        assert_eq!(settings, GeneratorSettings::default());
        assert!(matches!(
            source,
            SettingsSource::Invalid(GenerationError::Settings { .. })
        ));
    }

    #[test]
    fn test_loads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "output_dir = \"out\"\nlog_filter = \"warn\"\n").unwrap();

        let (settings, source) = GeneratorSettings::load_from(&path);
        assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
        assert_eq!(settings.log_filter, "warn");
        assert!(matches!(source, SettingsSource::File(p) if p == path));
    }

    #[test]
    fn test_load_bundled_settings() {
        let (settings, source) = GeneratorSettings::load();
        assert_eq!(settings.log_filter, "info");
        assert!(matches!(source, SettingsSource::File(path) if path.ends_with(SETTINGS_FILE)));
        assert_eq!(
            settings.resolve_output_dir(),
            crate_root().join(DEFAULT_OUTPUT_DIR)
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (settings, source) = GeneratorSettings::load_from(&path);
        assert_eq!(settings, GeneratorSettings::default());
        assert!(matches!(source, SettingsSource::Missing(p) if p == path));
    }
}
