//! Persisted application preferences.
//!
//! Only GUI preferences live here (theme, last active tool). Transforms are
//! stateless; nothing about a conversion is ever persisted.

use std::env;
use std::fs;
use std::path::PathBuf;

use dirs::config_dir;
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "toolbench";
const CONFIG_FILE_NAME: &str = "config.toml";
const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Result returned by [`load_config`], capturing the source and any
/// non-fatal issues.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: FileConfig,
    pub warnings: Vec<String>,
    pub source: ConfigSource,
}

/// Indicates where the configuration was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No persisted configuration was found or usable; defaults were
    /// synthesized.
    Default,
    /// Configuration was read from `config.toml`.
    File,
}

/// Errors that can occur when persisting configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ser(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {err}"),
            ConfigError::Ser(err) => write!(f, "TOML serialization error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Ser(value)
    }
}

/// Disk-backed configuration schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "FileConfig::schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub ui: UiPreferences,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ui: UiPreferences::default(),
        }
    }
}

impl FileConfig {
    const fn schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }
}

/// GUI preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: ThemePreference,
    /// Identifier of the tool that was active when the app last saved.
    #[serde(default)]
    pub last_tool: Option<String>,
    #[serde(default = "UiPreferences::default_activity_log_expanded")]
    pub activity_log_expanded: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            last_tool: None,
            activity_log_expanded: Self::default_activity_log_expanded(),
        }
    }
}

impl UiPreferences {
    const fn default_activity_log_expanded() -> bool {
        false
    }
}

/// Persisted theme choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

/// Directory holding `config.toml` and the `logs/` subdirectory.
///
/// `TOOLBENCH_CONFIG_DIR` overrides the platform default, which keeps tests
/// away from the real user configuration.
pub fn config_directory() -> PathBuf {
    if let Ok(dir) = env::var("TOOLBENCH_CONFIG_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_DIR_NAME))
}

pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Load configuration, degrading to defaults on any problem.
///
/// Parse failures never abort the application; they surface as warnings and
/// the defaults win.
pub fn load_config() -> ConfigLoadResult {
    let path = config_path();
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => {
            return ConfigLoadResult {
                config: FileConfig::default(),
                warnings: Vec::new(),
                source: ConfigSource::Default,
            };
        }
    };

    match toml::from_str::<FileConfig>(&contents) {
        Ok(config) => {
            let mut warnings = Vec::new();
            if config.schema_version > CURRENT_SCHEMA_VERSION {
                warnings.push(format!(
                    "config.toml has schema version {} but this build understands {}; \
                     unknown settings are ignored",
                    config.schema_version, CURRENT_SCHEMA_VERSION
                ));
            }
            ConfigLoadResult {
                config,
                warnings,
                source: ConfigSource::File,
            }
        }
        Err(err) => ConfigLoadResult {
            config: FileConfig::default(),
            warnings: vec![format!(
                "failed to parse {}: {err}; using defaults",
                path.display()
            )],
            source: ConfigSource::Default,
        },
    }
}

/// Write configuration to `config.toml`, creating the directory if needed.
pub fn save_config(config: &FileConfig) -> Result<(), ConfigError> {
    let dir = config_directory();
    fs::create_dir_all(&dir)?;
    let serialized = toml::to_string_pretty(config)?;
    fs::write(config_path(), serialized)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_current_schema() {
        let config = FileConfig::default();
        assert_eq!(config.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(config.ui.theme, ThemePreference::Dark);
        assert!(config.ui.last_tool.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme, ThemePreference::Light);
        assert_eq!(config.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(!config.ui.activity_log_expanded);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = FileConfig::default();
        config.ui.theme = ThemePreference::Light;
        config.ui.last_tool = Some("radix".to_string());

        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: FileConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.ui, config.ui);
    }
}
