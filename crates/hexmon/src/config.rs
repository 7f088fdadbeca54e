//! Application configuration.
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! file (or no file) yields the stock dashboard setup:
//!
//! ```toml
//! [theme]
//! storage_key = "theme"
//! default = "light"
//! settings_file = "/home/me/.config/hexmon/settings.json"
//! format = "json"
//!
//! [[theme.extra]]
//! name = "contrast"
//! colors = { primary = "#0000ff", secondary = "#000000", background = "#ffffff", surface = "#ffffff", text = "#000000", textSecondary = "#333333", border = "#000000", success = "#006600", warning = "#cc6600", error = "#cc0000" }
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use hexmon_core::logging::targets;
use hexmon_style::theme::{DEFAULT_STORAGE_KEY, DEFAULT_THEME, Theme, ThemeRegistry};
use serde::{Deserialize, Serialize};

use crate::storage::{SettingsFormat, SettingsStore};

/// Directory name used under the platform config directory.
pub const APP_DIR: &str = "hexmon";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configured themes do not form a valid registry.
    #[error("invalid theme configuration: {0}")]
    Theme(#[from] hexmon_style::Error),

    /// The storage key has no settings key segments.
    #[error("invalid theme storage key '{key}'")]
    InvalidStorageKey { key: String },

    /// No settings file is configured and the platform has no config directory.
    #[error("no settings file configured and no platform config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Theme settings.
    pub theme: ThemeConfig,
}

/// The `[theme]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key the active theme name is persisted under.
    pub storage_key: String,
    /// Theme used when nothing valid is persisted.
    pub default: String,
    /// Settings file; defaults to `<config dir>/hexmon/settings.json`.
    pub settings_file: Option<PathBuf>,
    /// Settings file format; guessed from the extension when absent.
    pub format: Option<SettingsFormat>,
    /// Themes appended after the built-in ones.
    pub extra: Vec<Theme>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default: DEFAULT_THEME.to_string(),
            settings_file: None,
            format: None,
            extra: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), extra_themes = config.theme.extra.len(), "loaded config");
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(target: targets::CONFIG, path = %path.display(), "config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The default config file location, `<config dir>/hexmon/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        app_config_dir().map(|dir| dir.join("config.toml"))
    }
}

impl ThemeConfig {
    /// Build the theme registry: built-ins, then extras, with the
    /// configured default.
    pub fn registry(&self) -> Result<ThemeRegistry, ConfigError> {
        Ok(ThemeRegistry::builder()
            .with_builtin()
            .themes(self.extra.iter().cloned())
            .default_theme(self.default.clone())
            .build()?)
    }

    /// The storage key, checked to name a settings entry.
    pub fn storage_key(&self) -> Result<&str, ConfigError> {
        if SettingsStore::is_valid_path(&self.storage_key) {
            Ok(&self.storage_key)
        } else {
            Err(ConfigError::InvalidStorageKey {
                key: self.storage_key.clone(),
            })
        }
    }

    /// The settings file to use.
    pub fn settings_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.settings_file {
            Some(path) => Ok(path.clone()),
            None => app_config_dir()
                .map(|dir| dir.join("settings.json"))
                .ok_or(ConfigError::NoConfigDir),
        }
    }

    /// The settings file format: explicit, or guessed from the path.
    pub fn settings_format(&self, path: &Path) -> SettingsFormat {
        self.format.unwrap_or_else(|| SettingsFormat::from_path(path))
    }
}

fn app_config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_DIR))
}
