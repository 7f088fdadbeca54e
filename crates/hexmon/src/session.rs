//! A wired-up theme manager for the dashboard.

use std::sync::Arc;

use hexmon_core::logging::targets;
use hexmon_style::surface::InlineStyle;
use hexmon_style::theme::{ThemeApplied, ThemeManager};

use crate::config::AppConfig;
use crate::error::Result;
use crate::storage::SettingsStore;

/// A [`ThemeManager`] backed by a [`SettingsStore`] and rendering into an
/// [`InlineStyle`].
///
/// The session owns the pieces the manager writes to, so callers can read
/// the persisted settings and the generated `:root` rule after each change.
#[derive(Debug)]
pub struct ThemeSession {
    manager: ThemeManager,
    settings: Arc<SettingsStore>,
    style: Arc<InlineStyle>,
}

impl ThemeSession {
    /// Build a session that persists to the configured settings file.
    ///
    /// A missing settings file is not an error; it is created on the first
    /// theme change.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let path = config.theme.settings_path()?;
        let format = config.theme.settings_format(&path);
        let settings = SettingsStore::open(&path, format)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?format, "opened theme session");
        Self::with_settings(config, settings)
    }

    /// Build a session whose settings live only in memory.
    pub fn in_memory(config: &AppConfig) -> Result<Self> {
        Self::with_settings(config, SettingsStore::in_memory())
    }

    /// Build a session around an existing settings store.
    ///
    /// Fails if the storage key does not name a settings entry.
    pub fn with_settings(config: &AppConfig, settings: SettingsStore) -> Result<Self> {
        let storage_key = config.theme.storage_key()?.to_string();
        let registry = Arc::new(config.theme.registry()?);
        let settings = Arc::new(settings);
        let style = Arc::new(InlineStyle::new());
        let manager = ThemeManager::new(registry, settings.clone(), style.clone())
            .with_storage_key(storage_key);

        Ok(Self {
            manager,
            settings,
            style,
        })
    }

    /// Restore the persisted theme, or apply the default.
    pub fn start(&self) -> Result<ThemeApplied> {
        Ok(self.manager.init_theme()?)
    }

    /// The theme manager.
    pub fn manager(&self) -> &ThemeManager {
        &self.manager
    }

    /// The settings store the theme name is persisted in.
    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.settings
    }

    /// The style surface the theme colors are written to.
    pub fn style(&self) -> &Arc<InlineStyle> {
        &self.style
    }

    /// The active theme colors as a `:root` rule.
    pub fn css(&self) -> String {
        self.style.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_applies_default() {
        let session = ThemeSession::in_memory(&AppConfig::default()).unwrap();

        let applied = session.start().unwrap();

        assert_eq!(applied.name(), "light");
        assert!(!applied.is_fallback());
        assert!(session.css().contains("--color-primary: #1a237e;"));
        assert_eq!(session.settings().get::<String>("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_custom_storage_key() {
        let mut config = AppConfig::default();
        config.theme.storage_key = "ui.theme".to_string();
        let session = ThemeSession::in_memory(&config).unwrap();

        session.start().unwrap();
        session.manager().set_theme("blue").unwrap();

        assert_eq!(session.settings().get::<String>("ui.theme").as_deref(), Some("blue"));
        assert!(!session.settings().contains("theme"));
    }

    #[test]
    fn test_stale_setting_falls_back() {
        let settings = SettingsStore::in_memory();
        settings.set("theme", "sepia").unwrap();
        let session = ThemeSession::with_settings(&AppConfig::default(), settings).unwrap();

        let applied = session.start().unwrap();

        assert!(applied.is_fallback());
        assert_eq!(session.manager().current_name(), "light");
        assert_eq!(session.settings().get::<String>("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_empty_storage_key_fails_to_build() {
        let mut config = AppConfig::default();
        config.theme.storage_key = String::new();

        let err = ThemeSession::in_memory(&config).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Config(crate::config::ConfigError::InvalidStorageKey { .. })
        ));
    }

    #[test]
    fn test_invalid_default_fails_to_build() {
        let mut config = AppConfig::default();
        config.theme.default = "sepia".to_string();

        let err = ThemeSession::in_memory(&config).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
