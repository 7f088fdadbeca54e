//! Active theme tracking and application.

use std::fmt;
use std::sync::Arc;

use hexmon_core::Signal;
use hexmon_core::logging::targets;
use parking_lot::{Mutex, MutexGuard, RwLock};

use super::{Theme, ThemeRegistry};
use crate::store::ThemeStore;
use crate::surface::StyleSurface;
use crate::Result;

/// Storage key the active theme name is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Which theme a request ended up applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The requested theme was registered and applied.
    Requested,
    /// The requested name was not registered; the default was applied.
    Fallback {
        /// The name that was asked for.
        requested: String,
    },
}

/// The outcome of a successful theme change.
#[derive(Debug, Clone)]
pub struct ThemeApplied {
    /// The theme now active.
    pub theme: Arc<Theme>,
    /// Whether it is the requested theme or the fallback.
    pub resolution: Resolution,
}

impl ThemeApplied {
    /// Name of the theme now active.
    pub fn name(&self) -> &str {
        self.theme.name()
    }

    /// Returns true if the default was substituted for an unknown name.
    pub fn is_fallback(&self) -> bool {
        matches!(self.resolution, Resolution::Fallback { .. })
    }
}

/// Owns the active theme and applies theme changes.
///
/// Every change runs the same steps, in order:
///
/// 1. the active theme is updated;
/// 2. each `--color-<role>` property is written to the [`StyleSurface`];
/// 3. the theme name is written to the [`ThemeStore`];
/// 4. [`theme_changed`](Self::theme_changed) is emitted with the theme.
///
/// Steps 1 to 3 run under one lock, so concurrent changes leave the active
/// theme, the surface and the store on the same theme. Observers are called
/// after the lock is released and may change the theme themselves.
///
/// The active theme is always a member of the registry. Until
/// [`init_theme`](Self::init_theme) runs it is the registry default, and
/// nothing has been applied yet.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hexmon_style::prelude::*;
///
/// let store = Arc::new(MemoryStore::new());
/// let style = Arc::new(InlineStyle::new());
/// let manager = ThemeManager::new(
///     Arc::new(ThemeRegistry::builtin()),
///     store.clone(),
///     style.clone(),
/// );
///
/// manager.init_theme()?;
/// let applied = manager.toggle_theme()?;
///
/// assert_eq!(applied.name(), "dark");
/// assert_eq!(style.property("--color-background").as_deref(), Some("#121212"));
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// # Ok::<(), hexmon_style::Error>(())
/// ```
pub struct ThemeManager {
    registry: Arc<ThemeRegistry>,
    store: Arc<dyn ThemeStore>,
    surface: Arc<dyn StyleSurface>,
    storage_key: String,
    current: RwLock<Arc<Theme>>,
    apply_lock: Mutex<()>,
    theme_changed: Signal<Arc<Theme>>,
}

impl ThemeManager {
    /// Create a manager. The active theme starts as the registry default.
    pub fn new(
        registry: Arc<ThemeRegistry>,
        store: Arc<dyn ThemeStore>,
        surface: Arc<dyn StyleSurface>,
    ) -> Self {
        let current = registry.default_theme().clone();
        Self {
            registry,
            store,
            surface,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            current: RwLock::new(current),
            apply_lock: Mutex::new(()),
            theme_changed: Signal::new(),
        }
    }

    /// Persist the theme name under `key` instead of `"theme"`.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// The registry this manager switches between.
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// The storage key the theme name is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Emitted after every successful theme change with the new theme.
    pub fn theme_changed(&self) -> &Signal<Arc<Theme>> {
        &self.theme_changed
    }

    /// The active theme.
    pub fn current_theme(&self) -> Arc<Theme> {
        self.current.read().clone()
    }

    /// Name of the active theme.
    pub fn current_name(&self) -> String {
        self.current.read().name().to_string()
    }

    /// Apply the theme called `name`.
    ///
    /// An unregistered name logs a warning and applies the registry default
    /// instead; the returned [`Resolution`] tells which happened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the name cannot
    /// be persisted. The active theme and style properties have already been
    /// updated at that point; observers are not notified.
    pub fn set_theme(&self, name: &str) -> Result<ThemeApplied> {
        let (theme, resolution) = self.resolve(name);
        self.apply(theme, resolution)
    }

    /// Apply the persisted theme, or the default when none is stored.
    ///
    /// Call once at startup.
    ///
    /// # Errors
    ///
    /// Propagates storage read and write failures.
    pub fn init_theme(&self) -> Result<ThemeApplied> {
        let stored = self.store.load(&self.storage_key)?;
        match stored.filter(|name| !name.is_empty()) {
            Some(name) => {
                tracing::debug!(target: targets::THEME, theme = %name, "restoring persisted theme");
                self.set_theme(&name)
            }
            None => {
                tracing::debug!(target: targets::THEME, "no persisted theme, using default");
                let theme = self.registry.default_theme().clone();
                self.apply(theme, Resolution::Requested)
            }
        }
    }

    /// Apply the theme after the active one, wrapping after the last.
    ///
    /// # Errors
    ///
    /// Same as [`set_theme`](Self::set_theme).
    pub fn toggle_theme(&self) -> Result<ThemeApplied> {
        let guard = self.apply_lock.lock();
        let next = self.registry.next_after(self.current.read().name()).clone();
        self.apply_locked(guard, next, Resolution::Requested)
    }

    fn resolve(&self, name: &str) -> (Arc<Theme>, Resolution) {
        match self.registry.get(name) {
            Some(theme) => (theme.clone(), Resolution::Requested),
            None => {
                let fallback = self.registry.default_theme().clone();
                tracing::warn!(
                    target: targets::THEME,
                    requested = name,
                    fallback = fallback.name(),
                    "theme is not registered, using default"
                );
                (
                    fallback,
                    Resolution::Fallback {
                        requested: name.to_string(),
                    },
                )
            }
        }
    }

    fn apply(&self, theme: Arc<Theme>, resolution: Resolution) -> Result<ThemeApplied> {
        let guard = self.apply_lock.lock();
        self.apply_locked(guard, theme, resolution)
    }

    fn apply_locked(
        &self,
        guard: MutexGuard<'_, ()>,
        theme: Arc<Theme>,
        resolution: Resolution,
    ) -> Result<ThemeApplied> {
        let _span =
            tracing::debug_span!(target: targets::THEME, "apply_theme", theme = theme.name())
                .entered();

        *self.current.write() = theme.clone();

        for (property, color) in theme.properties() {
            tracing::trace!(target: targets::THEME, %property, value = %color, "set property");
            self.surface.set_property(&property, color.as_str());
        }

        if let Err(err) = self.store.store(&self.storage_key, theme.name()) {
            tracing::error!(target: targets::THEME, error = %err, "failed to persist theme");
            return Err(err);
        }
        drop(guard);

        let observers = self.theme_changed.emit(theme.clone());
        tracing::debug!(target: targets::THEME, observers, "theme applied");

        Ok(ThemeApplied { theme, resolution })
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current_name())
            .field("storage_key", &self.storage_key)
            .field("themes", &self.registry.names().collect::<Vec<_>>())
            .field("theme_changed", &self.theme_changed)
            .finish()
    }
}
