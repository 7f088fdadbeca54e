//! The immutable set of available themes.

use std::sync::Arc;

use super::{DEFAULT_THEME, Theme};
use crate::{Error, Result};

/// An ordered, immutable mapping from theme name to [`Theme`].
///
/// The registry always holds at least one theme and a default theme name
/// that is one of its keys. Enumeration order is registration order and
/// drives [`next_after`](Self::next_after).
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Arc<Theme>>,
    default_index: usize,
}

impl ThemeRegistry {
    /// The built-in registry: `light`, `dark`, `blue`, defaulting to `light`.
    pub fn builtin() -> Self {
        Self {
            themes: Theme::builtin().into_iter().map(Arc::new).collect(),
            default_index: 0,
        }
    }

    /// Start building a custom registry.
    pub fn builder() -> ThemeRegistryBuilder {
        ThemeRegistryBuilder::default()
    }

    /// Look up a theme by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<Theme>> {
        self.themes.iter().find(|t| t.name() == name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Position of `name` in enumeration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.name() == name)
    }

    /// The default theme.
    pub fn default_theme(&self) -> &Arc<Theme> {
        &self.themes[self.default_index]
    }

    /// The default theme name.
    pub fn default_name(&self) -> &str {
        self.default_theme().name()
    }

    /// The theme following `name` in enumeration order, wrapping after the
    /// last one. An unregistered `name` yields the first theme.
    pub fn next_after(&self, name: &str) -> &Arc<Theme> {
        let next = match self.index_of(name) {
            Some(index) => (index + 1) % self.themes.len(),
            None => 0,
        };
        &self.themes[next]
    }

    /// Theme names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name())
    }

    /// Themes in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.iter()
    }

    /// Number of registered themes (always at least one).
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for [`ThemeRegistry`].
#[derive(Debug, Default)]
pub struct ThemeRegistryBuilder {
    themes: Vec<Theme>,
    default: Option<String>,
}

impl ThemeRegistryBuilder {
    /// Append a theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    /// Append several themes.
    pub fn themes(mut self, themes: impl IntoIterator<Item = Theme>) -> Self {
        self.themes.extend(themes);
        self
    }

    /// Append the built-in themes.
    pub fn with_builtin(self) -> Self {
        self.themes(Theme::builtin())
    }

    /// Choose the default theme.
    ///
    /// Without this, the default is `light` when registered, otherwise the
    /// first theme.
    pub fn default_theme(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Validate and build the registry.
    pub fn build(self) -> Result<ThemeRegistry> {
        if self.themes.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        for (i, theme) in self.themes.iter().enumerate() {
            if self.themes[..i].iter().any(|t| t.name() == theme.name()) {
                return Err(Error::DuplicateTheme {
                    name: theme.name().to_string(),
                });
            }
        }

        let default_index = match &self.default {
            Some(name) => self
                .themes
                .iter()
                .position(|t| t.name() == name)
                .ok_or_else(|| Error::UnknownDefault { name: name.clone() })?,
            None => self
                .themes
                .iter()
                .position(|t| t.name() == DEFAULT_THEME)
                .unwrap_or(0),
        };

        Ok(ThemeRegistry {
            themes: self.themes.into_iter().map(Arc::new).collect(),
            default_index,
        })
    }
}
