//! The style surface theme colors are written to.

use parking_lot::RwLock;

use crate::theme::ThemeVariables;

/// A root element whose custom style properties can be set.
///
/// In a browser this is `document.documentElement.style`; the stylesheets of
/// the rest of the application read the properties through `var(--name)`.
pub trait StyleSurface: Send + Sync {
    /// Set the custom property `name` (including the leading `--`).
    fn set_property(&self, name: &str, value: &str);

    /// Read back a custom property previously set.
    fn property(&self, name: &str) -> Option<String>;
}

/// An in-memory [`StyleSurface`] that records properties in a
/// [`ThemeVariables`] table.
///
/// Useful for server-rendered pages, where the table is emitted as a
/// `:root` rule, and for tests.
#[derive(Debug, Default)]
pub struct InlineStyle {
    variables: RwLock<ThemeVariables>,
}

impl InlineStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the properties set so far.
    pub fn snapshot(&self) -> ThemeVariables {
        self.variables.read().clone()
    }

    /// Render the properties as a `:root { ... }` rule.
    pub fn to_css(&self) -> String {
        self.variables.read().to_css(":root")
    }
}

impl StyleSurface for InlineStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.variables.write().set(name, value);
    }

    fn property(&self, name: &str) -> Option<String> {
        self.variables.read().get(name).map(str::to_string)
    }
}
