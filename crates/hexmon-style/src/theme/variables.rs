//! CSS variables (custom properties) support.

use std::fmt::Write as _;

use super::ColorPalette;

/// An ordered table of CSS custom properties.
///
/// Names are stored without the leading `--`; lookups accept either form.
/// Insertion order is preserved, and setting an existing name replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVariables {
    variables: Vec<(String, String)>,
}

impl ThemeVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the `--color-<role>` variables for a palette.
    pub fn from_palette(palette: &ColorPalette) -> Self {
        let mut vars = Self::new();
        for (role, color) in palette.iter() {
            vars.set(role.property_name(), color.as_str());
        }
        vars
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let name = name.strip_prefix("--").map(str::to_string).unwrap_or(name);
        let value = value.into();

        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.variables.push((name, value)),
        }
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over `(name, value)` pairs, names without the leading `--`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Clear all variables.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Render the variables as a CSS rule for `selector`.
    ///
    /// ```
    /// use hexmon_style::theme::ThemeVariables;
    ///
    /// let mut vars = ThemeVariables::new();
    /// vars.set("--color-text", "#212121");
    /// assert_eq!(vars.to_css(":root"), ":root {\n  --color-text: #212121;\n}\n");
    /// ```
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}
