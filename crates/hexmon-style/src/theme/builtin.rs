//! Themes and the built-in theme set.

use serde::{Deserialize, Serialize};

use super::{ColorPalette, ColorRole, HexColor, ThemeVariables};

/// Name of the theme used when no other choice applies.
pub const DEFAULT_THEME: &str = "light";

/// A named theme: a palette plus the custom properties derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeDefinition", into = "ThemeDefinition")]
pub struct Theme {
    name: String,
    palette: ColorPalette,
    variables: ThemeVariables,
}

impl Theme {
    /// Create a theme from a name and palette.
    pub fn new(name: impl Into<String>, palette: ColorPalette) -> Self {
        let variables = ThemeVariables::from_palette(&palette);
        Self {
            name: name.into(),
            palette,
            variables,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self::new("light", ColorPalette::light())
    }

    /// The dark theme.
    pub fn dark() -> Self {
        Self::new("dark", ColorPalette::dark())
    }

    /// The blue theme.
    pub fn blue() -> Self {
        Self::new("blue", ColorPalette::blue())
    }

    /// The built-in themes, in enumeration order.
    pub fn builtin() -> Vec<Theme> {
        vec![Self::light(), Self::dark(), Self::blue()]
    }

    /// The theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color palette.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// The `--color-<role>` custom properties.
    pub fn variables(&self) -> &ThemeVariables {
        &self.variables
    }

    /// Get the color for a role.
    pub fn color(&self, role: ColorRole) -> &HexColor {
        self.palette.get(role)
    }

    /// Iterate over `(property name, value)` pairs in role order.
    pub fn properties(&self) -> impl Iterator<Item = (String, &HexColor)> + '_ {
        self.palette
            .iter()
            .map(|(role, color)| (role.property_name(), color))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Serialized form of a theme: `{ name, colors: { <role>: "<hex>" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub colors: ColorPalette,
}

impl From<ThemeDefinition> for Theme {
    fn from(def: ThemeDefinition) -> Self {
        Theme::new(def.name, def.colors)
    }
}

impl From<Theme> for ThemeDefinition {
    fn from(theme: Theme) -> Self {
        Self {
            name: theme.name,
            colors: theme.palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_names() {
        let names: Vec<_> = Theme::builtin().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["light", "dark", "blue"]);
        assert_eq!(Theme::default().name(), DEFAULT_THEME);
    }

    #[test]
    fn test_variables_follow_palette() {
        let theme = Theme::blue();

        assert_eq!(theme.variables().get("--color-primary"), Some("#1565c0"));
        assert_eq!(theme.color(ColorRole::Surface).as_str(), "#ffffff");
    }

    #[test]
    fn test_properties_cover_every_role() {
        let theme = Theme::dark();
        let props: Vec<_> = theme.properties().collect();

        assert_eq!(props.len(), ColorRole::ALL.len());
        assert_eq!(props[0].0, "--color-primary");
        assert_eq!(props[0].1.as_str(), "#534bae");
        assert_eq!(props[5].0, "--color-textSecondary");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Theme::light()).unwrap();

        assert_eq!(json["name"], "light");
        assert_eq!(json["colors"]["primary"], "#1a237e");
        assert_eq!(json["colors"]["textSecondary"], "#757575");
        assert!(json.get("variables").is_none());

        let back: Theme = serde_json::from_value(json).unwrap();
        assert_eq!(back, Theme::light());
    }

    #[test]
    fn test_deserialized_theme_derives_variables() {
        let toml_src = r##"
            name = "sepia"
            [colors]
            primary = "#704214"
            secondary = "#a0522d"
            background = "#f4ecd8"
            surface = "#fbf5e6"
            text = "#3b2f2f"
            textSecondary = "#6b5b4b"
            border = "#d8c8a8"
            success = "#5b8a3a"
            warning = "#c98a1b"
            error = "#a33a2a"
        "##;
        let theme: Theme = toml::from_str(toml_src).unwrap();

        assert_eq!(theme.name(), "sepia");
        assert_eq!(theme.variables().get("--color-background"), Some("#f4ecd8"));
    }
}
