//! Color palette definitions.

use serde::{Deserialize, Serialize};

use super::{ColorRole, HexColor};

/// A color palette for theming: one color per [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorPalette {
    /// Main brand color.
    pub primary: HexColor,
    /// Accent color.
    pub secondary: HexColor,
    /// Page background.
    pub background: HexColor,
    /// Card and panel background.
    pub surface: HexColor,
    /// Primary text color.
    pub text: HexColor,
    /// Muted text color.
    pub text_secondary: HexColor,
    /// Border and divider color.
    pub border: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
}

impl ColorPalette {
    /// The default light palette.
    pub fn light() -> Self {
        Self {
            // Indigo on white
            primary: HexColor::from_static("#1a237e"),
            secondary: HexColor::from_static("#00bcd4"),
            background: HexColor::from_static("#ffffff"),
            surface: HexColor::from_static("#f5f5f5"),
            text: HexColor::from_static("#212121"),
            text_secondary: HexColor::from_static("#757575"),
            border: HexColor::from_static("#e0e0e0"),
            success: HexColor::from_static("#4caf50"),
            warning: HexColor::from_static("#ff9800"),
            error: HexColor::from_static("#f44336"),
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            primary: HexColor::from_static("#534bae"),
            secondary: HexColor::from_static("#62efff"),
            background: HexColor::from_static("#121212"),
            surface: HexColor::from_static("#1e1e1e"),
            text: HexColor::from_static("#ffffff"),
            text_secondary: HexColor::from_static("#b0b0b0"),
            border: HexColor::from_static("#424242"),
            success: HexColor::from_static("#66bb6a"),
            warning: HexColor::from_static("#ffb74d"),
            error: HexColor::from_static("#ef5350"),
        }
    }

    /// The blue palette.
    pub fn blue() -> Self {
        Self {
            primary: HexColor::from_static("#1565c0"),
            secondary: HexColor::from_static("#29b6f6"),
            background: HexColor::from_static("#f5f7fa"),
            surface: HexColor::from_static("#ffffff"),
            text: HexColor::from_static("#263238"),
            text_secondary: HexColor::from_static("#607d8b"),
            border: HexColor::from_static("#cfd8dc"),
            success: HexColor::from_static("#43a047"),
            warning: HexColor::from_static("#ffa726"),
            error: HexColor::from_static("#e53935"),
        }
    }

    /// Get the color for a role.
    pub fn get(&self, role: ColorRole) -> &HexColor {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
            ColorRole::Text => &self.text,
            ColorRole::TextSecondary => &self.text_secondary,
            ColorRole::Border => &self.border,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
        }
    }

    /// Replace the color for a role.
    pub fn set(&mut self, role: ColorRole, color: HexColor) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
            ColorRole::Text => &mut self.text,
            ColorRole::TextSecondary => &mut self.text_secondary,
            ColorRole::Border => &mut self.border,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
        };
        *slot = color;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, role: ColorRole, color: HexColor) -> Self {
        self.set(role, color);
        self
    }

    /// Iterate over `(role, color)` pairs in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &HexColor)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_literals_are_valid() {
        for palette in [ColorPalette::light(), ColorPalette::dark(), ColorPalette::blue()] {
            for (role, color) in palette.iter() {
                assert!(
                    HexColor::parse(color.as_str()).is_ok(),
                    "{role} has invalid color {color}"
                );
            }
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let palette = ColorPalette::dark();
        assert_eq!(palette.get(ColorRole::Background).as_str(), "#121212");
        assert_eq!(palette.get(ColorRole::TextSecondary).as_str(), "#b0b0b0");
        assert_eq!(palette.get(ColorRole::Error).as_str(), "#ef5350");
    }

    #[test]
    fn test_iter_follows_role_order() {
        let roles: Vec<_> = ColorPalette::blue().iter().map(|(role, _)| role).collect();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn test_set_replaces_single_role() {
        let accent = HexColor::parse("#ff00ff").unwrap();
        let palette = ColorPalette::light().with(ColorRole::Secondary, accent.clone());

        assert_eq!(palette.secondary, accent);
        assert_eq!(palette.primary, ColorPalette::light().primary);
    }

    #[test]
    fn test_deserialize_uses_role_keys() {
        let json = r##"{
            "primary": "#000000", "secondary": "#111111", "background": "#222222",
            "surface": "#333333", "text": "#444444", "textSecondary": "#555555",
            "border": "#666666", "success": "#777777", "warning": "#888888",
            "error": "#999999"
        }"##;
        let palette: ColorPalette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.text_secondary.as_str(), "#555555");
    }

    #[test]
    fn test_deserialize_rejects_missing_and_invalid_colors() {
        let missing = r##"{ "primary": "#000000" }"##;
        assert!(serde_json::from_str::<ColorPalette>(missing).is_err());

        let mut value = serde_json::to_value(ColorPalette::light()).unwrap();
        value["border"] = serde_json::Value::String("grey".into());
        assert!(serde_json::from_value::<ColorPalette>(value).is_err());
    }
}
