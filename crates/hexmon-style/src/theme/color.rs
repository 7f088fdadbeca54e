//! Color roles and color values.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Prefix shared by every theme custom property.
pub const PROPERTY_PREFIX: &str = "--color-";

/// The semantic slot a color fills in a theme.
///
/// The declaration order is the order colors are applied and serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
    Success,
    Warning,
    Error,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Background,
        ColorRole::Surface,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::Border,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Error,
    ];

    /// The role key used in theme definitions (`textSecondary`, ...).
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::Border => "border",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
        }
    }

    /// The custom property this role is written to, e.g. `--color-primary`.
    pub fn property_name(self) -> String {
        format!("{PROPERTY_PREFIX}{}", self.key())
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = Error;

    /// Parses a role key, with or without the `--color-` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.strip_prefix(PROPERTY_PREFIX).unwrap_or(s);
        ColorRole::ALL
            .into_iter()
            .find(|role| role.key() == key)
            .ok_or_else(|| Error::UnknownRole { key: s.to_string() })
    }
}

/// A CSS hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
///
/// The text is kept exactly as given so that the value written to the style
/// surface matches the theme definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Cow<'static, str>);

impl HexColor {
    /// Parse and validate a hex color.
    pub fn parse(value: &str) -> Result<Self> {
        if is_hex_color(value) {
            Ok(Self(Cow::Owned(value.to_string())))
        } else {
            Err(Error::invalid_color(value))
        }
    }

    /// Wrap a literal from a built-in palette without validating it.
    ///
    /// Built-in literals are checked by the palette tests.
    pub(crate) const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// The color text, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_hex_color(&value) {
            Ok(Self(Cow::Owned(value)))
        } else {
            Err(Error::InvalidColor { value })
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0.into_owned()
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
