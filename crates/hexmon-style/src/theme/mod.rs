//! Theme system with built-in themes.

mod builtin;
mod color;
mod manager;
mod palette;
mod registry;
mod variables;

pub use builtin::{DEFAULT_THEME, Theme, ThemeDefinition};
pub use color::{ColorRole, HexColor, PROPERTY_PREFIX};
pub use manager::{DEFAULT_STORAGE_KEY, Resolution, ThemeApplied, ThemeManager};
pub use palette::ColorPalette;
pub use registry::{ThemeRegistry, ThemeRegistryBuilder};
pub use variables::ThemeVariables;
