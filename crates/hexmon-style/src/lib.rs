//! Theme system for hexmon.
//!
//! This crate provides the dashboard's color themes and the machinery to
//! switch between them:
//!
//! - **Themes**: Named palettes with one color per [`ColorRole`](theme::ColorRole)
//! - **Registry**: An immutable, ordered set of themes with a default
//! - **Manager**: Tracks the active theme, writes `--color-<role>` custom
//!   properties, persists the theme name, and notifies observers
//! - **Seams**: [`ThemeStore`](store::ThemeStore) and
//!   [`StyleSurface`](surface::StyleSurface), with in-memory implementations
//!   and browser ones behind the `web` feature
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use hexmon_style::prelude::*;
//!
//! let manager = ThemeManager::new(
//!     Arc::new(ThemeRegistry::builtin()),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(InlineStyle::new()),
//! );
//!
//! manager.theme_changed().connect(|theme| {
//!     println!("now using {}", theme.name());
//! });
//!
//! manager.init_theme()?;
//! let applied = manager.set_theme("sepia")?;
//! assert!(applied.is_fallback());
//! # Ok::<(), hexmon_style::Error>(())
//! ```

pub mod store;
pub mod surface;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

mod error;

pub use error::{BoxError, Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::store::{MemoryStore, ThemeStore};
    pub use crate::surface::{InlineStyle, StyleSurface};
    pub use crate::theme::{
        ColorPalette, ColorRole, HexColor, Resolution, Theme, ThemeApplied, ThemeManager,
        ThemeRegistry, ThemeVariables,
    };

    #[cfg(feature = "web")]
    pub use crate::web::{DocumentStyle, LocalStorage};
}
