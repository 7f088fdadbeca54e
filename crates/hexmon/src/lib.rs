//! # hexmon
//!
//! Theme subsystem of the hexmon heat-exchanger monitoring dashboard.
//!
//! This crate ties the theme machinery in [`hexmon_style`] to durable
//! settings and TOML configuration:
//!
//! - **Config**: [`AppConfig`](config::AppConfig) selects the storage key,
//!   default theme, settings file, and any extra themes
//! - **Storage**: [`SettingsStore`](storage::SettingsStore), a key/value
//!   store persisted atomically as JSON or TOML
//! - **Session**: [`ThemeSession`](session::ThemeSession), a ready-to-use
//!   theme manager wired to both
//!
//! ## Quick Start
//!
//! ```no_run
//! use hexmon::prelude::*;
//!
//! fn main() -> hexmon::Result<()> {
//!     let config = AppConfig::load_or_default("hexmon.toml")?;
//!     let session = ThemeSession::open(&config)?;
//!
//!     session.manager().theme_changed().connect(|theme| {
//!         println!("theme is now {}", theme.name());
//!     });
//!
//!     session.start()?;
//!     session.manager().toggle_theme()?;
//!     print!("{}", session.css());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod session;
pub mod storage;

mod error;

pub use error::{Error, Result};

pub use hexmon_core;
pub use hexmon_style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{AppConfig, ConfigError, ThemeConfig};
    pub use crate::session::ThemeSession;
    pub use crate::storage::{SettingsFormat, SettingsStore, SettingsValue, StoreError};
    pub use crate::{Error, Result};

    pub use hexmon_core::{ConnectionId, Signal};
    pub use hexmon_style::prelude::*;
}
