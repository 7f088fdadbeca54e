//! Durable storage for dashboard settings.
//!
//! The theme system persists a single key through the
//! [`ThemeStore`](hexmon_style::store::ThemeStore) implementation of
//! [`SettingsStore`].

mod atomic;
mod error;
mod settings;

pub use atomic::atomic_write;
pub use error::{StoreError, StoreResult};
pub use settings::{FromSettingsValue, SettingsFormat, SettingsStore, SettingsValue};
