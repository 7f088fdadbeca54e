//! Error types for the hexmon crate.

use crate::config::ConfigError;
use crate::storage::StoreError;

/// The error type for hexmon operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A theme operation failed.
    #[error(transparent)]
    Style(#[from] hexmon_style::Error),

    /// The settings file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configuration is invalid or unreadable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A specialized Result type for hexmon operations.
pub type Result<T> = std::result::Result<T, Error>;
