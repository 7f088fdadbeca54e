//! Error types for settings storage.

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading or writing the settings file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The settings file could not be read or written.
    #[error("settings I/O failed for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file content could not be parsed or produced.
    #[error("invalid settings data in '{}': {message}", path.display())]
    Format { path: PathBuf, message: String },

    /// A settings path with no key segments, such as `""` or `"./"`.
    #[error("invalid settings key '{key}'")]
    InvalidKey { key: String },
}

impl StoreError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a format error for `path`.
    pub fn format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Format {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// The file involved, if the error concerns one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Format { path, .. } => Some(path),
            Self::InvalidKey { .. } => None,
        }
    }
}

/// A specialized Result type for settings storage.
pub type StoreResult<T> = Result<T, StoreError>;
