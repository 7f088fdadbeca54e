//! Error types for the theme system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in the theme system.
///
/// An unknown theme name is not an error: the manager substitutes the
/// registry default and reports it through
/// [`Resolution::Fallback`](crate::theme::Resolution::Fallback).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid color value '{value}'")]
    InvalidColor { value: String },

    /// A color role key is not one of the known roles.
    #[error("Unknown color role '{key}'")]
    UnknownRole { key: String },

    /// Two themes with the same name were registered.
    #[error("Theme '{name}' is registered more than once")]
    DuplicateTheme { name: String },

    /// The designated default theme is not registered.
    #[error("Default theme '{name}' is not registered")]
    UnknownDefault { name: String },

    /// A registry was built without any theme.
    #[error("Theme registry is empty")]
    EmptyRegistry,

    /// Reading or writing the persisted theme name failed.
    #[error("Theme storage failed for key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a storage error for `key`.
    pub fn storage(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Storage {
            key: key.into(),
            source: source.into(),
        }
    }

    /// Returns true if this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::StorageFull, "quota exceeded");
        let err = Error::storage("theme", io);

        assert!(err.is_storage());
        assert_eq!(
            err.to_string(),
            "Theme storage failed for key 'theme': quota exceeded"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::invalid_color("#12").to_string(),
            "Invalid color value '#12'"
        );
        assert_eq!(
            Error::UnknownDefault { name: "sepia".into() }.to_string(),
            "Default theme 'sepia' is not registered"
        );
    }
}
