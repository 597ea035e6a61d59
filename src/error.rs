//! Unified error type for placegen.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`PlaceholderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog, palette or config asked for something that cannot exist.
    Configuration,
    /// Creating directories, encoding or writing the file failed.
    Io,
}

/// Errors that can occur while generating placeholder images.
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// The color key is not present in the palette.
    #[error("Unknown color '{key}'. Known colors: {known}")]
    UnknownColor {
        /// The key that failed to resolve.
        key: String,
        /// Comma-separated list of palette keys.
        known: String,
    },

    /// Width or height is zero.
    #[error("Invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The destination extension maps to no supported encoder.
    #[error("Unsupported output format for {}: expected .jpg, .jpeg or .png", path.display())]
    UnsupportedFormat {
        /// The offending destination.
        path: PathBuf,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O error occurred for a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The encoder rejected the canvas or failed while writing it.
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: image::ImageError,
    },
}

impl PlaceholderError {
    /// Which of the two error classes this belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownColor { .. }
            | Self::InvalidDimensions { .. }
            | Self::UnsupportedFormat { .. }
            | Self::Config(_) => ErrorKind::Configuration,
            Self::Io { .. } | Self::Encode { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err = PlaceholderError::UnknownColor { key: "teal".into(), known: "primary".into() };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("teal"));

        let err = PlaceholderError::Io {
            path: PathBuf::from("images/x.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("images/x.jpg"));
    }
}
