//! Renderer port for placeholder image synthesis.

use std::path::PathBuf;

use crate::error::PlaceholderError;

/// One image to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Centered label text; may be empty.
    pub label: String,
    /// Destination relative to the output root.
    pub path: PathBuf,
    /// Palette key for the background.
    pub color: String,
}

impl ImageSpec {
    /// Convenience constructor.
    pub fn new(
        width: u32,
        height: u32,
        label: impl Into<String>,
        path: impl Into<PathBuf>,
        color: impl Into<String>,
    ) -> Self {
        Self { width, height, label: label.into(), path: path.into(), color: color.into() }
    }

    /// The `"{width}x{height}"` caption drawn near the bottom edge.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Produces one image file per [`ImageSpec`].
pub trait Renderer {
    /// Render `spec` and return the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid spec and an I/O error if
    /// the file cannot be written.
    fn render(&self, spec: &ImageSpec) -> Result<PathBuf, PlaceholderError>;
}
