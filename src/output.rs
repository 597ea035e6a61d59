//! Output format selection, encoding and file writing.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::PlaceholderError;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Encoding chosen for a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG at the given quality (1..=100).
    Jpeg {
        /// Encoder quality.
        quality: u8,
    },
    /// Lossless PNG.
    Png,
}

impl OutputFormat {
    /// Pick the format from the path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError::UnsupportedFormat`] for any extension other
    /// than `jpg`, `jpeg` or `png`.
    pub fn from_path(path: &Path, jpeg_quality: u8) -> Result<Self, PlaceholderError> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg") => Ok(Self::Jpeg { quality: jpeg_quality }),
            Some("png") => Ok(Self::Png),
            _ => Err(PlaceholderError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }
}

/// Create `path`'s parent directories if they do not exist yet.
///
/// # Errors
///
/// Returns an I/O error naming the directory that could not be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), PlaceholderError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .map_err(|source| PlaceholderError::Io { path: dir.to_path_buf(), source }),
        _ => Ok(()),
    }
}

/// Encode `canvas` in `format` and write it to `path`, replacing any existing file.
///
/// The image is fully encoded before `path` is opened, so an encoder failure
/// leaves an existing file untouched.
///
/// # Errors
///
/// Returns an encode error if the encoder fails, and an I/O error if
/// directories or the file cannot be written.
pub fn save_canvas(
    canvas: &RgbImage,
    format: OutputFormat,
    path: &Path,
) -> Result<(), PlaceholderError> {
    let bytes = encode(canvas, format)
        .map_err(|source| PlaceholderError::Encode { path: path.to_path_buf(), source })?;

    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes)
        .map_err(|source| PlaceholderError::Io { path: path.to_path_buf(), source })?;
    log::debug!("encoded {} as {format:?} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Encode `canvas` into an in-memory buffer.
fn encode(canvas: &RgbImage, format: OutputFormat) -> image::ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let (width, height) = canvas.dimensions();
    match format {
        OutputFormat::Jpeg { quality } => JpegEncoder::new_with_quality(&mut buf, quality)
            .write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgb8)?,
        OutputFormat::Png => PngEncoder::new(&mut buf).write_image(
            canvas.as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        )?,
    }
    Ok(buf)
}
