//! Placeholder image synthesis: solid background, centered label, size caption.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::config::FontPaths;
use crate::error::PlaceholderError;
use crate::font::{caption_font, label_font, SizedFont};
use crate::output::{save_canvas, OutputFormat};
use crate::palette::Palette;
use crate::ports::{ImageSpec, Renderer};

/// Label and caption color.
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Caption font size in pixels.
const CAPTION_PX: f32 = 20.0;

/// Distance from the bottom edge to the top of the caption line.
const CAPTION_BOTTOM_OFFSET: i64 = 40;

/// Draws placeholder images and writes them below an output root.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    palette: Palette,
    fonts: FontPaths,
    jpeg_quality: u8,
    out_dir: PathBuf,
}

impl PlaceholderGenerator {
    /// Creates a generator writing files relative to `out_dir`.
    pub fn new(
        palette: Palette,
        fonts: FontPaths,
        jpeg_quality: u8,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self { palette, fonts, jpeg_quality, out_dir: out_dir.into() }
    }

    /// Where `spec` will be written.
    #[must_use]
    pub fn destination(&self, spec: &ImageSpec) -> PathBuf {
        self.out_dir.join(&spec.path)
    }

    /// Draw the canvas for `spec` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero dimensions or an unknown color.
    pub fn draw(&self, spec: &ImageSpec) -> Result<RgbImage, PlaceholderError> {
        if spec.width == 0 || spec.height == 0 {
            return Err(PlaceholderError::InvalidDimensions {
                width: spec.width,
                height: spec.height,
            });
        }
        let background = self.palette.resolve(&spec.color)?;
        let mut canvas = RgbImage::from_pixel(spec.width, spec.height, background);

        #[allow(clippy::cast_precision_loss)]
        let label_px = (spec.height / 10) as f32;
        let label = label_font(&self.fonts.label, label_px);
        draw_centered(&mut canvas, &label, &spec.label);

        let caption = caption_font(&self.fonts.caption, CAPTION_PX, &label);
        draw_caption(&mut canvas, &caption, &spec.caption());

        Ok(canvas)
    }

    fn write(&self, spec: &ImageSpec, dest: &Path) -> Result<(), PlaceholderError> {
        let format = OutputFormat::from_path(dest, self.jpeg_quality)?;
        let canvas = self.draw(spec)?;
        save_canvas(&canvas, format, dest)
    }
}

impl Renderer for PlaceholderGenerator {
    fn render(&self, spec: &ImageSpec) -> Result<PathBuf, PlaceholderError> {
        let dest = self.destination(spec);
        self.write(spec, &dest)?;
        Ok(dest)
    }
}

/// Draw `text` with its ink box centered on the canvas.
fn draw_centered(canvas: &mut RgbImage, font: &SizedFont, text: &str) {
    let ink = font.measure(text);
    let x = centered(canvas.width(), ink.width) - i64::from(ink.left);
    let y = centered(canvas.height(), ink.height) - i64::from(ink.top);
    font.draw(canvas, text, (clamp_i32(x), clamp_i32(y)), TEXT_COLOR);
}

/// Draw `text` horizontally centered with its line top just above the bottom edge.
fn draw_caption(canvas: &mut RgbImage, font: &SizedFont, text: &str) {
    let ink = font.measure(text);
    let x = centered(canvas.width(), ink.width) - i64::from(ink.left);
    let y = (i64::from(canvas.height()) - CAPTION_BOTTOM_OFFSET).max(0);
    font.draw(canvas, text, (clamp_i32(x), clamp_i32(y)), TEXT_COLOR);
}

/// Floor of `(outer - inner) / 2`; negative when the content overflows.
fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}
