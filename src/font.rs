//! Font resolution, text measurement and glyph drawing.
//!
//! Fonts are resolved through a preference list that always ends in the
//! built-in 8x8 bitmap face, so asking for a font never fails.

use std::path::Path;

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

/// Glyph cell size of the built-in bitmap face.
const BUILTIN_CELL: u32 = 8;

/// A loaded typeface without a size.
#[derive(Clone)]
pub enum Typeface {
    /// A TrueType/OpenType face read from disk.
    Outline(Font<'static>),
    /// The built-in 8x8 bitmap face, scaled by whole pixels.
    Builtin,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline(_) => f.write_str("Outline"),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

/// Ink bounding box of a piece of text, relative to the line's top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    /// Horizontal offset of the first inked column.
    pub left: i32,
    /// Vertical offset of the first inked row.
    pub top: i32,
    /// Inked width in pixels.
    pub width: u32,
    /// Inked height in pixels.
    pub height: u32,
}

/// A typeface at a pixel size.
#[derive(Debug, Clone)]
pub struct SizedFont {
    face: Typeface,
    px: f32,
}

/// Read a font file, returning `None` if it is missing or not a usable font.
#[must_use]
pub fn load_typeface(path: &Path) -> Option<Typeface> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::debug!("font {} unavailable: {e}", path.display());
            return None;
        }
    };
    let font = Font::try_from_vec(bytes);
    if font.is_none() {
        log::debug!("font {} could not be parsed", path.display());
    }
    font.map(Typeface::Outline)
}

/// Label font: `path` at `px`, or the built-in face if that is not possible.
#[must_use]
pub fn label_font(path: &Path, px: f32) -> SizedFont {
    if px < 1.0 {
        log::debug!("label size {px} too small for {}, using built-in font", path.display());
        return SizedFont::builtin(px);
    }
    match load_typeface(path) {
        Some(face) => SizedFont { face, px },
        None => {
            log::debug!("falling back to built-in label font");
            SizedFont::builtin(px)
        }
    }
}

/// Caption font: `path` at `px`, or a copy of `fallback` if that is not possible.
#[must_use]
pub fn caption_font(path: &Path, px: f32, fallback: &SizedFont) -> SizedFont {
    match load_typeface(path) {
        Some(face) => SizedFont { face, px },
        None => {
            log::debug!("falling back to label font for caption");
            fallback.clone()
        }
    }
}

impl SizedFont {
    /// The built-in face at the nearest whole multiple of its cell size.
    #[must_use]
    pub fn builtin(px: f32) -> Self {
        Self { face: Typeface::Builtin, px }
    }

    /// Whether this font is the built-in bitmap face.
    #[cfg(test)]
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Typeface::Builtin)
    }

    /// Pixel size requested for this font.
    #[cfg(test)]
    pub fn px(&self) -> f32 {
        self.px
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn builtin_scale(&self) -> u32 {
        ((self.px / BUILTIN_CELL as f32).round() as u32).max(1)
    }

    /// Measure the ink bounding box of `text` when drawn at origin (0, 0).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn measure(&self, text: &str) -> TextBox {
        match &self.face {
            Typeface::Builtin => {
                let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
                if count == 0 {
                    return TextBox::default();
                }
                let cell = BUILTIN_CELL.saturating_mul(self.builtin_scale());
                TextBox { left: 0, top: 0, width: count.saturating_mul(cell), height: cell }
            }
            Typeface::Outline(font) => {
                let scale = Scale::uniform(self.px);
                let ascent = font.v_metrics(scale).ascent;
                let mut bounds: Option<(i32, i32, i32, i32)> = None;
                for glyph in font.layout(text, scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        bounds = Some(match bounds {
                            None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                            Some((x0, y0, x1, y1)) => (
                                x0.min(bb.min.x),
                                y0.min(bb.min.y),
                                x1.max(bb.max.x),
                                y1.max(bb.max.y),
                            ),
                        });
                    }
                }
                bounds.map_or_else(TextBox::default, |(x0, y0, x1, y1)| TextBox {
                    left: x0,
                    top: y0,
                    width: (x1 - x0) as u32,
                    height: (y1 - y0) as u32,
                })
            }
        }
    }

    /// Draw `text` with its line's top-left at `origin`. Pixels outside the
    /// canvas are clipped.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        match &self.face {
            Typeface::Builtin => self.draw_builtin(canvas, text, origin, color),
            Typeface::Outline(font) => {
                let scale = Scale::uniform(self.px);
                let ascent = font.v_metrics(scale).ascent;
                let start = point(origin.0 as f32, origin.1 as f32 + ascent);
                for glyph in font.layout(text, scale, start) {
                    let Some(bb) = glyph.pixel_bounding_box() else { continue };
                    glyph.draw(|gx, gy, coverage| {
                        let x = i64::from(bb.min.x) + i64::from(gx);
                        let y = i64::from(bb.min.y) + i64::from(gy);
                        blend(canvas, x, y, color, coverage);
                    });
                }
            }
        }
    }

    /// Glyph cells are laid out in `i64`; cells left of the canvas are
    /// skipped and drawing stops at the first cell past its right edge.
    fn draw_builtin(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        let scale = i64::from(self.builtin_scale());
        let cell = i64::from(BUILTIN_CELL) * scale;
        let width = i64::from(canvas.width());
        let mut cell_x = i64::from(origin.0);
        let top = i64::from(origin.1);
        for ch in text.chars() {
            if cell_x >= width {
                break;
            }
            if cell_x + cell <= 0 {
                cell_x += cell;
                continue;
            }
            let rows = BASIC_FONTS
                .get(ch)
                .or_else(|| LATIN_FONTS.get(ch))
                .or_else(|| BASIC_FONTS.get('?'))
                .unwrap_or_default();
            for (row, bits) in (0_i64..).zip(rows) {
                for col in 0..i64::from(BUILTIN_CELL) {
                    if bits & (1u8 << col) == 0 {
                        continue;
                    }
                    fill_square(canvas, cell_x + col * scale, top + row * scale, scale, color);
                }
            }
            cell_x += cell;
        }
    }
}

/// Fill the part of the `size`-sided square at (x, y) that lies on the canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fill_square(canvas: &mut RgbImage, x: i64, y: i64, size: i64, color: Rgb<u8>) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + size).min(i64::from(canvas.width()));
    let y1 = (y + size).min(i64::from(canvas.height()));
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Alpha-blend `color` over the canvas pixel at (x, y) with the given coverage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else { return };
    if x >= canvas.width() || y >= canvas.height() || coverage <= 0.0 {
        return;
    }
    let alpha = coverage.min(1.0);
    let dst = canvas.get_pixel_mut(x, y);
    for (d, s) in dst.0.iter_mut().zip(color.0) {
        *d = (f32::from(s) * alpha + f32::from(*d) * (1.0 - alpha)).round() as u8;
    }
}
