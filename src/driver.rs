//! Walks the catalog and renders each entry in order.

use std::io::Write;
use std::path::PathBuf;

use crate::catalog::{CatalogEntry, Section};
use crate::error::PlaceholderError;
use crate::ports::Renderer;

/// Render every entry in order, printing progress to `out`.
///
/// Stops at the first failure. Returns the paths written.
///
/// # Errors
///
/// Returns the first render error, or an I/O error if progress cannot be
/// written.
pub fn run_catalog<R, W>(
    renderer: &R,
    entries: &[CatalogEntry],
    out: &mut W,
) -> Result<Vec<PathBuf>, PlaceholderError>
where
    R: Renderer + ?Sized,
    W: Write,
{
    emit(out, "🎨 Generating Medical Spa Website Images...")?;

    let mut written = Vec::with_capacity(entries.len());
    let mut current: Option<Section> = None;
    for entry in entries {
        if current != Some(entry.section) {
            emit(out, "")?;
            emit(out, entry.section.heading())?;
            current = Some(entry.section);
        }
        let path = renderer.render(&entry.spec)?;
        emit(out, &format!("✓ Created: {}", path.display()))?;
        written.push(path);
    }

    emit(out, "")?;
    emit(out, "✅ All images generated successfully!")?;
    emit(out, &format!("📊 Total images created: {}", written.len()))?;
    Ok(written)
}

/// Print the catalog without rendering anything.
///
/// # Errors
///
/// Returns an I/O error if the listing cannot be written.
pub fn list_catalog<W: Write>(
    entries: &[CatalogEntry],
    out: &mut W,
) -> Result<(), PlaceholderError> {
    for entry in entries {
        let spec = &entry.spec;
        emit(
            out,
            &format!(
                "{:<44} {:>9}  {:<9}  {}",
                spec.path.display(),
                spec.caption(),
                spec.color,
                spec.label
            ),
        )?;
    }
    emit(out, &format!("{} images", entries.len()))
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), PlaceholderError> {
    writeln!(out, "{line}")
        .map_err(|source| PlaceholderError::Io { path: PathBuf::from("<stdout>"), source })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog::{catalog, select};
    use crate::ports::ImageSpec;

    /// Records render calls and optionally fails on the n-th one.
    struct RecordingRenderer {
        calls: RefCell<Vec<PathBuf>>,
        fail_at: Option<usize>,
    }

    impl RecordingRenderer {
        fn new(fail_at: Option<usize>) -> Self {
            Self { calls: RefCell::new(Vec::new()), fail_at }
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, spec: &ImageSpec) -> Result<PathBuf, PlaceholderError> {
            let mut calls = self.calls.borrow_mut();
            if self.fail_at == Some(calls.len()) {
                return Err(PlaceholderError::UnknownColor {
                    key: spec.color.clone(),
                    known: String::new(),
                });
            }
            calls.push(spec.path.clone());
            Ok(spec.path.clone())
        }
    }

    #[test]
    fn renders_every_entry_in_order() {
        let renderer = RecordingRenderer::new(None);
        let entries = catalog();
        let mut out = Vec::new();

        let written = run_catalog(&renderer, &entries, &mut out).unwrap();

        let expected: Vec<PathBuf> = entries.iter().map(|e| e.spec.path.clone()).collect();
        assert_eq!(written, expected);
        assert_eq!(*renderer.calls.borrow(), expected);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total images created: 42"));
        assert_eq!(text.matches("✓ Created:").count(), 42);
        for section in Section::ALL {
            assert_eq!(text.matches(section.heading()).count(), 1, "{section:?}");
        }
    }

    #[test]
    fn stops_at_first_failure() {
        let renderer = RecordingRenderer::new(Some(3));
        let entries = catalog();
        let mut out = Vec::new();

        let err = run_catalog(&renderer, &entries, &mut out).unwrap_err();
        assert!(matches!(err, PlaceholderError::UnknownColor { .. }));
        assert_eq!(renderer.calls.borrow().len(), 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("✓ Created:").count(), 3);
        assert!(!text.contains("All images generated"));
    }

    #[test]
    fn total_reflects_selection() {
        let renderer = RecordingRenderer::new(None);
        let entries = select(Some(Section::Badges));
        let mut out = Vec::new();

        run_catalog(&renderer, &entries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total images created: 8"));
        assert!(!text.contains(Section::Hero.heading()));
    }

    #[test]
    fn listing_renders_nothing() {
        let mut out = Vec::new();
        list_catalog(&catalog(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("images/services/botox.jpg"));
        assert!(text.contains("800x600"));
        assert!(text.trim_end().ends_with("42 images"));
    }
}
