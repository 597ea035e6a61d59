//! Configuration file loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PlaceholderError;
use crate::output::DEFAULT_JPEG_QUALITY;
use crate::palette::Palette;

/// Default bold font used for labels.
pub const DEFAULT_LABEL_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Default regular font used for the size caption.
pub const DEFAULT_CAPTION_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JPEG encoder quality, 1..=100.
    #[serde(default = "default_quality")]
    pub jpeg_quality: u8,

    /// Palette overrides and additions, name to `#rrggbb`.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,

    /// Font file locations.
    #[serde(default)]
    pub fonts: FontPaths,
}

/// Font file locations. Missing files fall back silently.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FontPaths {
    /// Bold face for the label.
    #[serde(default = "default_label_font")]
    pub label: PathBuf,
    /// Regular face for the caption.
    #[serde(default = "default_caption_font")]
    pub caption: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self { label: default_label_font(), caption: default_caption_font() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            palette: BTreeMap::new(),
            fonts: FontPaths::default(),
        }
    }
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

fn default_label_font() -> PathBuf {
    PathBuf::from(DEFAULT_LABEL_FONT)
}

fn default_caption_font() -> PathBuf {
    PathBuf::from(DEFAULT_CAPTION_FONT)
}

impl Config {
    /// Load configuration from the given path, or return defaults if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load(path: &Path) -> Result<Self, PlaceholderError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlaceholderError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| {
            PlaceholderError::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), PlaceholderError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PlaceholderError::Config(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// Build the palette: defaults with this config's overrides merged on top.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not a valid hex color.
    pub fn palette(&self) -> Result<Palette, PlaceholderError> {
        Palette::with_overrides(&self.palette)
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `PLACEGEN_CONFIG` environment variable
/// 3. `placegen.toml` in the working directory
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Ok(p) = std::env::var("PLACEGEN_CONFIG") {
        return PathBuf::from(p);
    }

    PathBuf::from("placegen.toml")
}
