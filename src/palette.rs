//! Semantic color names and their RGB values.

use std::collections::BTreeMap;

use image::Rgb;

use crate::error::PlaceholderError;

/// Built-in colors matching the website's stylesheet.
const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("primary", "#c9a78e"),
    ("secondary", "#8b9d83"),
    ("accent", "#d4a59a"),
    ("light", "#faf8f6"),
    ("text", "#2c2c2c"),
];

/// Immutable mapping from color key to RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, Rgb<u8>>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_COLORS
            .iter()
            .filter_map(|&(name, hex)| parse_hex(hex).ok().map(|rgb| (name.to_string(), rgb)))
            .collect();
        Self { colors }
    }
}

impl Palette {
    /// Build a palette from the defaults with `overrides` merged on top.
    ///
    /// # Errors
    ///
    /// Returns a config error if any override is not a valid hex color.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, PlaceholderError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut palette = Self::default();
        for (name, hex) in overrides {
            let rgb = parse_hex(hex)
                .map_err(|e| PlaceholderError::Config(format!("palette entry '{name}': {e}")))?;
            palette.colors.insert(name.clone(), rgb);
        }
        Ok(palette)
    }

    /// Look up a color key.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError::UnknownColor`] if the key is not defined.
    pub fn resolve(&self, key: &str) -> Result<Rgb<u8>, PlaceholderError> {
        self.colors.get(key).copied().ok_or_else(|| PlaceholderError::UnknownColor {
            key: key.to_string(),
            known: self.colors.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }
}

/// Parse `#rrggbb` (leading `#` optional) into an RGB pixel.
///
/// # Errors
///
/// Returns a description of the problem if the string is malformed.
pub fn parse_hex(input: &str) -> Result<Rgb<u8>, String> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("invalid color '{input}', expected #rrggbb"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| format!("invalid color '{input}', expected #rrggbb"))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
