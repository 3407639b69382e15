//! Colour name resolution for the card border tint.

use std::fmt;

use crate::error::{CacheError, Result};

/// Colour used when none is given on the command line.
pub const DEFAULT_COLOR: &str = "Black";

/// A named, opaque RGB colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    /// Resolve a CSS/web colour name (case-insensitive, e.g. `"Black"`,
    /// `"DarkSlateGray"`).
    pub fn resolve(name: &str) -> Result<Self> {
        let key = name.trim().to_lowercase();
        let srgb = palette::named::from_str(&key)
            .ok_or_else(|| CacheError::InvalidColor(name.to_string()))?;

        Ok(Self {
            name: name.trim().to_string(),
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        })
    }

    /// Fully opaque RGBA pixel value.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{:02x}{:02x}{:02x})", self.name, self.r, self.g, self.b)
    }
}
