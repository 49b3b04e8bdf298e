//! Opaque color tags carried on entries and categories.
//!
//! The engine never interprets colors; it stores and copies them. The RGBA
//! decomposition exists for display layers and is deliberately tolerant:
//! unparseable input degrades to opaque black instead of failing.

use serde::{Deserialize, Serialize};

/// Tag given to new entries and categories (a medium blue).
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Hex color string, `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(String);

impl ColorTag {
    pub fn new(hex: impl Into<String>) -> Self {
        ColorTag(hex.into())
    }

    /// The stored string, exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decompose into channels. Six hex digits read as RGB with full alpha,
    /// eight as ARGB; anything else yields opaque black.
    pub fn rgba(&self) -> Rgba {
        let digits: String = self.0.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let value = u64::from_str_radix(&digits, 16).unwrap_or(0);
        match digits.len() {
            8 => Rgba {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            },
            6 => Rgba {
                a: 0xFF,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            },
            _ => Rgba::BLACK,
        }
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        ColorTag(DEFAULT_COLOR.to_string())
    }
}

impl From<&str> for ColorTag {
    fn from(hex: &str) -> Self {
        ColorTag(hex.to_string())
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decomposed color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0xFF,
    };
}
