//! Color types and name resolution.
//!
//! This module provides:
//! - **Pixel storage**: [`Rgba`], a packed 4-byte RGBA pixel
//! - **Semantic input**: [`ColorSpec`], the tagged union a caller hands to
//!   drawing APIs (a name, an RGB triple, or a full RGBA quad)
//! - **Named colors**: a fixed table mapping common names to RGB triples
//!
//! All color input funnels through [`ColorSpec::resolve`]; there is no other
//! conversion path.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rgba pixel: bytes are [R, G, B, A] in memory order.
/// As a u32 on little-endian: 0xAABBGGRR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black, the zero pixel.
    pub const ZERO: Rgba = Rgba(0);

    /// Creates a pixel from component values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0.to_le_bytes()[0]
    }
    #[inline]
    pub fn g(self) -> u8 {
        self.0.to_le_bytes()[1]
    }
    #[inline]
    pub fn b(self) -> u8 {
        self.0.to_le_bytes()[2]
    }
    #[inline]
    pub fn a(self) -> u8 {
        self.0.to_le_bytes()[3]
    }

    /// Returns this pixel with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.0.to_le_bytes();
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Sum of all four channel values. Test helper for "anything drawn?"
    /// style assertions.
    #[inline]
    pub fn channel_sum(self) -> u64 {
        let [r, g, b, a] = self.0.to_le_bytes();
        r as u64 + g as u64 + b as u64 + a as u64
    }
}

/// A color as supplied by a caller: a recognized name, an RGB triple
/// (promoted to full opacity), or an explicit RGBA quad.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorSpec {
    /// A named color resolved through the fixed name table.
    Named(String),
    /// An RGB triple; alpha is promoted to 255.
    Rgb(u8, u8, u8),
    /// A full RGBA quad.
    Rgba(u8, u8, u8, u8),
}

impl ColorSpec {
    /// Builds a spec from a dynamic channel sequence.
    ///
    /// Accepts exactly 3 or 4 values; anything else fails with
    /// [`Error::InvalidColor`]. Channel values are `u8` by construction, so
    /// out-of-range input cannot reach the buffer.
    pub fn from_channels(channels: &[u8]) -> Result<Self> {
        match *channels {
            [r, g, b] => Ok(ColorSpec::Rgb(r, g, b)),
            [r, g, b, a] => Ok(ColorSpec::Rgba(r, g, b, a)),
            _ => Err(Error::InvalidColor(channels.len())),
        }
    }

    /// Resolves to a concrete pixel.
    ///
    /// Names are looked up case-insensitively in the fixed table and fail
    /// with [`Error::UnknownColor`] when absent. Pure function.
    pub fn resolve(&self) -> Result<Rgba> {
        match self {
            ColorSpec::Named(name) => {
                let key = name.to_ascii_lowercase();
                NAMED_COLORS
                    .get(key.as_str())
                    .map(|&(r, g, b)| Rgba::new(r, g, b, 255))
                    .ok_or_else(|| Error::UnknownColor(name.clone()))
            }
            ColorSpec::Rgb(r, g, b) => Ok(Rgba::new(*r, *g, *b, 255)),
            ColorSpec::Rgba(r, g, b, a) => Ok(Rgba::new(*r, *g, *b, *a)),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_owned())
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for ColorSpec {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        ColorSpec::Rgba(r, g, b, a)
    }
}

impl From<Rgba> for ColorSpec {
    fn from(px: Rgba) -> Self {
        ColorSpec::Rgba(px.r(), px.g(), px.b(), px.a())
    }
}

/// Fixed named-color table: matplotlib single letters plus common CSS names.
static NAMED_COLORS: Lazy<HashMap<&'static str, (u8, u8, u8)>> = Lazy::new(|| {
    let entries: &[(&str, (u8, u8, u8))] = &[
        // Single-letter shorthands.
        ("k", (0, 0, 0)),
        ("w", (255, 255, 255)),
        ("r", (255, 0, 0)),
        ("g", (0, 128, 0)),
        ("b", (0, 0, 255)),
        ("y", (255, 255, 0)),
        ("c", (0, 255, 255)),
        ("m", (255, 0, 255)),
        // CSS-style names.
        ("black", (0, 0, 0)),
        ("white", (255, 255, 255)),
        ("red", (255, 0, 0)),
        ("green", (0, 128, 0)),
        ("lime", (0, 255, 0)),
        ("blue", (0, 0, 255)),
        ("yellow", (255, 255, 0)),
        ("cyan", (0, 255, 255)),
        ("aqua", (0, 255, 255)),
        ("magenta", (255, 0, 255)),
        ("fuchsia", (255, 0, 255)),
        ("gray", (128, 128, 128)),
        ("grey", (128, 128, 128)),
        ("silver", (192, 192, 192)),
        ("maroon", (128, 0, 0)),
        ("olive", (128, 128, 0)),
        ("purple", (128, 0, 128)),
        ("teal", (0, 128, 128)),
        ("navy", (0, 0, 128)),
        ("orange", (255, 165, 0)),
        ("pink", (255, 192, 203)),
        ("brown", (165, 42, 42)),
        ("gold", (255, 215, 0)),
        ("indigo", (75, 0, 130)),
        ("violet", (238, 130, 238)),
        ("salmon", (250, 128, 114)),
        ("coral", (255, 127, 80)),
        ("khaki", (240, 230, 140)),
        ("plum", (221, 160, 221)),
        ("orchid", (218, 112, 214)),
        ("turquoise", (64, 224, 208)),
        ("tan", (210, 180, 140)),
        ("beige", (245, 245, 220)),
        ("ivory", (255, 255, 240)),
        ("snow", (255, 250, 250)),
        ("crimson", (220, 20, 60)),
        ("tomato", (255, 99, 71)),
        ("chocolate", (210, 105, 30)),
        ("lavender", (230, 230, 250)),
        ("seagreen", (46, 139, 87)),
        ("skyblue", (135, 206, 235)),
        ("slategray", (112, 128, 144)),
        ("yellowgreen", (154, 205, 50)),
    ];
    entries.iter().copied().collect()
});
