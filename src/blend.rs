//! Layer compositing: overlay, add, and subtract.
//!
//! [`overlay`] is the core algorithm of the crate. Its alpha handling is a
//! saturating union of opacity, `clamp(base.a + layer.a, 0, 255)`, rather
//! than true Porter-Duff "over". The approximation is load-bearing:
//! downstream visual output depends on it, so it is preserved exactly
//! rather than corrected.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::Error;

/// How a layer merges into a base canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlendMode {
    /// Alpha-composite the layer over the base.
    #[default]
    Overlay,
    /// Saturating per-channel addition, alpha included.
    Add,
    /// Saturating per-channel subtraction, alpha included.
    Subtract,
}

impl FromStr for BlendMode {
    type Err = Error;

    /// Parses a mode name for dynamic callers (config files, CLIs).
    ///
    /// The compositing core itself is enum-typed and checked exhaustively;
    /// this is the only place an unknown mode can surface.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "overlay" => Ok(BlendMode::Overlay),
            "add" => Ok(BlendMode::Add),
            "subtract" => Ok(BlendMode::Subtract),
            other => Err(Error::UnknownBlendMode(other.to_owned())),
        }
    }
}

/// How an artist's output reaches the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaintMode {
    /// Write straight into the target buffer.
    #[default]
    Direct,
    /// Draw onto a fresh blank layer, then merge it in with a blend mode.
    Composite(BlendMode),
}

/// Alpha-composites `layer` over `base`, writing into `base`.
///
/// Per pixel:
/// 1. merged alpha = saturating `base.a + layer.a` (see module docs);
/// 2. each RGB channel blends as
///    `layer.c * layer.a/255 + base.c * (255 - layer.a)/255`,
///    computed in f32 and truncated back to u8, so no intermediate
///    overflow is possible.
///
/// Buffers must already be the same length; [`crate::canvas::Canvas`]
/// checks shapes before calling in.
pub(crate) fn overlay(base: &mut [Rgba], layer: &[Rgba]) {
    debug_assert_eq!(base.len(), layer.len());
    for (dst, src) in base.iter_mut().zip(layer) {
        *dst = overlay_pixel(*dst, *src);
    }
}

#[inline]
pub(crate) fn overlay_pixel(base: Rgba, layer: Rgba) -> Rgba {
    let alpha = base.a().saturating_add(layer.a());
    let w = layer.a() as f32 / 255.0;
    let inv = (255 - layer.a()) as f32 / 255.0;
    let blend = |l: u8, b: u8| (l as f32 * w + b as f32 * inv) as u8;
    Rgba::new(
        blend(layer.r(), base.r()),
        blend(layer.g(), base.g()),
        blend(layer.b(), base.b()),
        alpha,
    )
}

/// Saturating per-channel addition across all four channels.
pub(crate) fn add(base: &mut [Rgba], layer: &[Rgba]) {
    debug_assert_eq!(base.len(), layer.len());
    for (dst, src) in base.iter_mut().zip(layer) {
        *dst = add_pixel(*dst, *src);
    }
}

#[inline]
pub(crate) fn add_pixel(base: Rgba, layer: Rgba) -> Rgba {
    Rgba::new(
        base.r().saturating_add(layer.r()),
        base.g().saturating_add(layer.g()),
        base.b().saturating_add(layer.b()),
        base.a().saturating_add(layer.a()),
    )
}

/// Saturating per-channel subtraction across all four channels.
pub(crate) fn subtract(base: &mut [Rgba], layer: &[Rgba]) {
    debug_assert_eq!(base.len(), layer.len());
    for (dst, src) in base.iter_mut().zip(layer) {
        *dst = Rgba::new(
            dst.r().saturating_sub(src.r()),
            dst.g().saturating_sub(src.g()),
            dst.b().saturating_sub(src.b()),
            dst.a().saturating_sub(src.a()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_layer_replaces_rgb_and_saturates_alpha() {
        let base = Rgba::new(10, 20, 30, 40);
        let layer = Rgba::new(200, 100, 50, 255);
        let out = overlay_pixel(base, layer);
        assert_eq!((out.r(), out.g(), out.b()), (200, 100, 50));
        assert_eq!(out.a(), 255);
    }

    #[test]
    fn transparent_layer_leaves_base_rgb() {
        let base = Rgba::new(10, 20, 30, 100);
        let layer = Rgba::new(200, 100, 50, 0);
        let out = overlay_pixel(base, layer);
        assert_eq!((out.r(), out.g(), out.b()), (10, 20, 30));
        assert_eq!(out.a(), 100);
    }

    #[test]
    fn half_alpha_blends_toward_layer() {
        let base = Rgba::new(0, 0, 0, 0);
        let layer = Rgba::new(255, 255, 255, 128);
        let out = overlay_pixel(base, layer);
        // 255 * 128/255 = 128.0 exactly, truncated to 128.
        assert_eq!((out.r(), out.g(), out.b()), (128, 128, 128));
        assert_eq!(out.a(), 128);
    }

    #[test]
    fn merged_alpha_is_saturating_sum_not_porter_duff() {
        let out = overlay_pixel(Rgba::new(0, 0, 0, 200), Rgba::new(0, 0, 0, 200));
        assert_eq!(out.a(), 255);
        let out = overlay_pixel(Rgba::new(0, 0, 0, 100), Rgba::new(0, 0, 0, 100));
        // Porter-Duff would give 161 here; the preserved approximation sums.
        assert_eq!(out.a(), 200);
    }

    #[test]
    fn add_and_subtract_saturate_every_channel() {
        let a = Rgba::new(200, 10, 0, 250);
        let b = Rgba::new(100, 5, 0, 10);
        assert_eq!(add_pixel(a, b), Rgba::new(255, 15, 0, 255));

        let mut buf = [a];
        subtract(&mut buf, &[Rgba::new(255, 3, 1, 0)]);
        assert_eq!(buf[0], Rgba::new(0, 7, 0, 250));
    }

    #[test]
    fn mode_parsing_rejects_unknown_names() {
        assert_eq!("overlay".parse::<BlendMode>().unwrap(), BlendMode::Overlay);
        assert_eq!("add".parse::<BlendMode>().unwrap(), BlendMode::Add);
        assert_eq!(
            "subtract".parse::<BlendMode>().unwrap(),
            BlendMode::Subtract
        );
        let err = "NothingToSeeHere".parse::<BlendMode>().unwrap_err();
        assert!(matches!(err, Error::UnknownBlendMode(_)));
    }
}
