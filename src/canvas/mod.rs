//! The canvas: an owned RGBA pixel buffer with a logical coordinate system.
//!
//! A [`Canvas`] owns exactly `width * height` pixels and never reallocates
//! except through the explicit [`Canvas::rescale`] / [`Canvas::resize`]
//! operations. All drawing and compositing is synchronous and in-memory;
//! an operation either fully succeeds or fails before mutating anything.

use log::{debug, trace};

use crate::artists::Artist;
use crate::blend::{self, BlendMode, PaintMode};
use crate::color::{ColorSpec, Rgba};
use crate::error::{Error, Result};
use crate::transform::Transform;


/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 200;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;
/// Default logical half-width of the coordinate space.
pub const DEFAULT_EXTENT: f64 = 4.0;

/// A fixed-size RGBA drawing surface.
///
/// `extent` is the logical half-width mapped onto the pixel width; see
/// [`Transform`] for the mapping. The stored background keeps its RGB tint
/// but always carries alpha 0, so a fresh canvas composites as "nothing
/// drawn" while still rendering its tint over an opaque base.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    extent: f64,
    background: Rgba,
    data: Box<[Rgba]>,
}

/// Equality is exact buffer equality (plus shape), not identity.
/// Extent and background are presentation metadata and do not participate.
impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl Default for Canvas {
    fn default() -> Self {
        // The defaults are valid by construction.
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_EXTENT, "black")
            .expect("default canvas parameters are valid")
    }
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// The background's alpha is forced to 0 in the buffer (and in the
    /// stored background) as an explicit construction step: antialiased
    /// edges and layer sums need a transparent baseline.
    ///
    /// Fails with [`Error::InvalidDimension`] when either dimension is zero
    /// or the extent is not a positive finite number.
    pub fn new(
        width: u32,
        height: u32,
        extent: f64,
        background: impl Into<ColorSpec>,
    ) -> Result<Self> {
        if width == 0 || height == 0 || !(extent > 0.0) || !extent.is_finite() {
            return Err(Error::InvalidDimension {
                width,
                height,
                extent,
            });
        }
        let background = background.into().resolve()?.with_alpha(0);
        let data = vec![background; width as usize * height as usize].into_boxed_slice();
        Ok(Self {
            width,
            height,
            extent,
            background,
            data,
        })
    }

    /// Assembles a canvas from an existing buffer. Internal; callers go
    /// through [`Canvas::new`] or the stacking/loading entry points.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        extent: f64,
        background: Rgba,
        data: Box<[Rgba]>,
    ) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            extent,
            background,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// The stored background (alpha always 0).
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// The pixel buffer, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// The pixel at (x, y). Panics when out of bounds; tests only.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Raw RGBA bytes in memory order, for codec hand-off.
    pub fn as_bytes(&self) -> &[u8] {
        // Rgba is repr(transparent) over u32; 4 bytes per pixel.
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr() as *const u8, self.data.len() * 4)
        }
    }

    /// Sum over every channel of every pixel. The "has anything been
    /// drawn?" metric: a fresh canvas sums to `(bg.r + bg.g + bg.b) * w * h`
    /// because alpha contributes 0.
    pub fn channel_sum(&self) -> u64 {
        self.data.iter().map(|p| p.channel_sum()).sum()
    }

    /// The logical-to-pixel transform for this canvas's shape.
    pub fn transform(&self) -> Transform {
        Transform::new(self.width, self.height, self.extent)
    }

    /// Returns a fresh canvas of the same shape and extent, filled with the
    /// given background or this canvas's own. Does not mutate the receiver.
    pub fn blank(&self, background: Option<ColorSpec>) -> Result<Canvas> {
        match background {
            Some(bg) => Canvas::new(self.width, self.height, self.extent, bg),
            None => Ok(Canvas::from_parts(
                self.width,
                self.height,
                self.extent,
                self.background,
                vec![self.background; self.data.len()].into_boxed_slice(),
            )),
        }
    }

    /// Invokes an artist on this canvas, returning the canvas for chaining.
    pub fn apply(&mut self, artist: &dyn Artist) -> Result<&mut Self> {
        artist.paint(self)?;
        Ok(self)
    }

    /// Merges `other` into this canvas in place and returns the receiver.
    ///
    /// Shapes are validated before any mutation, so a failed combine leaves
    /// the receiver untouched. `other` is never mutated. Callers wanting a
    /// non-destructive combine use [`Canvas::combined`].
    pub fn combine(&mut self, other: &Canvas, mode: BlendMode) -> Result<&mut Self> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                lhs_width: self.width,
                lhs_height: self.height,
                rhs_width: other.width,
                rhs_height: other.height,
            });
        }
        trace!(
            "combine {}x{} canvas, mode {:?}",
            self.width,
            self.height,
            mode
        );
        match mode {
            BlendMode::Overlay => blend::overlay(&mut self.data, &other.data),
            BlendMode::Add => blend::add(&mut self.data, &other.data),
            BlendMode::Subtract => blend::subtract(&mut self.data, &other.data),
        }
        Ok(self)
    }

    /// Pure counterpart of [`Canvas::combine`]: leaves both inputs intact.
    pub fn combined(&self, other: &Canvas, mode: BlendMode) -> Result<Canvas> {
        let mut out = self.clone();
        out.combine(other, mode)?;
        Ok(out)
    }

    /// Runs a drawing operation according to `mode`.
    ///
    /// `Direct` invokes the operation on this canvas's own buffer; any
    /// other mode draws onto a fresh blank layer and merges that layer in.
    /// This is the generic hook artists paint through.
    pub fn draw_via<F>(&mut self, op: F, mode: PaintMode) -> Result<()>
    where
        F: FnOnce(&mut Canvas) -> Result<()>,
    {
        match mode {
            PaintMode::Direct => op(self),
            PaintMode::Composite(blend_mode) => {
                let mut layer = self.blank(None)?;
                op(&mut layer)?;
                self.combine(&layer, blend_mode)?;
                Ok(())
            }
        }
    }

    /// Broadcasts a value over the alpha channel of every pixel.
    pub fn set_alpha(&mut self, value: u8) {
        for px in self.data.iter_mut() {
            *px = px.with_alpha(value);
        }
    }

    /// Broadcasts a scalar over the R, G and B channels, leaving alpha.
    pub fn set_rgb(&mut self, value: u8) {
        for px in self.data.iter_mut() {
            *px = Rgba::new(value, value, value, px.a());
        }
    }

    /// Fills every pixel with a resolved color (name, triple, or quad),
    /// alpha included.
    pub fn fill(&mut self, color: impl Into<ColorSpec>) -> Result<()> {
        let px = color.into().resolve()?;
        self.data.fill(px);
        Ok(())
    }

    /// Broadcasts one scalar over all four channels of every pixel.
    pub fn fill_value(&mut self, value: u8) {
        self.data.fill(Rgba::new(value, value, value, value));
    }

    /// Rescales the buffer by the given factors using bilinear resampling,
    /// reallocating in place. `dy` defaults to `dx`.
    pub fn rescale(&mut self, dx: f64, dy: Option<f64>) -> Result<()> {
        let dy = dy.unwrap_or(dx);
        if !(dx > 0.0) || !(dy > 0.0) || !dx.is_finite() || !dy.is_finite() {
            return Err(Error::InvalidScale { dx, dy });
        }
        let new_w = ((self.width as f64 * dx).round() as u32).max(1);
        let new_h = ((self.height as f64 * dy).round() as u32).max(1);
        self.resample(new_w, new_h);
        Ok(())
    }

    /// Resizes to either a scale factor or an exact output size.
    ///
    /// Giving both fails with [`Error::ConflictingResizeArguments`]; giving
    /// neither is a no-op (scale 1.0).
    pub fn resize(&mut self, scale: Option<f64>, output_size: Option<(u32, u32)>) -> Result<()> {
        match (scale, output_size) {
            (Some(_), Some(_)) => Err(Error::ConflictingResizeArguments),
            (Some(fx), None) => self.rescale(fx, None),
            (None, Some((w, h))) => {
                if w == 0 || h == 0 {
                    return Err(Error::InvalidDimension {
                        width: w,
                        height: h,
                        extent: self.extent,
                    });
                }
                self.resample(w, h);
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }

    /// Bilinear per-channel resample into a new buffer of the given shape.
    fn resample(&mut self, new_w: u32, new_h: u32) {
        debug!(
            "resample {}x{} -> {}x{}",
            self.width, self.height, new_w, new_h
        );
        let (src_w, src_h) = (self.width as usize, self.height as usize);
        let x_ratio = src_w as f64 / new_w as f64;
        let y_ratio = src_h as f64 / new_h as f64;

        let mut out = vec![Rgba::ZERO; new_w as usize * new_h as usize].into_boxed_slice();
        for dy in 0..new_h as usize {
            // Sample at pixel centers, clamped to the source grid.
            let sy = ((dy as f64 + 0.5) * y_ratio - 0.5).max(0.0);
            let y0 = (sy as usize).min(src_h - 1);
            let y1 = (y0 + 1).min(src_h - 1);
            let fy = sy - y0 as f64;
            for dx in 0..new_w as usize {
                let sx = ((dx as f64 + 0.5) * x_ratio - 0.5).max(0.0);
                let x0 = (sx as usize).min(src_w - 1);
                let x1 = (x0 + 1).min(src_w - 1);
                let fx = sx - x0 as f64;

                let p00 = self.data[y0 * src_w + x0];
                let p10 = self.data[y0 * src_w + x1];
                let p01 = self.data[y1 * src_w + x0];
                let p11 = self.data[y1 * src_w + x1];

                let lerp2 = |c: fn(Rgba) -> u8| {
                    let top = c(p00) as f64 * (1.0 - fx) + c(p10) as f64 * fx;
                    let bot = c(p01) as f64 * (1.0 - fx) + c(p11) as f64 * fx;
                    (top * (1.0 - fy) + bot * fy).round().clamp(0.0, 255.0) as u8
                };
                out[dy * new_w as usize + dx] =
                    Rgba::new(lerp2(Rgba::r), lerp2(Rgba::g), lerp2(Rgba::b), lerp2(Rgba::a));
            }
        }
        self.width = new_w;
        self.height = new_h;
        self.data = out;
    }
}
