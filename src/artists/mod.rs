//! Artist primitives: parameterized shapes that paint onto a canvas.
//!
//! An artist holds logical-space parameters (extent coordinates, not
//! pixels), converts them through the canvas [`Transform`] at paint time,
//! and draws through [`Canvas::draw_via`] so the same shape works in direct
//! and composited modes. Artists are plain data; painting never mutates
//! the artist.

use crate::blend::PaintMode;
use crate::canvas::Canvas;
use crate::color::ColorSpec;
use crate::error::Result;
use crate::raster;
use crate::transform::LineStyle;

/// Something that can paint itself onto a canvas.
pub trait Artist {
    fn paint(&self, canvas: &mut Canvas) -> Result<()>;
}

/// Fill sentinel for closed-shape thickness: non-positive means filled.
pub const FILLED: f64 = -1.0;

/// A circle centered at (x, y) with logical radius r.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub color: ColorSpec,
    pub thickness: f64,
    pub antialiased: bool,
    pub mode: PaintMode,
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            x,
            y,
            r,
            color: ColorSpec::from("white"),
            thickness: FILLED,
            antialiased: true,
            mode: PaintMode::Direct,
        }
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    /// Logical stroke thickness; non-positive fills the shape.
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Artist for Circle {
    fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        let color = self.color.resolve()?;
        let t = canvas.transform();
        let (cx, cy) = (t.x_to_px(self.x), t.y_to_px(self.y));
        let r = t.length_to_px_int(self.r);
        // Fill is decided on the logical value: a tiny positive thickness
        // still strokes, at a minimum of one pixel.
        let filled = self.thickness <= 0.0;
        let thickness = t.thickness(self.thickness).max(1);
        let style = LineStyle::from_antialiased(self.antialiased);

        canvas.draw_via(
            |c| {
                let (w, h) = (c.width(), c.height());
                let buf = c.pixels_mut();
                if filled {
                    raster::fill_circle(buf, w, h, cx, cy, r, color, style);
                } else {
                    raster::stroke_circle(buf, w, h, cx, cy, r, thickness, color, style);
                }
                Ok(())
            },
            self.mode,
        )
    }
}

/// An axis-aligned ellipse centered at (x, y) with logical semi-axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
    pub color: ColorSpec,
    pub thickness: f64,
    pub antialiased: bool,
    pub mode: PaintMode,
}

impl Ellipse {
    pub fn new(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            color: ColorSpec::from("white"),
            thickness: FILLED,
            antialiased: true,
            mode: PaintMode::Direct,
        }
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Artist for Ellipse {
    fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        let color = self.color.resolve()?;
        let t = canvas.transform();
        let (cx, cy) = (t.x_to_px(self.x), t.y_to_px(self.y));
        // Both semi-axes scale by width/extent: the transform is
        // aspect-preserving, so a logical circle stays circular.
        let (rx, ry) = (t.length_to_px_int(self.rx), t.length_to_px_int(self.ry));
        let filled = self.thickness <= 0.0;
        let thickness = t.thickness(self.thickness).max(1);
        let style = LineStyle::from_antialiased(self.antialiased);

        canvas.draw_via(
            |c| {
                let (w, h) = (c.width(), c.height());
                let buf = c.pixels_mut();
                if filled {
                    raster::fill_ellipse(buf, w, h, cx, cy, rx, ry, color, style);
                } else {
                    raster::stroke_ellipse(buf, w, h, cx, cy, rx, ry, thickness, color, style);
                }
                Ok(())
            },
            self.mode,
        )
    }
}

/// A line segment between two logical points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: ColorSpec,
    pub thickness: f64,
    pub antialiased: bool,
    pub mode: PaintMode,
}

impl Line {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            color: ColorSpec::from("white"),
            thickness: 0.05,
            antialiased: true,
            mode: PaintMode::Direct,
        }
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Artist for Line {
    fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        let color = self.color.resolve()?;
        let t = canvas.transform();
        let (px0, py0) = (t.x_to_px(self.x0), t.y_to_px(self.y0));
        let (px1, py1) = (t.x_to_px(self.x1), t.y_to_px(self.y1));
        let thickness = t.thickness(self.thickness).max(1);
        let style = LineStyle::from_antialiased(self.antialiased);

        canvas.draw_via(
            |c| {
                let (w, h) = (c.width(), c.height());
                raster::line(c.pixels_mut(), w, h, px0, py0, px1, py1, thickness, color, style);
                Ok(())
            },
            self.mode,
        )
    }
}

/// An axis-aligned rectangle spanning two logical corner points.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: ColorSpec,
    pub thickness: f64,
    pub antialiased: bool,
    pub mode: PaintMode,
}

impl Rectangle {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            color: ColorSpec::from("white"),
            thickness: FILLED,
            antialiased: true,
            mode: PaintMode::Direct,
        }
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Artist for Rectangle {
    fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        let color = self.color.resolve()?;
        let t = canvas.transform();
        let (px0, py0) = (t.x_to_px(self.x0), t.y_to_px(self.y0));
        let (px1, py1) = (t.x_to_px(self.x1), t.y_to_px(self.y1));
        let filled = self.thickness <= 0.0;
        let thickness = t.thickness(self.thickness).max(1);
        let style = LineStyle::from_antialiased(self.antialiased);

        canvas.draw_via(
            |c| {
                let (w, h) = (c.width(), c.height());
                let buf = c.pixels_mut();
                if filled {
                    raster::fill_rect(buf, w, h, px0, py0, px1, py1, color);
                } else {
                    raster::stroke_rect(buf, w, h, px0, py0, px1, py1, thickness, color, style);
                }
                Ok(())
            },
            self.mode,
        )
    }
}

/// A connected sequence of line segments through logical points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: ColorSpec,
    pub thickness: f64,
    pub antialiased: bool,
    /// Closes the path back to the first point.
    pub closed: bool,
    pub mode: PaintMode,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            color: ColorSpec::from("white"),
            thickness: 0.05,
            antialiased: true,
            closed: false,
            mode: PaintMode::Direct,
        }
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Artist for Polyline {
    fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        if self.points.len() < 2 {
            return Ok(());
        }
        let color = self.color.resolve()?;
        let t = canvas.transform();
        let mut px: Vec<(i64, i64)> = self
            .points
            .iter()
            .map(|&(x, y)| (t.x_to_px(x), t.y_to_px(y)))
            .collect();
        if self.closed {
            px.push(px[0]);
        }
        let thickness = t.thickness(self.thickness).max(1);
        let style = LineStyle::from_antialiased(self.antialiased);

        canvas.draw_via(
            |c| {
                let (w, h) = (c.width(), c.height());
                let buf = c.pixels_mut();
                for pair in px.windows(2) {
                    let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
                    raster::line(buf, w, h, x0, y0, x1, y1, thickness, color, style);
                }
                Ok(())
            },
            self.mode,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::BlendMode;

    #[test]
    fn direct_circle_draws_something() {
        let mut canvas = Canvas::default();
        canvas.apply(&Circle::new(0.0, 0.0, 1.0)).unwrap();
        assert!(canvas.channel_sum() > 0);
        // Center pixel is inside the circle.
        let px = canvas.pixel(100, 100);
        assert_eq!((px.r(), px.g(), px.b(), px.a()), (255, 255, 255, 255));
    }

    #[test]
    fn unknown_color_fails_before_drawing() {
        let mut canvas = Canvas::default();
        let err = canvas
            .apply(&Circle::new(0.0, 0.0, 1.0).color("no_such_hue"))
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::UnknownColor(_)));
        assert_eq!(canvas.channel_sum(), 0);
    }

    #[test]
    fn circle_respects_the_coordinate_transform() {
        // Circle at x=1 on a 200px/extent-4 canvas centers at column 125.
        let mut canvas = Canvas::default();
        canvas
            .apply(&Circle::new(1.0, 0.0, 0.5).antialiased(false))
            .unwrap();
        assert!(canvas.pixel(125, 100).channel_sum() > 0);
        assert_eq!(canvas.pixel(50, 100).channel_sum(), 0);
    }

    #[test]
    fn stroked_circle_has_hollow_center() {
        let mut canvas = Canvas::default();
        canvas
            .apply(&Circle::new(0.0, 0.0, 2.0).thickness(0.1).antialiased(false))
            .unwrap();
        assert_eq!(canvas.pixel(100, 100).channel_sum(), 0);
        assert!(canvas.channel_sum() > 0);
    }

    #[test]
    fn tiny_positive_thickness_strokes_a_hairline_not_a_fill() {
        // 0.005 logical units truncate to 0 pixels; the stroke must clamp
        // to one pixel instead of degenerating into a fill.
        let mut canvas = Canvas::default();
        canvas
            .apply(&Circle::new(0.0, 0.0, 2.0).thickness(0.005).antialiased(false))
            .unwrap();
        assert_eq!(canvas.pixel(100, 100).channel_sum(), 0);
        assert!(canvas.channel_sum() > 0);

        let mut canvas = Canvas::default();
        canvas
            .apply(&Rectangle::new(-1.0, -1.0, 1.0, 1.0).thickness(0.005).antialiased(false))
            .unwrap();
        assert_eq!(canvas.pixel(100, 100).channel_sum(), 0);
        assert!(canvas.channel_sum() > 0);

        let mut canvas = Canvas::default();
        canvas
            .apply(&Ellipse::new(0.0, 0.0, 2.0, 1.0).thickness(0.005).antialiased(false))
            .unwrap();
        assert_eq!(canvas.pixel(100, 100).channel_sum(), 0);
        assert!(canvas.channel_sum() > 0);
    }

    #[test]
    fn add_mode_draw_equals_direct_draw_plus_saturating_add() {
        // Drawing two circles via add-mode composition must equal the
        // pixel-wise saturating sum of the separate direct draws.
        let a = Circle::new(-0.5, 0.0, 1.0).color("r");
        let b = Circle::new(0.5, 0.0, 1.0).color("b");

        let mut via_add = Canvas::default();
        via_add
            .apply(&a.clone().mode(PaintMode::Composite(BlendMode::Add)))
            .unwrap();
        via_add
            .apply(&b.clone().mode(PaintMode::Composite(BlendMode::Add)))
            .unwrap();

        let mut direct_a = Canvas::default();
        direct_a.apply(&a).unwrap();
        let mut direct_b = Canvas::default();
        direct_b.apply(&b).unwrap();
        let summed = direct_a.combined(&direct_b, BlendMode::Add).unwrap();

        assert!(via_add.channel_sum() > 0);
        assert_eq!(via_add, summed);
    }

    #[test]
    fn rectangle_fills_between_corners() {
        let mut canvas = Canvas::default();
        canvas
            .apply(&Rectangle::new(0.5, 0.25, 0.75, 0.75).antialiased(false))
            .unwrap();
        assert!(canvas.channel_sum() > 0);
    }

    #[test]
    fn polyline_draws_all_segments() {
        let mut canvas = Canvas::default();
        let tri = Polyline::new(vec![(-1.0, -1.0), (1.0, -1.0), (0.0, 1.0)])
            .closed(true)
            .antialiased(false);
        canvas.apply(&tri).unwrap();
        assert!(canvas.channel_sum() > 0);
        // A point on the bottom edge between the first two vertices.
        let t = canvas.transform();
        let (x, y) = (t.x_to_px(0.0), t.y_to_px(-1.0));
        assert!(canvas.pixel(x as u32, y as u32).channel_sum() > 0);
    }

    #[test]
    fn ellipse_spans_its_semi_axes() {
        let mut canvas = Canvas::default();
        canvas
            .apply(&Ellipse::new(0.0, 0.0, 2.0, 1.0).antialiased(false))
            .unwrap();
        // Wide axis reaches x=±2 (columns 50 and 150); narrow axis stops
        // short of row 25 (y=3 is outside ry=1).
        assert!(canvas.pixel(55, 100).channel_sum() > 0);
        assert_eq!(canvas.pixel(100, 30).channel_sum(), 0);
    }
}
