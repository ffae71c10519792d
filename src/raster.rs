//! Primitive pixel-space drawing facility.
//!
//! Filled and stroked shapes over a raw RGBA buffer. Everything here works
//! in pixel coordinates; the logical-to-pixel mapping happens upstream in
//! the artists via [`crate::transform::Transform`].
//!
//! Shapes are scan-converted over their bounding box with a signed-distance
//! test per pixel. [`LineStyle::AntiAliased`] softens the boundary with a
//! single pixel of coverage blended over the destination;
//! [`LineStyle::Aliased`] hard-thresholds it. Interior pixels are written
//! exactly, so an opaque draw produces exactly the requested color.

use crate::blend::overlay_pixel;
use crate::color::Rgba;
use crate::transform::LineStyle;

/// Writes one pixel with the given edge coverage, clipping out-of-bounds
/// coordinates. Negative coordinates wrap to huge values under the unsigned
/// cast and fail the same bounds check.
#[inline]
fn put(buf: &mut [Rgba], width: u32, height: u32, x: i64, y: i64, color: Rgba, coverage: f32) {
    if (x as u64) < width as u64 && (y as u64) < height as u64 {
        let idx = y as usize * width as usize + x as usize;
        if coverage >= 1.0 {
            buf[idx] = color;
        } else if coverage > 0.0 {
            let a = (color.a() as f32 * coverage) as u8;
            buf[idx] = overlay_pixel(buf[idx], color.with_alpha(a));
        }
    }
}

/// Converts a signed distance (negative inside) to coverage for a style.
#[inline]
fn coverage(dist: f64, style: LineStyle) -> f32 {
    match style {
        LineStyle::Aliased => {
            if dist <= 0.0 {
                1.0
            } else {
                0.0
            }
        }
        LineStyle::AntiAliased => (0.5 - dist).clamp(0.0, 1.0) as f32,
    }
}

/// Scans a bounding box, evaluating a signed distance per pixel center.
#[allow(clippy::too_many_arguments)]
fn scan<D: Fn(f64, f64) -> f64>(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgba,
    style: LineStyle,
    dist: D,
) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = dist(x as f64, y as f64);
            put(buf, width, height, x, y, color, coverage(d, style));
        }
    }
}

/// Fills a circle centered at (cx, cy) with pixel radius r.
#[allow(clippy::too_many_arguments)]
pub fn fill_circle(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    r: i64,
    color: Rgba,
    style: LineStyle,
) {
    if r < 0 {
        return;
    }
    let rf = r as f64;
    scan(
        buf,
        width,
        height,
        cx - r - 1,
        cy - r - 1,
        cx + r + 1,
        cy + r + 1,
        color,
        style,
        |x, y| {
            let (dx, dy) = (x - cx as f64, y - cy as f64);
            (dx * dx + dy * dy).sqrt() - rf
        },
    );
}

/// Strokes a circle outline with the given pixel thickness.
#[allow(clippy::too_many_arguments)]
pub fn stroke_circle(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    r: i64,
    thickness: i64,
    color: Rgba,
    style: LineStyle,
) {
    if r < 0 {
        return;
    }
    let rf = r as f64;
    let half_t = (thickness.max(1) as f64) / 2.0;
    let pad = r + thickness + 1;
    scan(
        buf,
        width,
        height,
        cx - pad,
        cy - pad,
        cx + pad,
        cy + pad,
        color,
        style,
        |x, y| {
            let (dx, dy) = (x - cx as f64, y - cy as f64);
            ((dx * dx + dy * dy).sqrt() - rf).abs() - half_t
        },
    );
}

/// Fills an axis-aligned ellipse with pixel semi-axes (rx, ry).
#[allow(clippy::too_many_arguments)]
pub fn fill_ellipse(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    rx: i64,
    ry: i64,
    color: Rgba,
    style: LineStyle,
) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    let (rxf, ryf) = (rx as f64, ry as f64);
    let scale = rxf.min(ryf);
    scan(
        buf,
        width,
        height,
        cx - rx - 1,
        cy - ry - 1,
        cx + rx + 1,
        cy + ry + 1,
        color,
        style,
        |x, y| {
            let nx = (x - cx as f64) / rxf;
            let ny = (y - cy as f64) / ryf;
            // Distance approximated by the normalized radial excess scaled
            // back to the smaller semi-axis.
            ((nx * nx + ny * ny).sqrt() - 1.0) * scale
        },
    );
}

/// Strokes an axis-aligned ellipse outline.
#[allow(clippy::too_many_arguments)]
pub fn stroke_ellipse(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    rx: i64,
    ry: i64,
    thickness: i64,
    color: Rgba,
    style: LineStyle,
) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    let (rxf, ryf) = (rx as f64, ry as f64);
    let scale = rxf.min(ryf);
    let half_t = (thickness.max(1) as f64) / 2.0;
    let pad = thickness + 1;
    scan(
        buf,
        width,
        height,
        cx - rx - pad,
        cy - ry - pad,
        cx + rx + pad,
        cy + ry + pad,
        color,
        style,
        |x, y| {
            let nx = (x - cx as f64) / rxf;
            let ny = (y - cy as f64) / ryf;
            (((nx * nx + ny * ny).sqrt() - 1.0) * scale).abs() - half_t
        },
    );
}

/// Draws a line segment with the given pixel thickness.
#[allow(clippy::too_many_arguments)]
pub fn line(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    thickness: i64,
    color: Rgba,
    style: LineStyle,
) {
    let half_t = (thickness.max(1) as f64) / 2.0;
    let pad = thickness + 1;
    let (ax, ay) = (x0 as f64, y0 as f64);
    let (bx, by) = (x1 as f64, y1 as f64);
    let (ex, ey) = (bx - ax, by - ay);
    let len_sq = ex * ex + ey * ey;
    scan(
        buf,
        width,
        height,
        x0.min(x1) - pad,
        y0.min(y1) - pad,
        x0.max(x1) + pad,
        y0.max(y1) + pad,
        color,
        style,
        |x, y| {
            // Distance from the pixel center to the segment.
            let (px, py) = (x - ax, y - ay);
            let t = if len_sq > 0.0 {
                ((px * ex + py * ey) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (dx, dy) = (px - t * ex, py - t * ey);
            (dx * dx + dy * dy).sqrt() - half_t
        },
    );
}

/// Fills an axis-aligned rectangle spanning the two corner points.
#[allow(clippy::too_many_arguments)]
pub fn fill_rect(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgba,
) {
    let (lo_x, hi_x) = (x0.min(x1), x0.max(x1));
    let (lo_y, hi_y) = (y0.min(y1), y0.max(y1));
    for y in lo_y..=hi_y {
        for x in lo_x..=hi_x {
            put(buf, width, height, x, y, color, 1.0);
        }
    }
}

/// Strokes an axis-aligned rectangle outline with the given thickness.
///
/// The ring is scanned in one pass over the box signed distance, so each
/// pixel is touched at most once and corners blend no denser than edges.
#[allow(clippy::too_many_arguments)]
pub fn stroke_rect(
    buf: &mut [Rgba],
    width: u32,
    height: u32,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    thickness: i64,
    color: Rgba,
    style: LineStyle,
) {
    let (lo_x, hi_x) = (x0.min(x1), x0.max(x1));
    let (lo_y, hi_y) = (y0.min(y1), y0.max(y1));
    let half_t = (thickness.max(1) as f64) / 2.0;
    let pad = thickness + 1;
    scan(
        buf,
        width,
        height,
        lo_x - pad,
        lo_y - pad,
        hi_x + pad,
        hi_y + pad,
        color,
        style,
        |x, y| {
            // Signed distance to the box boundary: positive outside,
            // negative inside.
            let dx = (lo_x as f64 - x).max(x - hi_x as f64);
            let dy = (lo_y as f64 - y).max(y - hi_y as f64);
            let outside = (dx.max(0.0).powi(2) + dy.max(0.0).powi(2)).sqrt();
            let inside = dx.max(dy).min(0.0);
            (outside + inside).abs() - half_t
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> Vec<Rgba> {
        vec![Rgba::ZERO; (w * h) as usize]
    }

    fn sum(buf: &[Rgba]) -> u64 {
        buf.iter().map(|p| p.channel_sum()).sum()
    }

    #[test]
    fn filled_circle_paints_center_not_corners() {
        let mut buf = blank(100, 100);
        let white = Rgba::new(255, 255, 255, 255);
        fill_circle(&mut buf, 100, 100, 50, 50, 25, white, LineStyle::Aliased);
        assert_eq!(buf[50 * 100 + 50], white);
        assert_eq!(buf[0], Rgba::ZERO);
        assert!(sum(&buf) > 0);
    }

    #[test]
    fn aliased_interior_is_exact_color() {
        let mut buf = blank(50, 50);
        let c = Rgba::new(7, 77, 177, 255);
        fill_circle(&mut buf, 50, 50, 25, 25, 10, c, LineStyle::Aliased);
        assert_eq!(buf[25 * 50 + 25], c);
    }

    #[test]
    fn stroke_leaves_circle_interior_empty() {
        let mut buf = blank(100, 100);
        let white = Rgba::new(255, 255, 255, 255);
        stroke_circle(&mut buf, 100, 100, 50, 50, 30, 3, white, LineStyle::Aliased);
        assert_eq!(buf[50 * 100 + 50], Rgba::ZERO);
        // Ring itself was painted.
        assert_eq!(buf[50 * 100 + 80], white);
    }

    #[test]
    fn off_canvas_shapes_are_clipped_without_panic() {
        let mut buf = blank(20, 20);
        let c = Rgba::new(255, 0, 0, 255);
        fill_circle(&mut buf, 20, 20, -50, -50, 10, c, LineStyle::Aliased);
        assert_eq!(sum(&buf), 0);
        // Partially visible.
        fill_circle(&mut buf, 20, 20, 0, 0, 5, c, LineStyle::Aliased);
        assert!(sum(&buf) > 0);
    }

    #[test]
    fn line_connects_endpoints() {
        let mut buf = blank(50, 50);
        let c = Rgba::new(0, 255, 0, 255);
        line(&mut buf, 50, 50, 5, 5, 45, 45, 1, c, LineStyle::Aliased);
        assert_eq!(buf[25 * 50 + 25], c);
        assert_eq!(buf[5 * 50 + 45], Rgba::ZERO);
    }

    #[test]
    fn degenerate_line_is_a_dot() {
        let mut buf = blank(10, 10);
        let c = Rgba::new(9, 9, 9, 255);
        line(&mut buf, 10, 10, 4, 4, 4, 4, 1, c, LineStyle::Aliased);
        assert_eq!(buf[4 * 10 + 4], c);
    }

    #[test]
    fn rect_fill_covers_inclusive_corners() {
        let mut buf = blank(10, 10);
        let c = Rgba::new(1, 2, 3, 4);
        fill_rect(&mut buf, 10, 10, 2, 3, 5, 6, c);
        assert_eq!(buf[3 * 10 + 2], c);
        assert_eq!(buf[6 * 10 + 5], c);
        assert_eq!(buf[0], Rgba::ZERO);
        assert_eq!(sum(&buf), 4 * 4 * c.channel_sum());
    }

    #[test]
    fn stroked_rect_corners_blend_once() {
        let mut buf = blank(25, 25);
        let c = Rgba::new(10, 20, 30, 200);
        stroke_rect(&mut buf, 25, 25, 5, 5, 15, 15, 2, c, LineStyle::AntiAliased);
        // Pixels on the boundary are written exactly, corner included.
        assert_eq!(buf[5 * 25 + 5], c);
        assert_eq!(buf[5 * 25 + 10], c);
        // Fringe pixels one step out get identical coverage at the corner
        // and at the edge midpoint.
        assert_eq!(buf[4 * 25 + 5], buf[4 * 25 + 10]);
        assert!(buf[4 * 25 + 10].a() > 0);
        // Interior stays empty.
        assert_eq!(buf[10 * 25 + 10], Rgba::ZERO);
    }

    #[test]
    fn antialiased_edge_has_partial_coverage() {
        let mut buf = blank(40, 40);
        let white = Rgba::new(255, 255, 255, 255);
        fill_circle(&mut buf, 40, 40, 20, 20, 10, white, LineStyle::AntiAliased);
        // Some boundary pixel must be neither untouched nor fully white.
        let partial = buf
            .iter()
            .any(|p| p.channel_sum() > 0 && p.channel_sum() < white.channel_sum());
        assert!(partial);
    }
}
