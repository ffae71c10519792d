//! Logical-to-pixel coordinate transforms.
//!
//! Logical coordinates are centered at the canvas middle and normalized by
//! the canvas `extent`: the logical x range `[-extent, +extent]` spans the
//! full pixel width. Logical y grows upward, pixel y grows downward, so the
//! y mapping flips sign. The same `width / extent` ratio scales lengths, so
//! the transform preserves aspect (a logical circle stays circular on a
//! non-square canvas).

/// Pure coordinate mapping parameterized by a canvas shape.
///
/// Stateless and cheap to copy; [`crate::canvas::Canvas::transform`] hands
/// one out per call. Behavior under NaN or infinite input is undefined;
/// artists are expected to pass finite parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    width: u32,
    height: u32,
    extent: f64,
}

/// Line rendering style. The antialiasing flag of a draw call maps onto
/// this enum at the raster boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Hard-thresholded edges.
    Aliased,
    /// Edges softened by single-pixel coverage.
    #[default]
    AntiAliased,
}

impl LineStyle {
    /// Maps the artists' antialiasing flag to a line style.
    pub fn from_antialiased(antialiased: bool) -> Self {
        if antialiased {
            LineStyle::AntiAliased
        } else {
            LineStyle::Aliased
        }
    }
}

impl Transform {
    pub(crate) fn new(width: u32, height: u32, extent: f64) -> Self {
        Self {
            width,
            height,
            extent,
        }
    }

    /// Maps a logical x coordinate to a pixel column, truncating.
    pub fn x_to_px(&self, x: f64) -> i64 {
        let w = self.width as f64;
        (x * w / (2.0 * self.extent) + w / 2.0) as i64
    }

    /// Maps a logical y coordinate to a pixel row, truncating.
    ///
    /// Logical y grows upward; the pixel grid grows downward, hence the
    /// negated scale.
    pub fn y_to_px(&self, y: f64) -> i64 {
        let h = self.height as f64;
        (y * -h / (2.0 * self.extent) + h / 2.0) as i64
    }

    /// Scales a logical length to pixels without truncation.
    pub fn length_to_px(&self, r: f64) -> f64 {
        r * self.width as f64 / self.extent
    }

    /// Scales a logical length to a whole pixel count, truncating.
    pub fn length_to_px_int(&self, r: f64) -> i64 {
        self.length_to_px(r) as i64
    }

    /// Scales a logical length to a kernel size: a positive odd integer.
    ///
    /// The float length is forced even by subtracting its remainder mod 2,
    /// then nudged to the adjacent odd value (down when the remainder was
    /// below 1, up otherwise), with a floor of 1.
    pub fn kernel_length(&self, r: f64) -> i64 {
        let len = self.length_to_px(r);
        let remainder = len % 2.0;
        let mut k = (len - remainder) as i64;
        k += if remainder < 1.0 { -1 } else { 1 };
        k.max(1)
    }

    /// Scales a stroke thickness to pixels.
    ///
    /// Only positive values are measurements; zero and negative values are
    /// sentinels (`-1` means "filled") and pass through unchanged.
    pub fn thickness(&self, r: f64) -> i64 {
        if r > 0.0 {
            self.length_to_px_int(r)
        } else {
            r as i64
        }
    }

    /// Converts a logical angle in radians (counter-clockwise) to pixel-space
    /// degrees (clockwise).
    pub fn angle_to_deg(&self, rads: f64) -> f64 {
        -rads.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> Transform {
        Transform::new(200, 200, 4.0)
    }

    #[test]
    fn x_is_centered_and_truncated() {
        assert_eq!(t().x_to_px(0.0), 100);
        assert_eq!(t().x_to_px(4.0), 200);
        assert_eq!(t().x_to_px(-4.0), 0);
        assert_eq!(t().x_to_px(1.0), 125);
        // Truncation toward zero, not rounding.
        assert_eq!(t().x_to_px(0.039), 100);
    }

    #[test]
    fn y_is_inverted() {
        assert_eq!(t().y_to_px(0.0), 100);
        assert_eq!(t().y_to_px(4.0), 0);
        assert_eq!(t().y_to_px(-4.0), 200);
    }

    #[test]
    fn aspect_is_preserved_on_non_square_canvas() {
        // Lengths scale by width/extent regardless of height.
        let wide = Transform::new(400, 100, 4.0);
        assert_eq!(wide.length_to_px_int(1.0), 100);
    }

    #[test]
    fn kernel_length_snaps_to_odd() {
        // r=0.1 -> raw 5.0, rem 1.0 -> 4 + 1 = 5.
        assert_eq!(t().kernel_length(0.1), 5);
        // r=0.08 -> raw 4.0, rem 0.0 -> 4 - 1 = 3 (even snaps to adjacent odd).
        assert_eq!(t().kernel_length(0.08), 3);
        // r=0.05 -> raw 2.5, rem 0.5 -> 2 - 1 = 1.
        assert_eq!(t().kernel_length(0.05), 1);
        // r=0.07 -> raw 3.5, rem 1.5 -> 2 + 1 = 3.
        assert_eq!(t().kernel_length(0.07), 3);
    }

    #[test]
    fn kernel_length_floors_at_one() {
        assert_eq!(t().kernel_length(0.0), 1);
        assert_eq!(t().kernel_length(0.001), 1);
    }

    #[test]
    fn thickness_sentinels_pass_through() {
        assert_eq!(t().thickness(-1.0), -1);
        assert_eq!(t().thickness(0.0), 0);
        assert_eq!(t().thickness(0.05), 2);
        assert_eq!(t().thickness(1.0), 50);
    }

    #[test]
    fn angle_flips_sign() {
        assert_eq!(t().angle_to_deg(0.0), 0.0);
        assert!((t().angle_to_deg(std::f64::consts::PI) + 180.0).abs() < 1e-12);
        assert!((t().angle_to_deg(-std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn nan_input_is_callers_problem_but_does_not_panic() {
        // Boundary case: the contract leaves NaN undefined, but the mapping
        // must not panic.
        let _ = t().x_to_px(f64::NAN);
        let _ = t().kernel_length(f64::NAN);
    }
}
