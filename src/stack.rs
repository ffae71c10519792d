//! Canvas stacking: horizontal, vertical, and grid concatenation.
//!
//! Stacking is plain buffer concatenation, not compositing: the output
//! rows/columns are copied from the inputs verbatim. The first canvas
//! donates extent and background metadata.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::{Error, Result};

/// Concatenates canvases left to right. All heights must match.
pub fn hstack(canvases: &[Canvas]) -> Result<Canvas> {
    let first = canvases.first().ok_or(Error::InvalidDimension {
        width: 0,
        height: 0,
        extent: 0.0,
    })?;
    let height = first.height();
    for c in canvases {
        if c.height() != height {
            return Err(Error::DimensionMismatch {
                lhs_width: first.width(),
                lhs_height: height,
                rhs_width: c.width(),
                rhs_height: c.height(),
            });
        }
    }

    let total_w: u32 = canvases.iter().map(Canvas::width).sum();
    let mut data = vec![Rgba::ZERO; total_w as usize * height as usize].into_boxed_slice();
    for row in 0..height as usize {
        let mut offset = row * total_w as usize;
        for c in canvases {
            let w = c.width() as usize;
            let src = &c.pixels()[row * w..(row + 1) * w];
            data[offset..offset + w].copy_from_slice(src);
            offset += w;
        }
    }
    Ok(Canvas::from_parts(
        total_w,
        height,
        first.extent(),
        first.background(),
        data,
    ))
}

/// Concatenates canvases top to bottom. All widths must match.
pub fn vstack(canvases: &[Canvas]) -> Result<Canvas> {
    let first = canvases.first().ok_or(Error::InvalidDimension {
        width: 0,
        height: 0,
        extent: 0.0,
    })?;
    let width = first.width();
    for c in canvases {
        if c.width() != width {
            return Err(Error::DimensionMismatch {
                lhs_width: width,
                lhs_height: first.height(),
                rhs_width: c.width(),
                rhs_height: c.height(),
            });
        }
    }

    let total_h: u32 = canvases.iter().map(Canvas::height).sum();
    let mut data = Vec::with_capacity(width as usize * total_h as usize);
    for c in canvases {
        data.extend_from_slice(c.pixels());
    }
    Ok(Canvas::from_parts(
        width,
        total_h,
        first.extent(),
        first.background(),
        data.into_boxed_slice(),
    ))
}

/// Stacks a grid of canvases: each inner slice becomes one row (hstack),
/// and the rows stack vertically.
pub fn gridstack(rows: &[Vec<Canvas>]) -> Result<Canvas> {
    let stacked: Vec<Canvas> = rows.iter().map(|row| hstack(row)).collect::<Result<_>>()?;
    vstack(&stacked)
}
