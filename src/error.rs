//! Error types for the easel library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by canvas construction, compositing, and I/O.
///
/// Every operation either fully succeeds or fails with one of these before
/// mutating its receiver. The library performs no retries and no recovery;
/// callers decide how to report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid canvas dimensions: width={width}, height={height}, extent={extent}")]
    InvalidDimension {
        width: u32,
        height: u32,
        extent: f64,
    },
    #[error("cannot combine canvases of different sizes: {lhs_width}x{lhs_height} vs {rhs_width}x{rhs_height}")]
    DimensionMismatch {
        lhs_width: u32,
        lhs_height: u32,
        rhs_width: u32,
        rhs_height: u32,
    },
    #[error("unknown blend mode {0:?}")]
    UnknownBlendMode(String),
    #[error("unknown color name {0:?}")]
    UnknownColor(String),
    #[error("invalid color channels: expected 3 or 4 values, got {0}")]
    InvalidColor(usize),
    #[error("rescale factors must be positive: dx={dx}, dy={dy}")]
    InvalidScale { dx: f64, dy: f64 },
    #[error("resize takes either a scale factor or an exact output size, not both")]
    ConflictingResizeArguments,
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
