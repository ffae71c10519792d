//! easel: a small 2D vector-drawing library.
//!
//! The central type is [`Canvas`]: a fixed-size RGBA pixel buffer with a
//! normalized, aspect-preserving coordinate system. Logical coordinates are
//! centered at the canvas middle and scaled so the x range
//! `[-extent, +extent]` spans the full width; [`transform::Transform`] maps
//! them to discrete pixels.
//!
//! [`artists`] provides composable shape primitives that paint through that
//! transform, and [`blend`] provides the layer compositing (overlay, add,
//! subtract) used to merge canvases.
//!
//! ```no_run
//! use easel::{Canvas, Circle};
//!
//! let mut canvas = Canvas::default();
//! canvas.apply(&Circle::new(0.0, 0.0, 1.0).color("r"))?;
//! canvas.save("circle.png")?;
//! # Ok::<(), easel::Error>(())
//! ```

pub mod artists;
pub mod blend;
pub mod canvas;
pub mod color;
pub mod error;
pub mod io;
pub mod raster;
pub mod stack;
pub mod transform;

pub use artists::{Artist, Circle, Ellipse, Line, Polyline, Rectangle};
pub use blend::{BlendMode, PaintMode};
pub use canvas::Canvas;
pub use color::{ColorSpec, Rgba};
pub use error::{Error, Result};
pub use io::load;
pub use stack::{gridstack, hstack, vstack};
pub use transform::{LineStyle, Transform};
