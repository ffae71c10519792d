//! Raster file I/O, delegated to the `image` codec crate.
//!
//! PNG is the lossless round-trip format: RGB channels survive a save/load
//! cycle exactly. Alpha round-trip is codec-dependent (JPEG drops it
//! entirely) and is never asserted across formats.

use std::path::Path;

use image::{ImageBuffer, Rgba as ImageRgba, RgbaImage};
use log::debug;

use crate::canvas::{Canvas, DEFAULT_EXTENT};
use crate::color::Rgba;
use crate::error::{Error, Result};

impl Canvas {
    /// Encodes the canvas to the format implied by the path extension.
    ///
    /// Formats without an alpha channel (JPEG) get the RGB planes only;
    /// everything else receives the full RGBA buffer.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("saving {}x{} canvas to {:?}", self.width(), self.height(), path);
        let img: RgbaImage =
            ImageBuffer::from_raw(self.width(), self.height(), self.as_bytes().to_vec())
                .expect("canvas buffer length always matches its dimensions");
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            // The JPEG encoder rejects Rgba8 input; drop alpha first.
            Some("jpg") | Some("jpeg") => {
                image::DynamicImage::ImageRgba8(img).to_rgb8().save(path)?
            }
            _ => img.save(path)?,
        }
        Ok(())
    }

    /// Decodes an image file into a canvas.
    ///
    /// The decoded buffer carries no logical metadata, so the canvas gets
    /// the default extent and a transparent black background. A missing
    /// path fails with [`Error::FileNotFound`] before the decoder runs.
    pub fn load(path: impl AsRef<Path>) -> Result<Canvas> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        debug!("loading canvas from {:?}", path);
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        let data: Box<[Rgba]> = img
            .pixels()
            .map(|&ImageRgba([r, g, b, a])| Rgba::new(r, g, b, a))
            .collect();
        Ok(Canvas::from_parts(
            width,
            height,
            DEFAULT_EXTENT,
            Rgba::ZERO,
            data,
        ))
    }
}

/// Loads an image file directly, without constructing a canvas first.
pub fn load(path: impl AsRef<Path>) -> Result<Canvas> {
    Canvas::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_a_missing_file_fails_cleanly() {
        let err = Canvas::load("THIS_IS_A_MISSING_FILE.png").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
