//! PNG output for filled canvases.
//!
//! Unset cells are written fully transparent.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, SandbrushError};

use super::Canvas;

/// Convert a canvas to an image with integer nearest-neighbour scaling.
///
/// A scale whose output size overflows `u32` is a config error.
pub fn to_image(canvas: &Canvas, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let scaled = |side: u32| {
        side.checked_mul(scale).ok_or_else(|| SandbrushError::Config {
            message: format!(
                "Scale {} is too large for a {}x{} canvas",
                scale,
                canvas.width(),
                canvas.height()
            ),
            help: Some("Use a smaller --scale".to_string()),
        })
    };
    let (width, height) = (scaled(canvas.width())?, scaled(canvas.height())?);

    Ok(ImageBuffer::from_fn(width, height, |px, py| {
        match canvas.get(px / scale, py / scale) {
            Some(paint) => Rgba(paint.colour.to_rgba()),
            None => Rgba([0, 0, 0, 0]),
        }
    }))
}

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The filled canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    to_image(canvas, scale)?.save(path).map_err(|e| SandbrushError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, MaterialTag, Paint};
    use tempfile::tempdir;

    fn two_cell_canvas() -> Canvas {
        let mut canvas = Canvas::new(2, 1);
        canvas.set(0, 0, Paint::new(Colour::rgb(45, 45, 45), MaterialTag::Wall));
        canvas
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wall.png");

        write_png(&two_cell_canvas(), &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [45, 45, 45, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]); // Unset
    }

    #[test]
    fn test_to_image_scaled() {
        let img = to_image(&two_cell_canvas(), 3).unwrap();
        assert_eq!(img.dimensions(), (6, 3));
        assert_eq!(img.get_pixel(2, 2).0, [45, 45, 45, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        assert_eq!(to_image(&two_cell_canvas(), 0).unwrap().dimensions(), (2, 1));
    }

    #[test]
    fn test_overflowing_scale_rejected() {
        let mut canvas = Canvas::new(64, 1);
        canvas.set(0, 0, Paint::new(Colour::BLACK, MaterialTag::Wall));
        assert!(to_image(&canvas, 100_000_000).unwrap_err().is_config());

        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");
        assert!(write_png(&canvas, &path, 100_000_000).unwrap_err().is_config());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("wall.png");
        assert!(write_png(&two_cell_canvas(), &path, 1).is_err());
    }
}
