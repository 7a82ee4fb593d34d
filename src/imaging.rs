// src/imaging.rs
//! Image resize and free-angle rotation

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::error::{CheatSheetError, Result};

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CheatSheetError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Scale to exactly `width` x `height` with Lanczos3 filtering
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
    check_dimensions(width, height)?;
    Ok(image.resize_exact(width, height, FilterType::Lanczos3))
}

/// Rotate counter-clockwise by `degrees` about the centre.
///
/// The canvas grows to the rotated bounding box; pixels the source does not
/// cover are transparent. Sampling is nearest-neighbour.
pub fn rotate(image: &DynamicImage, degrees: f64) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    check_dimensions(width, height)?;

    let source = image.to_rgba8();
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (w, h) = (f64::from(width), f64::from(height));

    // round() absorbs float noise such as cos(90°) ≈ 6e-17
    let out_w = (w * cos.abs() + h * sin.abs()).round().max(1.0) as u32;
    let out_h = (w * sin.abs() + h * cos.abs()).round().max(1.0) as u32;
    let (half_out_w, half_out_h) = (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);

    let mut rotated = RgbaImage::from_pixel(out_w, out_h, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in rotated.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - half_out_w;
        let dy = f64::from(y) + 0.5 - half_out_h;

        // inverse of the counter-clockwise turn in y-down coordinates
        let sx = (dx * cos - dy * sin + w / 2.0).floor();
        let sy = (dx * sin + dy * cos + h / 2.0).floor();

        if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
            *pixel = *source.get_pixel(sx as u32, sy as u32);
        }
    }

    Ok(rotated)
}
