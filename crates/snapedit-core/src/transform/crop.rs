//! Image cropping.
//!
//! Extracts a pixel-space sub-rectangle from a bitmap. The rectangle
//! normally comes out of [`crate::geometry::map_view_to_image`], which has
//! already clamped it to the image bounds; this module re-validates so a
//! hand-built rectangle cannot index past the source buffer.

use crate::decode::Bitmap;
use crate::geometry::{CropError, CropRect};

/// Extract the given sub-rectangle into a new bitmap.
///
/// # Arguments
///
/// * `image` - Source bitmap to crop
/// * `rect` - Region to extract, in image pixel coordinates
///
/// # Returns
///
/// A new `Bitmap` containing only the requested region. The display scale
/// factor of the source is carried over.
///
/// # Errors
///
/// Returns `CropError::InvalidCropRegion` when the rectangle is degenerate
/// or extends past the image bounds.
pub fn apply_crop(image: &Bitmap, rect: CropRect) -> Result<Bitmap, CropError> {
    if !rect.fits_within(image.width, image.height) {
        return Err(CropError::InvalidCropRegion);
    }

    // Fast path: full-image crop is a plain copy
    if rect.x == 0 && rect.y == 0 && rect.width == image.width && rect.height == image.height {
        return Ok(image.clone());
    }

    // Widen before multiplying so large bitmaps cannot wrap the indices
    let src_width = image.width as usize;
    let out_width = rect.width as usize;
    let row_bytes = out_width * 3;

    let mut output = vec![0u8; out_width * rect.height as usize * 3];

    // Copy row by row; rows are contiguous runs of the source buffer
    for y in 0..rect.height as usize {
        let src_y = rect.y as usize + y;
        let src_start = (src_y * src_width + rect.x as usize) * 3;
        let src_end = src_start + row_bytes;
        let dst_start = y * row_bytes;
        let dst_end = dst_start + row_bytes;

        output[dst_start..dst_end].copy_from_slice(&image.pixels[src_start..src_end]);
    }

    Ok(Bitmap {
        width: rect.width,
        height: rect.height,
        scale: image.scale,
        pixels: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel value encodes its position.
    fn test_image(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        Bitmap::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop_is_copy() {
        let img = test_image(100, 100);
        let result = apply_crop(&img, CropRect::new(0, 0, 100, 100)).unwrap();

        assert_eq!(result.width, 100);
        assert_eq!(result.height, 100);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(10, 10);
        let result = apply_crop(&img, CropRect::new(2, 2, 6, 6)).unwrap();

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);
        // First pixel comes from (2, 2): value (2 * 10 + 2) % 256 = 22
        assert_eq!(result.pixels[0], 22);
    }

    #[test]
    fn test_crop_pixel_values_preserved() {
        let img = test_image(10, 10);
        let result = apply_crop(&img, CropRect::new(3, 3, 4, 4)).unwrap();

        // First pixel is (3, 3): (3 * 10 + 3) % 256 = 33
        assert_eq!(&result.pixels[0..3], &[33, 33, 33]);
        // Second row starts at (3, 4): (4 * 10 + 3) % 256 = 43
        let row = (result.width * 3) as usize;
        assert_eq!(result.pixels[row], 43);
    }

    #[test]
    fn test_crop_rectangular_strip() {
        let img = test_image(200, 100);
        let result = apply_crop(&img, CropRect::new(0, 0, 50, 100)).unwrap();

        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
    }

    #[test]
    fn test_crop_out_of_bounds_rejected() {
        let img = test_image(10, 10);

        assert_eq!(
            apply_crop(&img, CropRect::new(8, 8, 5, 5)),
            Err(CropError::InvalidCropRegion)
        );
        assert_eq!(
            apply_crop(&img, CropRect::new(0, 0, 11, 10)),
            Err(CropError::InvalidCropRegion)
        );
    }

    #[test]
    fn test_crop_degenerate_rejected() {
        let img = test_image(10, 10);
        assert_eq!(
            apply_crop(&img, CropRect::new(0, 0, 0, 5)),
            Err(CropError::InvalidCropRegion)
        );
    }

    #[test]
    fn test_crop_preserves_scale() {
        let mut img = test_image(10, 10);
        img.scale = 2.0;

        let result = apply_crop(&img, CropRect::new(1, 1, 4, 4)).unwrap();
        assert_eq!(result.scale, 2.0);
    }

    #[test]
    fn test_crop_leaves_source_untouched() {
        let img = test_image(10, 10);
        let before = img.pixels.clone();
        let _ = apply_crop(&img, CropRect::new(2, 2, 5, 5)).unwrap();
        assert_eq!(img.pixels, before);
    }

    #[test]
    fn test_single_pixel_crop() {
        let img = test_image(10, 10);
        let result = apply_crop(&img, CropRect::new(9, 9, 1, 1)).unwrap();

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        // (9 * 10 + 9) % 256 = 99
        assert_eq!(result.pixels, vec![99, 99, 99]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
