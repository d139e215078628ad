//! WASM-compatible wrapper types for image data.
//!
//! JavaScript-friendly wrappers around the core bitmap type, handling the
//! conversion between Rust and JavaScript data representations.

use snapedit_core::Bitmap;
use wasm_bindgen::prelude::*;

/// A decoded bitmap wrapper for JavaScript.
///
/// Wraps the core `Bitmap` and exposes dimensions, the display scale
/// factor, and pixel data.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory; `pixels()` copies it out to a
/// JavaScript `Uint8Array`. Keep the bitmap in WASM memory between edits
/// and extract pixels only for display.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsBitmap {
        JsBitmap {
            inner: Bitmap::new(width, height, pixels),
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the display scale factor (points to pixels)
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.inner.scale
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGB pixel data as Uint8Array (copies out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    /// Wrap a core Bitmap. Internal constructor used by the bindings.
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core Bitmap.
    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_creation() {
        let img = JsBitmap::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.scale(), 1.0);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_bitmap_pixels_copy_out() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8]; // 2 RGB pixels
        let img = JsBitmap::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_bitmap() {
        let bitmap = Bitmap::new(200, 100, vec![0u8; 200 * 100 * 3]);
        let js_img = JsBitmap::from_bitmap(bitmap);
        assert_eq!(js_img.width(), 200);
        assert_eq!(js_img.height(), 100);
    }

    #[test]
    fn test_as_bitmap() {
        let js_img = JsBitmap::new(50, 25, vec![128u8; 50 * 25 * 3]);
        let bitmap = js_img.as_bitmap();
        assert_eq!(bitmap.width, 50);
        assert_eq!(bitmap.height, 25);
    }
}
