//! View-space to image-space coordinate mapping.
//!
//! The crop overlay is dragged around in the coordinate space of an
//! aspect-fit image view, measured in points. Confirming the crop converts
//! that view-space rectangle into a pixel-space rectangle on the decoded
//! bitmap via a single uniform scale.
//!
//! The overlay is a subview of the image view itself, so the mapping needs
//! no letterbox offset correction: the scale factor alone relates the two
//! coordinate spaces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for crop-region computation and application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropError {
    /// The crop rectangle has no usable intersection with the image.
    #[error("Crop region is empty or lies outside the image bounds")]
    InvalidCropRegion,

    /// The displayed image frame has zero or negative size.
    #[error("Displayed image frame has no area")]
    EmptyFrame,
}

/// A rectangle in on-screen view coordinates (points).
///
/// Mutated live by drag gestures; exists only for the lifetime of the crop
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle in view coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle's center by an incremental gesture translation.
    ///
    /// The caller resets the gesture translation to zero after each
    /// application, so repeated small deltas accumulate correctly no matter
    /// how often the gesture is sampled.
    pub fn drag_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// The rectangle an aspect-fit image occupies within its container (points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewFrame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A rectangle in image pixel space.
///
/// Invariant: `x + width <= image_width`, `y + height <= image_height`, and
/// both dimensions are at least 1. [`map_view_to_image`] is the only
/// sanctioned constructor for crop regions derived from gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether the rectangle lies fully inside an image of the given
    /// dimensions and is non-degenerate.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width >= 1
            && self.height >= 1
            && self.x.checked_add(self.width).is_some_and(|r| r <= image_width)
            && self.y.checked_add(self.height).is_some_and(|b| b <= image_height)
    }
}

/// Convert a view-space rectangle into an image-space crop rectangle.
///
/// Computes `scale = image_width / frame.width` (uniform because the image
/// view preserves aspect ratio) and scales all four components of the
/// rectangle. The result is clamped to the image bounds; a rectangle whose
/// intersection with the image is empty or degenerate is rejected.
///
/// # Arguments
///
/// * `view` - Crop overlay rectangle in the image view's coordinate space
/// * `frame` - Rectangle the displayed image occupies, in points
/// * `image_width` - Native image width in pixels
/// * `image_height` - Native image height in pixels
///
/// # Errors
///
/// Returns `CropError::EmptyFrame` when the displayed frame has no area and
/// `CropError::InvalidCropRegion` when nothing of the overlay lands on the
/// image.
pub fn map_view_to_image(
    view: ViewRect,
    frame: ViewFrame,
    image_width: u32,
    image_height: u32,
) -> Result<CropRect, CropError> {
    if frame.width <= 0.0 || frame.height <= 0.0 {
        return Err(CropError::EmptyFrame);
    }
    if image_width == 0 || image_height == 0 {
        return Err(CropError::InvalidCropRegion);
    }

    let scale = image_width as f64 / frame.width;

    let left = view.x * scale;
    let top = view.y * scale;
    let right = (view.x + view.width) * scale;
    let bottom = (view.y + view.height) * scale;

    // Clamp to the valid intersection with the image
    let left = left.max(0.0);
    let top = top.max(0.0);
    let right = right.min(image_width as f64);
    let bottom = bottom.min(image_height as f64);

    if right - left < 1.0 || bottom - top < 1.0 {
        return Err(CropError::InvalidCropRegion);
    }

    let x = (left.round() as u32).min(image_width - 1);
    let y = (top.round() as u32).min(image_height - 1);
    let right_px = (right.round() as u32).clamp(x + 1, image_width);
    let bottom_px = (bottom.round() as u32).clamp(y + 1, image_height);

    Ok(CropRect::new(x, y, right_px - x, bottom_px - y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_scenario() {
        // 200x200 overlay at (50, 50) in a 400-point frame over a 1200px image
        let view = ViewRect::new(50.0, 50.0, 200.0, 200.0);
        let frame = ViewFrame::new(0.0, 0.0, 400.0, 400.0);

        let rect = map_view_to_image(view, frame, 1200, 1200).unwrap();
        assert_eq!(rect, CropRect::new(150, 150, 600, 600));
    }

    #[test]
    fn test_identity_scale() {
        let view = ViewRect::new(10.0, 20.0, 30.0, 40.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let rect = map_view_to_image(view, frame, 100, 100).unwrap();
        assert_eq!(rect, CropRect::new(10, 20, 30, 40));
    }

    #[test]
    fn test_scale_factor_cancels() {
        // Only the ratio of native size to frame size matters
        let view = ViewRect::new(25.0, 25.0, 50.0, 50.0);
        let a = map_view_to_image(view, ViewFrame::new(0.0, 0.0, 200.0, 200.0), 800, 800).unwrap();
        let b = map_view_to_image(view, ViewFrame::new(0.0, 0.0, 100.0, 100.0), 400, 400).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_overlap_clamps() {
        // Overlay pokes past the right and bottom edges
        let view = ViewRect::new(80.0, 80.0, 40.0, 40.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let rect = map_view_to_image(view, frame, 100, 100).unwrap();
        assert_eq!(rect, CropRect::new(80, 80, 20, 20));
    }

    #[test]
    fn test_negative_origin_clamps() {
        let view = ViewRect::new(-20.0, -20.0, 60.0, 60.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let rect = map_view_to_image(view, frame, 100, 100).unwrap();
        assert_eq!(rect, CropRect::new(0, 0, 40, 40));
    }

    #[test]
    fn test_fully_outside_rejected() {
        let view = ViewRect::new(150.0, 150.0, 50.0, 50.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let result = map_view_to_image(view, frame, 100, 100);
        assert_eq!(result, Err(CropError::InvalidCropRegion));
    }

    #[test]
    fn test_degenerate_overlay_rejected() {
        let view = ViewRect::new(50.0, 50.0, 0.0, 0.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let result = map_view_to_image(view, frame, 100, 100);
        assert_eq!(result, Err(CropError::InvalidCropRegion));
    }

    #[test]
    fn test_empty_frame_rejected() {
        let view = ViewRect::new(10.0, 10.0, 20.0, 20.0);
        let frame = ViewFrame::new(0.0, 0.0, 0.0, 100.0);

        let result = map_view_to_image(view, frame, 100, 100);
        assert_eq!(result, Err(CropError::EmptyFrame));
    }

    #[test]
    fn test_zero_size_image_rejected() {
        let view = ViewRect::new(10.0, 10.0, 20.0, 20.0);
        let frame = ViewFrame::new(0.0, 0.0, 100.0, 100.0);

        let result = map_view_to_image(view, frame, 0, 100);
        assert_eq!(result, Err(CropError::InvalidCropRegion));
    }

    #[test]
    fn test_drag_accumulates_incremental_deltas() {
        let mut rect = ViewRect::new(50.0, 50.0, 200.0, 200.0);

        // Many small deltas, as a pan gesture delivers them
        for _ in 0..10 {
            rect.drag_by(3.0, -2.0);
        }

        assert_eq!(rect.x, 80.0);
        assert_eq!(rect.y, 30.0);
        // Size is untouched by dragging
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn test_drag_moves_center() {
        let mut rect = ViewRect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.center(), (50.0, 50.0));

        rect.drag_by(10.0, 20.0);
        assert_eq!(rect.center(), (60.0, 70.0));
    }

    #[test]
    fn test_crop_rect_fits_within() {
        assert!(CropRect::new(0, 0, 100, 100).fits_within(100, 100));
        assert!(CropRect::new(50, 50, 50, 50).fits_within(100, 100));
        assert!(!CropRect::new(50, 50, 51, 50).fits_within(100, 100));
        assert!(!CropRect::new(0, 0, 0, 10).fits_within(100, 100));
        assert!(!CropRect::new(u32::MAX, 0, 2, 2).fits_within(100, 100));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
