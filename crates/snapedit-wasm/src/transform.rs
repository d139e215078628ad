//! View-to-image mapping and crop bindings.
//!
//! The host draws the crop overlay inside the aspect-fit image view and
//! reports its rectangle in view points; these bindings convert it to pixel
//! space and extract the cropped bitmap.

use crate::types::JsBitmap;
use snapedit_core::geometry::{CropRect, ViewFrame, ViewRect};
use snapedit_core::{apply_crop as core_crop, map_view_to_image as core_map};
use wasm_bindgen::prelude::*;

/// A pixel-space crop rectangle for JavaScript.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct JsCropRect {
    inner: CropRect,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

/// Map a view-space overlay rectangle to image pixel space.
///
/// The overlay must be expressed in the image view's own coordinate space;
/// `frame_*` describe the rectangle the aspect-fit image occupies. The
/// result is clamped to the image bounds.
///
/// # Errors
///
/// Throws when the overlay has no usable intersection with the image or the
/// frame has no area.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_view_to_image(
    view_x: f64,
    view_y: f64,
    view_width: f64,
    view_height: f64,
    frame_x: f64,
    frame_y: f64,
    frame_width: f64,
    frame_height: f64,
    image_width: u32,
    image_height: u32,
) -> Result<JsCropRect, JsValue> {
    let view = ViewRect::new(view_x, view_y, view_width, view_height);
    let frame = ViewFrame::new(frame_x, frame_y, frame_width, frame_height);

    core_map(view, frame, image_width, image_height)
        .map(|inner| JsCropRect { inner })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a pixel-space rectangle from a bitmap.
///
/// # Errors
///
/// Throws when the rectangle is degenerate or out of bounds.
#[wasm_bindgen]
pub fn apply_crop(
    image: &JsBitmap,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<JsBitmap, JsValue> {
    let rect = CropRect::new(x, y, width, height);
    core_crop(image.as_bitmap(), rect)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Map a view-space overlay to pixel space and crop in one call.
///
/// Convenience for the crop confirmation path: the host passes the overlay
/// and frame straight from its layout and gets the cropped bitmap back.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn crop_to_view_rect(
    image: &JsBitmap,
    view_x: f64,
    view_y: f64,
    view_width: f64,
    view_height: f64,
    frame_x: f64,
    frame_y: f64,
    frame_width: f64,
    frame_height: f64,
) -> Result<JsBitmap, JsValue> {
    let view = ViewRect::new(view_x, view_y, view_width, view_height);
    let frame = ViewFrame::new(frame_x, frame_y, frame_width, frame_height);
    let bitmap = image.as_bitmap();

    let rect = core_map(view, frame, bitmap.width, bitmap.height)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    core_crop(bitmap, rect)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
