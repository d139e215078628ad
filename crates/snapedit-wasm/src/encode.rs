//! JPEG export bindings for the share handoff.

use crate::types::JsBitmap;
use wasm_bindgen::prelude::*;

/// Encode a bitmap to JPEG bytes for the host share surface.
///
/// # Arguments
///
/// * `image` - The rendered preview to export
/// * `quality` - JPEG quality (1-100); out-of-range values are clamped
///
/// # Errors
///
/// Throws when the bitmap is malformed or encoding fails.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = encode_jpeg(preview, 90);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// await navigator.share({ files: [new File([blob], 'edited.jpg')] });
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsBitmap, quality: u8) -> Result<Vec<u8>, JsValue> {
    snapedit_core::encode_jpeg(image.as_bitmap(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
