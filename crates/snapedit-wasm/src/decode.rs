//! Image decoding bindings (picker boundary).

use crate::types::JsBitmap;
use wasm_bindgen::prelude::*;

/// Decode picked image bytes (JPEG or PNG) into a bitmap.
///
/// EXIF orientation is applied during decode, so the returned pixels are
/// upright.
///
/// # Errors
///
/// Throws with the decode error message. The host keeps the picker open and
/// lets the user retry; a failure is also noted on the browser console.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const bitmap = decode_image(bytes);
/// console.log(`Decoded ${bitmap.width}x${bitmap.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    match snapedit_core::decode_image(bytes) {
        Ok(bitmap) => Ok(JsBitmap::from_bitmap(bitmap)),
        Err(e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&JsValue::from_str(&format!("decode failed: {e}")));
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
