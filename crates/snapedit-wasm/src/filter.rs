//! Adjustment parameters and preview rendering bindings.
//!
//! The host rebuilds an [`Adjustments`] snapshot from its slider/toggle
//! state on every change event and calls [`render_preview`] with the
//! cropped source bitmap.

use crate::types::JsBitmap;
use wasm_bindgen::prelude::*;

/// Adjustment parameters wrapper for JavaScript
#[wasm_bindgen]
pub struct Adjustments {
    inner: snapedit_core::Adjustments,
}

#[wasm_bindgen]
impl Adjustments {
    /// Create new adjustments with all controls neutral
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: snapedit_core::Adjustments::new(),
        }
    }

    /// Get brightness (-1.0 to 1.0)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness (-1.0 to 1.0)
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get contrast (0.5 to 2.0)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast (0.5 to 2.0)
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get saturation (0.0 to 2.0)
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation (0.0 to 2.0)
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Get the monochrome toggle
    #[wasm_bindgen(getter)]
    pub fn monochrome(&self) -> bool {
        self.inner.monochrome
    }

    /// Set the monochrome toggle
    #[wasm_bindgen(setter)]
    pub fn set_monochrome(&mut self, value: bool) {
        self.inner.monochrome = value;
    }

    /// Check if rendering with these values would change nothing
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<Adjustments, JsValue> {
        let inner: snapedit_core::Adjustments =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjustments {
    /// Get the inner core snapshot for use in render bindings
    pub(crate) fn inner(&self) -> &snapedit_core::Adjustments {
        &self.inner
    }
}

/// Render a preview from a source bitmap and adjustments.
///
/// A pure function: the same source and adjustments always produce the same
/// preview, and the source is never modified. The host should always pass
/// the cropped source, not a previous preview.
///
/// # Errors
///
/// Throws when the source bitmap is malformed. The host keeps its previous
/// preview displayed in that case.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const adj = new Adjustments();
/// adj.brightness = 0.2;
/// adj.monochrome = true;
///
/// const preview = render_preview(croppedBitmap, adj);
/// ```
#[wasm_bindgen]
pub fn render_preview(image: &JsBitmap, adjustments: &Adjustments) -> Result<JsBitmap, JsValue> {
    snapedit_core::render_preview(image.as_bitmap(), adjustments.inner())
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
