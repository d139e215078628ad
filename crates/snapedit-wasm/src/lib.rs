//! Snapedit WASM - WebAssembly bindings for the Snapedit editing pipeline
//!
//! This crate exposes the snapedit-core functionality to the
//! JavaScript/TypeScript host application, which owns the screens of the
//! flow (picker, crop overlay, adjustment sliders, share surface).
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (picker boundary)
//! - `transform` - View-to-image mapping and crop bindings
//! - `filter` - Adjustment parameters and preview rendering
//! - `encode` - JPEG export for the share handoff
//! - `session` - The linear pick/crop/adjust/share session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, Adjustments, render_preview } from '@snapedit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const bitmap = decode_image(bytes);
//!
//! const adj = new Adjustments();
//! adj.brightness = 0.2;
//! const preview = render_preview(bitmap, adj);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod filter;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::encode_jpeg;
pub use filter::{render_preview, Adjustments};
pub use session::JsEditSession;
pub use transform::{apply_crop, crop_to_view_rect, map_view_to_image, JsCropRect};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: set up a panic hook for readable browser-console backtraces
    // when the console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
