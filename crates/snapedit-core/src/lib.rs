//! Snapedit Core - photo editing pipeline
//!
//! This crate implements the editing flow behind Snapedit: decode a picked
//! image, crop it via a draggable view-space rectangle, apply parametric
//! adjustments with an optional monochrome pass, and hand the rendered
//! preview to a sharing collaborator.
//!
//! The flow is strictly linear (pick, crop, adjust, share) and every
//! transform produces a new [`Bitmap`]; nothing is edited in place.

pub mod decode;
pub mod encode;
pub mod filter;
pub mod geometry;
pub mod luminance;
pub mod session;
pub mod transform;

pub use decode::{decode_image, Bitmap, DecodeError, Orientation};
pub use encode::{encode_jpeg, EncodeError};
pub use filter::{render_preview, FilterError};
pub use geometry::{map_view_to_image, CropError, CropRect, ViewFrame, ViewRect};
pub use session::{EditSession, LoadTicket, SessionError};
pub use transform::apply_crop;

/// Adjustment parameters for the preview render.
///
/// A snapshot of the editing controls, rebuilt by the host on every control
/// change and passed into [`render_preview`]. The render path never reads
/// live control state.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Adjustments {
    /// Additive brightness (-1.0 to 1.0, 0.0 = unchanged)
    pub brightness: f32,
    /// Contrast about mid-gray (0.5 to 2.0, 1.0 = unchanged)
    pub contrast: f32,
    /// Saturation (0.0 = grayscale, 1.0 = unchanged, up to 2.0)
    pub saturation: f32,
    /// Convert the result to a grayscale rendition
    pub monochrome: bool,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            monochrome: false,
        }
    }
}

impl Adjustments {
    /// Create adjustments with all controls at their neutral positions
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if rendering with these values would leave pixels unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
