//! The preview filter chain.
//!
//! Renders a preview bitmap from a cropped source and an [`Adjustments`]
//! snapshot. The chain is an ordered list of named stages:
//!
//! 1. `color_controls` - saturation, brightness, and contrast in one pass
//! 2. `monochrome` - grayscale conversion, only when the toggle is on
//!
//! [`render_preview`] is a pure function of `(source, adjustments)`. Every
//! render starts from the supplied source, never from a previous preview, so
//! parameter changes do not compound rounding error.

mod color_controls;
mod monochrome;

use crate::decode::Bitmap;
use crate::Adjustments;
use thiserror::Error;

/// Error types for the filter pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The source pixel buffer does not match its declared dimensions.
    #[error("Malformed bitmap: expected {expected} bytes for {width}x{height} RGB, got {actual}")]
    MalformedBitmap {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// One named stage of the filter chain.
///
/// Each stage is a pure in-place pass over an RGB buffer, parameterized by
/// the adjustments snapshot. `enabled` gates the stage per render.
pub struct FilterStage {
    /// Stage name, for diagnostics and host display.
    pub name: &'static str,
    enabled: fn(&Adjustments) -> bool,
    apply: fn(&mut [u8], &Adjustments),
}

impl FilterStage {
    /// Whether this stage would run for the given adjustments.
    pub fn is_enabled(&self, adjustments: &Adjustments) -> bool {
        (self.enabled)(adjustments)
    }
}

/// The fixed, ordered filter chain.
pub fn stages() -> [FilterStage; 2] {
    [
        FilterStage {
            name: "color_controls",
            enabled: color_controls::is_active,
            apply: color_controls::apply,
        },
        FilterStage {
            name: "monochrome",
            enabled: monochrome::is_active,
            apply: monochrome::apply,
        },
    ]
}

/// Render a preview bitmap from a source bitmap and adjustments.
///
/// Applies the stage chain in order to a copy of the source pixels. Values
/// within the documented parameter ranges pass through untouched; only the
/// final per-channel result clamps to the displayable 0-255 range.
///
/// # Errors
///
/// Returns `FilterError::MalformedBitmap` when the source buffer length does
/// not match its dimensions. The caller keeps its previous preview in that
/// case.
pub fn render_preview(source: &Bitmap, adjustments: &Adjustments) -> Result<Bitmap, FilterError> {
    let expected = source.width as usize * source.height as usize * 3;
    if source.is_empty() || source.pixels.len() != expected {
        return Err(FilterError::MalformedBitmap {
            width: source.width,
            height: source.height,
            expected,
            actual: source.pixels.len(),
        });
    }

    let mut pixels = source.pixels.clone();

    if !adjustments.is_identity() {
        for stage in stages() {
            if stage.is_enabled(adjustments) {
                (stage.apply)(&mut pixels, adjustments);
            }
        }
    }

    Ok(Bitmap {
        width: source.width,
        height: source.height,
        scale: source.scale,
        pixels,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn adjustments_strategy() -> impl Strategy<Value = Adjustments> {
        (-1.0f32..=1.0, 0.5f32..=2.0, 0.0f32..=2.0, any::<bool>()).prop_map(
            |(brightness, contrast, saturation, monochrome)| Adjustments {
                brightness,
                contrast,
                saturation,
                monochrome,
            },
        )
    }

    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |pixels| Bitmap::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: rendering twice with the same inputs is byte-identical.
        #[test]
        fn prop_render_pure(
            source in bitmap_strategy(),
            adj in adjustments_strategy(),
        ) {
            let a = render_preview(&source, &adj).unwrap();
            let b = render_preview(&source, &adj).unwrap();
            prop_assert_eq!(a.pixels, b.pixels);
        }

        /// Property: output dimensions always match the source.
        #[test]
        fn prop_render_preserves_shape(
            source in bitmap_strategy(),
            adj in adjustments_strategy(),
        ) {
            let preview = render_preview(&source, &adj).unwrap();
            prop_assert_eq!(preview.width, source.width);
            prop_assert_eq!(preview.height, source.height);
            prop_assert_eq!(preview.pixels.len(), source.pixels.len());
        }

        /// Property: with monochrome on, every output pixel is gray.
        #[test]
        fn prop_monochrome_output_is_gray(
            source in bitmap_strategy(),
            mut adj in adjustments_strategy(),
        ) {
            adj.monochrome = true;
            let preview = render_preview(&source, &adj).unwrap();
            for chunk in preview.pixels.chunks_exact(3) {
                prop_assert_eq!(chunk[0], chunk[1]);
                prop_assert_eq!(chunk[1], chunk[2]);
            }
        }
    }
}
