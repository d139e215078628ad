//! Color-controls stage: saturation, brightness, and contrast in one pass.
//!
//! Mirrors the platform color-controls filter the flow was built around:
//! saturation is a luminance mix, brightness is additive, contrast scales
//! about mid-gray. All three read from the same normalized source value, in
//! that order, per pixel.

use crate::luminance::luminance;
use crate::Adjustments;

/// Whether the stage would change any pixel.
pub(super) fn is_active(adjustments: &Adjustments) -> bool {
    adjustments.brightness != 0.0 || adjustments.contrast != 1.0 || adjustments.saturation != 1.0
}

/// Apply saturation, brightness, and contrast to an RGB buffer in place.
pub(super) fn apply(pixels: &mut [u8], adjustments: &Adjustments) {
    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        (r, g, b) = apply_saturation(r, g, b, adjustments.saturation);
        (r, g, b) = apply_brightness(r, g, b, adjustments.brightness);
        (r, g, b) = apply_contrast(r, g, b, adjustments.contrast);

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
}

/// Apply saturation as a mix between the pixel and its luminance.
///
/// 0.0 collapses to grayscale, 1.0 is unchanged, values above 1.0 push the
/// channels away from the luminance.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, saturation: f32) -> (f32, f32, f32) {
    if saturation == 1.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    (
        gray + (r - gray) * saturation,
        gray + (g - gray) * saturation,
        gray + (b - gray) * saturation,
    )
}

/// Apply brightness as a flat additive shift (-1.0 to 1.0).
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, brightness: f32) -> (f32, f32, f32) {
    if brightness == 0.0 {
        return (r, g, b);
    }
    (r + brightness, g + brightness, b + brightness)
}

/// Apply contrast as a scale about mid-gray.
///
/// Formula: `output = (input - 0.5) * contrast + 0.5`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: f32) -> (f32, f32, f32) {
    if contrast == 1.0 {
        return (r, g, b);
    }
    let midpoint = 0.5;
    (
        (r - midpoint) * contrast + midpoint,
        (g - midpoint) * contrast + midpoint,
        (b - midpoint) * contrast + midpoint,
    )
}
