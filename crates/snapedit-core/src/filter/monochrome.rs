//! Monochrome stage: grayscale conversion of the color-controls output.

use crate::luminance::luminance_u8;
use crate::Adjustments;

/// The stage runs only when the monochrome toggle is on.
pub(super) fn is_active(adjustments: &Adjustments) -> bool {
    adjustments.monochrome
}

/// Replace each pixel with its BT.709 luminance.
pub(super) fn apply(pixels: &mut [u8], _adjustments: &Adjustments) {
    for chunk in pixels.chunks_exact_mut(3) {
        let gray = luminance_u8(chunk[0], chunk[1], chunk[2]);
        chunk[0] = gray;
        chunk[1] = gray;
        chunk[2] = gray;
    }
}
