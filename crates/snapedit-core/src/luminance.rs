//! Luminance helpers using ITU-R BT.709 coefficients.
//!
//! Shared by the saturation mix in the color-controls stage and the
//! monochrome stage.

/// BT.709 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// BT.709 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// BT.709 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Luminance of normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Luminance of u8 RGB values, rounded back to u8.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_extremes() {
        assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < f32::EPSILON);
        assert_eq!(luminance_u8(255, 255, 255), 255);
        assert_eq!(luminance_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_gray_preserves_value() {
        for v in [0u8, 64, 128, 192, 255] {
            let lum = luminance_u8(v, v, v);
            assert!((lum as i32 - v as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_green_dominates() {
        // 0.7152 * 255 ≈ 182, far above the red and blue contributions
        assert!(luminance_u8(0, 255, 0) > luminance_u8(255, 0, 0));
        assert!(luminance_u8(255, 0, 0) > luminance_u8(0, 0, 255));
    }
}
