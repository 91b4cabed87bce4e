//! Slider-based adjustments (temperature, tint, contrast, saturation).
//!
//! Every function works on RGB in the `0..=255` float domain, clamps its
//! result back into that range, and returns the input untouched when its
//! control is exactly zero. The zero guard is part of the contract: it keeps
//! a disabled step from perturbing the output through float rounding.

/// Rec. 601 luminance weights.
pub const LUMA_REC601: [f32; 3] = [0.299, 0.587, 0.114];

/// Maximum channel shift produced by temperature or tint at ±100.
const SHIFT_RANGE: f32 = 30.0;

/// Contrast pivot in the 8-bit domain.
const CONTRAST_PIVOT: f32 = 128.0;

/// Clamp a channel value into `[0, 255]`.
#[inline]
pub fn clamp_channel(value: f32) -> f32 {
    value.clamp(0.0, 255.0)
}

/// Rec. 601 luminance of an RGB triple, in the same domain as the input.
#[inline]
pub fn luminance(rgb: [f32; 3]) -> f32 {
    rgb[0] * LUMA_REC601[0] + rgb[1] * LUMA_REC601[1] + rgb[2] * LUMA_REC601[2]
}

/// Shift red up and blue down (or the reverse for negative values).
///
/// ```text
/// shift = temperature / 100 × 30
/// r' = r + shift,  b' = b − shift
/// ```
pub fn apply_temperature(rgb: [f32; 3], temperature: f32) -> [f32; 3] {
    if temperature == 0.0 {
        return rgb;
    }

    let shift = temperature / 100.0 * SHIFT_RANGE;
    [
        clamp_channel(rgb[0] + shift),
        rgb[1],
        clamp_channel(rgb[2] - shift),
    ]
}

/// Shift green along the green–magenta axis.
///
/// ```text
/// g' = g + tint / 100 × 30
/// ```
pub fn apply_tint(rgb: [f32; 3], tint: f32) -> [f32; 3] {
    if tint == 0.0 {
        return rgb;
    }

    let shift = tint / 100.0 * SHIFT_RANGE;
    [rgb[0], clamp_channel(rgb[1] + shift), rgb[2]]
}

/// Scale distance from the mid-gray pivot.
///
/// ```text
/// c = contrast / 100 × 2.55
/// factor = 259 × (c + 255) / (255 × (259 − c))
/// out = factor × (in − 128) + 128
/// ```
///
/// A channel sitting exactly on the pivot is unchanged for any contrast.
pub fn apply_contrast(rgb: [f32; 3], contrast: f32) -> [f32; 3] {
    if contrast == 0.0 {
        return rgb;
    }

    let factor = contrast_factor(contrast);
    rgb.map(|c| clamp_channel(factor * (c - CONTRAST_PIVOT) + CONTRAST_PIVOT))
}

/// Multiplier applied around the pivot for a contrast control value.
pub fn contrast_factor(contrast: f32) -> f32 {
    let c = contrast / 100.0 * 2.55;
    259.0 * (c + 255.0) / (255.0 * (259.0 - c))
}

/// Blend each channel toward (negative) or away from (positive) luminance.
///
/// ```text
/// L = 0.299r + 0.587g + 0.114b
/// out = L + (in − L) × (1 + saturation / 100)
/// ```
///
/// `saturation = -100` produces grayscale at `L`.
pub fn apply_saturation(rgb: [f32; 3], saturation: f32) -> [f32; 3] {
    if saturation == 0.0 {
        return rgb;
    }

    let luma = luminance(rgb);
    let factor = 1.0 + saturation / 100.0;
    rgb.map(|c| clamp_channel(luma + (c - luma) * factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_temperature_warms_red_and_cools_blue() {
        let result = apply_temperature([100.0, 100.0, 100.0], 50.0);
        assert_eq!(result, [115.0, 100.0, 85.0]);
    }

    #[test]
    fn test_negative_temperature_cools() {
        let result = apply_temperature([100.0, 100.0, 100.0], -100.0);
        assert_eq!(result, [70.0, 100.0, 130.0]);
    }

    #[test]
    fn test_temperature_clamps_at_bounds() {
        let result = apply_temperature([250.0, 0.0, 10.0], 100.0);
        assert_eq!(result, [255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tint_only_moves_green() {
        let result = apply_tint([10.0, 20.0, 30.0], -50.0);
        assert_eq!(result, [10.0, 5.0, 30.0]);
    }

    #[test]
    fn test_contrast_pivot_is_fixed() {
        for contrast in [-100.0, -25.0, 40.0, 100.0] {
            let result = apply_contrast([128.0, 128.0, 128.0], contrast);
            assert_eq!(result, [128.0, 128.0, 128.0], "contrast {contrast}");
        }
    }

    #[test]
    fn test_contrast_increases_spread() {
        let result = apply_contrast([200.0, 60.0, 128.0], 60.0);
        assert!(result[0] > 200.0);
        assert!(result[1] < 60.0);
    }

    #[test]
    fn test_contrast_factor_is_one_at_zero() {
        assert!((contrast_factor(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_full_desaturation_produces_luminance_gray() {
        let rgb = [200.0, 50.0, 50.0];
        let expected = 0.299 * 200.0 + 0.587 * 50.0 + 0.114 * 50.0;
        let result = apply_saturation(rgb, -100.0);
        for (i, value) in result.iter().enumerate() {
            assert!(
                (value - expected).abs() < EPSILON,
                "channel {i}: {value:.6} vs {expected:.6}"
            );
        }
    }

    #[test]
    fn test_zero_controls_return_input_untouched() {
        let rgb = [12.5, 200.25, 0.75];
        assert_eq!(apply_temperature(rgb, 0.0), rgb);
        assert_eq!(apply_tint(rgb, 0.0), rgb);
        assert_eq!(apply_contrast(rgb, 0.0), rgb);
        assert_eq!(apply_saturation(rgb, 0.0), rgb);
    }
}
