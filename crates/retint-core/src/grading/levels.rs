//! Whites and blacks adjustments for the extended tone stage.

use super::sliders::clamp_channel;

/// Brightest-channel fraction above which a pixel counts as a white.
const WHITES_THRESHOLD: f32 = 0.9 * 255.0;
/// Darkest-channel fraction below which a pixel counts as a black.
const BLACKS_THRESHOLD: f32 = 0.1 * 255.0;

/// Scale near-white pixels.
///
/// ```text
/// if max(r, g, b) > 0.9 × 255:  out = in × (1 + whites / 100 × 0.3)
/// ```
pub fn apply_whites(rgb: [f32; 3], whites: f32) -> [f32; 3] {
    if whites == 0.0 {
        return rgb;
    }

    let max_channel = rgb[0].max(rgb[1]).max(rgb[2]);
    if max_channel <= WHITES_THRESHOLD {
        return rgb;
    }
    let factor = 1.0 + whites / 100.0 * 0.3;
    rgb.map(|c| clamp_channel(c * factor))
}

/// Scale near-black pixels.
///
/// ```text
/// if min(r, g, b) < 0.1 × 255:  out = in × (1 + blacks / 100 × 0.2)
/// ```
pub fn apply_blacks(rgb: [f32; 3], blacks: f32) -> [f32; 3] {
    if blacks == 0.0 {
        return rgb;
    }

    let min_channel = rgb[0].min(rgb[1]).min(rgb[2]);
    if min_channel >= BLACKS_THRESHOLD {
        return rgb;
    }
    let factor = 1.0 + blacks / 100.0 * 0.2;
    rgb.map(|c| clamp_channel(c * factor))
}
