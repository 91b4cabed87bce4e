//! Luminance-zone tonal adjustment (shadows, midtones, highlights).

use serde::{Deserialize, Serialize};

use super::sliders::{clamp_channel, luminance};

/// Normalized luminance at and above which a pixel is a highlight.
pub const HIGHLIGHT_THRESHOLD: f32 = 0.7;
/// Normalized luminance at and above which a pixel is a midtone.
pub const MIDTONE_THRESHOLD: f32 = 0.3;

/// One of the three luminance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneZone {
    Shadows,
    Midtones,
    Highlights,
}

impl ToneZone {
    /// Zone for a normalized luminance in `0..=1`.
    ///
    /// Bands: `[0, 0.3)` shadows, `[0.3, 0.7)` midtones, `[0.7, 1]` highlights.
    pub fn classify(luma: f32) -> Self {
        if luma >= HIGHLIGHT_THRESHOLD {
            Self::Highlights
        } else if luma >= MIDTONE_THRESHOLD {
            Self::Midtones
        } else {
            Self::Shadows
        }
    }

    /// Zone of an RGB triple in the `0..=255` domain.
    pub fn of_rgb(rgb: [f32; 3]) -> Self {
        Self::classify(luminance(rgb) / 255.0)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Shadows => "Shadows",
            Self::Midtones => "Midtones",
            Self::Highlights => "Highlights",
        }
    }
}

/// Scale a pixel by the control of the zone its luminance falls in.
///
/// ```text
/// zone = classify(L / 255)
/// out = in × (1 + zone_control / 100)
/// ```
///
/// Exactly one zone applies per pixel. If that zone's control is zero the
/// pixel is returned untouched.
pub fn apply_zone_tone(
    rgb: [f32; 3],
    highlights: f32,
    midtones: f32,
    shadows: f32,
) -> [f32; 3] {
    let amount = match ToneZone::of_rgb(rgb) {
        ToneZone::Highlights => highlights,
        ToneZone::Midtones => midtones,
        ToneZone::Shadows => shadows,
    };
    if amount == 0.0 {
        return rgb;
    }

    let factor = 1.0 + amount / 100.0;
    rgb.map(|c| clamp_channel(c * factor))
}
