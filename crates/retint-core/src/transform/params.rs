//! Central parameter struct that defines the whole adjustment.
//!
//! `AdjustmentParams` is the single source of truth for a render. Sliders,
//! curve editors, and presets all write here; the pipeline reads the full
//! struct. Values coming from outside are corrected with [`AdjustmentParams::clamped`]
//! rather than rejected.

use serde::{Deserialize, Serialize};

use crate::error::RetintError;

/// Lower bound for every slider control.
pub const SLIDER_MIN: f32 = -100.0;
/// Upper bound for every slider control.
pub const SLIDER_MAX: f32 = 100.0;
/// Lower bound for a curve level.
pub const LEVEL_MIN: f32 = 0.0;
/// Upper bound for a curve level.
pub const LEVEL_MAX: f32 = 100.0;

/// Fixed input levels of the five curve control points.
pub const CONTROL_LEVELS: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Output levels of a five-point curve, one per entry of [`CONTROL_LEVELS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToneCurve(pub [f32; 5]);

impl ToneCurve {
    /// Output equals input at every control level.
    pub const IDENTITY: Self = Self(CONTROL_LEVELS);

    /// Build from a slice, which must have exactly five entries.
    pub fn from_slice(levels: &[f32]) -> Result<Self, RetintError> {
        let levels: [f32; 5] = levels
            .try_into()
            .map_err(|_| RetintError::InvalidCurve(levels.len()))?;
        Ok(Self(levels).clamped())
    }

    pub fn levels(&self) -> [f32; 5] {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0 == CONTROL_LEVELS
    }

    /// Clamp every level into `[0, 100]`; non-finite levels fall back to the identity level.
    pub fn clamped(self) -> Self {
        let mut levels = self.0;
        for (level, identity) in levels.iter_mut().zip(CONTROL_LEVELS) {
            *level = clamp_or(*level, LEVEL_MIN, LEVEL_MAX, identity);
        }
        Self(levels)
    }
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Channel a curve applies to. Also used as the curve editor's color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveChannel {
    /// Applies to all three color channels.
    Rgb,
    Red,
    Green,
    Blue,
}

impl CurveChannel {
    /// Human-readable label for editor headers.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    /// Stroke color used when drawing this channel's curve.
    pub const fn stroke_color(&self) -> [u8; 3] {
        match self {
            Self::Rgb => [230, 230, 230],
            Self::Red => [239, 68, 68],
            Self::Green => [34, 197, 94],
            Self::Blue => [59, 130, 246],
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [CurveChannel; 4] = [
            CurveChannel::Rgb,
            CurveChannel::Red,
            CurveChannel::Green,
            CurveChannel::Blue,
        ];
        &ALL
    }
}

/// Every control writes here. The pipeline reads the full struct.
///
/// All sliders are in `[-100, 100]` with `0` meaning "no change". Curves are
/// five output levels in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentParams {
    /// Warm (positive) / cool (negative) shift on the red-blue axis.
    pub temperature: f32,
    /// Green (positive) / magenta (negative) shift.
    pub tint: f32,
    pub contrast: f32,
    /// `-100` fully desaturates.
    pub saturation: f32,
    /// Scale for pixels with normalized luminance `>= 0.7`.
    pub highlights: f32,
    /// Scale for pixels with normalized luminance in `[0.3, 0.7)`.
    pub midtones: f32,
    /// Scale for pixels with normalized luminance `< 0.3`.
    pub shadows: f32,
    pub whites: f32,
    pub blacks: f32,
    pub red_curve: ToneCurve,
    pub green_curve: ToneCurve,
    pub blue_curve: ToneCurve,
    pub rgb_curve: ToneCurve,
}

impl Default for AdjustmentParams {
    /// Produces an identity (no-op) adjustment; the image passes through unchanged.
    fn default() -> Self {
        Self {
            temperature: 0.0,
            tint: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            highlights: 0.0,
            midtones: 0.0,
            shadows: 0.0,
            whites: 0.0,
            blacks: 0.0,
            red_curve: ToneCurve::IDENTITY,
            green_curve: ToneCurve::IDENTITY,
            blue_curve: ToneCurve::IDENTITY,
            rgb_curve: ToneCurve::IDENTITY,
        }
    }
}

impl AdjustmentParams {
    /// Copy with every slider clamped into `[-100, 100]` and every curve into `[0, 100]`.
    ///
    /// Non-finite values are replaced by their neutral default.
    pub fn clamped(&self) -> Self {
        let slider = |value: f32| clamp_or(value, SLIDER_MIN, SLIDER_MAX, 0.0);
        Self {
            temperature: slider(self.temperature),
            tint: slider(self.tint),
            contrast: slider(self.contrast),
            saturation: slider(self.saturation),
            highlights: slider(self.highlights),
            midtones: slider(self.midtones),
            shadows: slider(self.shadows),
            whites: slider(self.whites),
            blacks: slider(self.blacks),
            red_curve: self.red_curve.clamped(),
            green_curve: self.green_curve.clamped(),
            blue_curve: self.blue_curve.clamped(),
            rgb_curve: self.rgb_curve.clamped(),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn curve(&self, channel: CurveChannel) -> ToneCurve {
        match channel {
            CurveChannel::Rgb => self.rgb_curve,
            CurveChannel::Red => self.red_curve,
            CurveChannel::Green => self.green_curve,
            CurveChannel::Blue => self.blue_curve,
        }
    }

    /// Replace one channel's curve, clamping its levels.
    pub fn set_curve(&mut self, channel: CurveChannel, curve: ToneCurve) {
        let curve = curve.clamped();
        match channel {
            CurveChannel::Rgb => self.rgb_curve = curve,
            CurveChannel::Red => self.red_curve = curve,
            CurveChannel::Green => self.green_curve = curve,
            CurveChannel::Blue => self.blue_curve = curve,
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
