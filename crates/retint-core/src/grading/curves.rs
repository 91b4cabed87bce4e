//! Tone curve interpolation and per-channel lookup tables.
//!
//! A tone curve has five control points at fixed, evenly spaced inputs, so
//! the segment for any input is found directly. Between points the curve is
//! a Catmull-Rom spline (C1 continuous, passes through every point); the
//! outer neighbors are mirrored so the ends stay straight:
//! ```text
//! q(t) = 0.5 × ((2×P1) + (-P0 + P2)×t + (2×P0 - 5×P1 + 4×P2 - P3)×t² + (-P0 + 3×P1 - 3×P2 + P3)×t³)
//! ```
//! Curves are baked once per render into 256-entry tables so the per-pixel
//! cost is a lookup.

use crate::transform::params::{AdjustmentParams, CONTROL_LEVELS, ToneCurve};

/// Entries in a baked channel table, one per 8-bit input level.
pub const CURVE_LUT_SIZE: usize = 256;

const SEGMENTS: usize = CONTROL_LEVELS.len() - 1;

/// Evaluate a curve's normalized output at normalized input `x` in `[0, 1]`.
pub fn sample_curve(curve: &ToneCurve, x: f32) -> f32 {
    let ys = curve.levels().map(|level| level / 100.0);
    let scaled = x.clamp(0.0, 1.0) * SEGMENTS as f32;
    let segment = (scaled.floor() as usize).min(SEGMENTS - 1);
    let t = scaled - segment as f32;

    let p1 = ys[segment];
    let p2 = ys[segment + 1];
    let p0 = if segment > 0 { ys[segment - 1] } else { 2.0 * p1 - p2 };
    let p3 = if segment + 2 <= SEGMENTS {
        ys[segment + 2]
    } else {
        2.0 * p2 - p1
    };
    catmull_rom(p0, p1, p2, p3, t)
}

fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// A tone curve baked into an 8-bit domain lookup table.
#[derive(Debug, Clone)]
pub struct ChannelLut {
    table: Vec<f32>,
}

impl ChannelLut {
    /// Bake a tone curve. Outputs are in `0..=255`.
    pub fn bake(curve: &ToneCurve) -> Self {
        let last = (CURVE_LUT_SIZE - 1) as f32;
        let table = (0..CURVE_LUT_SIZE)
            .map(|i| (sample_curve(curve, i as f32 / last) * 255.0).clamp(0.0, 255.0))
            .collect();
        Self { table }
    }

    /// Look up a channel value in `0..=255`, interpolating between entries.
    pub fn apply(&self, value: f32) -> f32 {
        let x = value.clamp(0.0, 255.0);
        let lo = x.floor() as usize;
        let hi = (lo + 1).min(CURVE_LUT_SIZE - 1);
        let frac = x - lo as f32;
        self.table[lo] + (self.table[hi] - self.table[lo]) * frac
    }
}

/// Baked tables for the master and per-channel curves of a parameter set.
///
/// Identity curves are not baked and are skipped when applying.
#[derive(Debug, Clone, Default)]
pub struct CurveLuts {
    rgb: Option<ChannelLut>,
    red: Option<ChannelLut>,
    green: Option<ChannelLut>,
    blue: Option<ChannelLut>,
}

impl CurveLuts {
    pub fn bake(params: &AdjustmentParams) -> Self {
        let bake = |curve: &ToneCurve| (!curve.is_identity()).then(|| ChannelLut::bake(curve));
        Self {
            rgb: bake(&params.rgb_curve),
            red: bake(&params.red_curve),
            green: bake(&params.green_curve),
            blue: bake(&params.blue_curve),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rgb.is_none() && self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    /// Apply the master curve to all channels, then each channel's own curve.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut out = rgb;
        if let Some(master) = &self.rgb {
            out = out.map(|c| master.apply(c));
        }
        for (value, lut) in out.iter_mut().zip([&self.red, &self.green, &self.blue]) {
            if let Some(lut) = lut {
                *value = lut.apply(*value);
            }
        }
        out
    }
}
