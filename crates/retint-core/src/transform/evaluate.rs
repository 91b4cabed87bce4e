//! Core transform evaluation: applies the adjustment chain to pixels.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::RetintError;
use crate::grading::curves::CurveLuts;
use crate::grading::levels::{apply_blacks, apply_whites};
use crate::grading::sliders::{apply_contrast, apply_saturation, apply_temperature, apply_tint};
use crate::grading::zones::apply_zone_tone;
use crate::image::PixelBuffer;
use crate::transform::params::AdjustmentParams;

/// Switches that change which stages a render runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Also apply whites, blacks, and the four tone curves after the zone step.
    /// Off by default, which leaves those controls without effect on the output.
    pub extended_tone: bool,
}

/// Applies the core adjustment chain to a single RGB pixel:
/// 1. Temperature
/// 2. Tint
/// 3. Contrast around 128
/// 4. Saturation around Rec. 601 luminance
/// 5. Zone tone (shadows / midtones / highlights)
///
/// Input and output are in the `0..=255` float domain. `params` is expected
/// to be clamped already; [`render`] does that once per pass.
pub fn evaluate_pixel(rgb: [f32; 3], params: &AdjustmentParams) -> [f32; 3] {
    let rgb = apply_temperature(rgb, params.temperature);
    let rgb = apply_tint(rgb, params.tint);
    let rgb = apply_contrast(rgb, params.contrast);
    let rgb = apply_saturation(rgb, params.saturation);
    apply_zone_tone(rgb, params.highlights, params.midtones, params.shadows)
}

/// Render `source` with `params` into a new buffer of the same size.
pub fn render(source: &PixelBuffer, params: &AdjustmentParams) -> PixelBuffer {
    render_with(source, params, RenderOptions::default())
}

/// Render with explicit [`RenderOptions`].
pub fn render_with(
    source: &PixelBuffer,
    params: &AdjustmentParams,
    options: RenderOptions,
) -> PixelBuffer {
    let mut target = source.clone();
    render_pixels(source, &mut target, params, options);
    target
}

/// Render into a caller-owned buffer, which must match the source dimensions.
pub fn render_into(
    source: &PixelBuffer,
    params: &AdjustmentParams,
    options: RenderOptions,
    target: &mut PixelBuffer,
) -> Result<(), RetintError> {
    if !source.same_dimensions(target) {
        return Err(RetintError::DimensionMismatch {
            source_width: source.width(),
            source_height: source.height(),
            target_width: target.width(),
            target_height: target.height(),
        });
    }
    render_pixels(source, target, params, options);
    Ok(())
}

fn render_pixels(
    source: &PixelBuffer,
    target: &mut PixelBuffer,
    params: &AdjustmentParams,
    options: RenderOptions,
) {
    let started = Instant::now();
    let params = params.clamped();
    let extended = options.extended_tone.then(|| ExtendedTone::new(&params));

    for (src, dst) in source.pixels().iter().zip(target.pixels_mut()) {
        let rgb = [src[0] as f32, src[1] as f32, src[2] as f32];
        let mut out = evaluate_pixel(rgb, &params);
        if let Some(extended) = &extended {
            out = extended.apply(out);
        }
        *dst = [to_u8(out[0]), to_u8(out[1]), to_u8(out[2]), src[3]];
    }

    tracing::debug!(
        width = source.width(),
        height = source.height(),
        extended = options.extended_tone,
        elapsed_us = started.elapsed().as_micros() as u64,
        "render pass complete"
    );
}

/// Whites, blacks, and baked tone curves, prepared once per pass.
struct ExtendedTone {
    whites: f32,
    blacks: f32,
    curves: CurveLuts,
}

impl ExtendedTone {
    fn new(params: &AdjustmentParams) -> Self {
        Self {
            whites: params.whites,
            blacks: params.blacks,
            curves: CurveLuts::bake(params),
        }
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let rgb = apply_whites(rgb, self.whites);
        let rgb = apply_blacks(rgb, self.blacks);
        if self.curves.is_identity() {
            return rgb;
        }
        self.curves.apply(rgb)
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::params::ToneCurve;

    fn single(rgba: [u8; 4]) -> PixelBuffer {
        PixelBuffer::filled(1, 1, rgba)
    }

    #[test]
    fn test_identity_params_copy_source() {
        let source = PixelBuffer::new(
            2,
            2,
            vec![[0, 0, 0, 0], [255, 255, 255, 255], [12, 200, 97, 128], [128, 64, 32, 1]],
        )
        .expect("valid buffer");
        let out = render(&source, &AdjustmentParams::default());
        assert_eq!(out, source);
    }

    #[test]
    fn test_temperature_scenario() {
        let params = AdjustmentParams {
            temperature: 50.0,
            ..AdjustmentParams::default()
        };
        let out = render(&single([100, 100, 100, 255]), &params);
        assert_eq!(out.pixel(0, 0), Some([115, 100, 85, 255]));
    }

    #[test]
    fn test_alpha_is_untouched() {
        let params = AdjustmentParams {
            contrast: 80.0,
            saturation: 40.0,
            highlights: -30.0,
            ..AdjustmentParams::default()
        };
        let out = render(&single([220, 40, 90, 17]), &params);
        assert_eq!(out.pixel(0, 0).map(|px| px[3]), Some(17));
    }

    #[test]
    fn test_render_clamps_params_before_use() {
        let wild = AdjustmentParams {
            temperature: 1_000.0,
            ..AdjustmentParams::default()
        };
        let capped = AdjustmentParams {
            temperature: 100.0,
            ..AdjustmentParams::default()
        };
        let source = single([100, 100, 100, 255]);
        assert_eq!(render(&source, &wild), render(&source, &capped));
    }

    #[test]
    fn test_curves_are_ignored_without_extended_tone() {
        let params = AdjustmentParams {
            whites: 100.0,
            blacks: -100.0,
            rgb_curve: ToneCurve([0.0, 0.0, 0.0, 0.0, 0.0]),
            ..AdjustmentParams::default()
        };
        let source = single([250, 5, 128, 255]);
        assert_eq!(render(&source, &params), source);
    }

    #[test]
    fn test_extended_tone_applies_curves() {
        let params = AdjustmentParams {
            rgb_curve: ToneCurve([0.0, 0.0, 0.0, 0.0, 0.0]),
            ..AdjustmentParams::default()
        };
        let options = RenderOptions {
            extended_tone: true,
        };
        let out = render_with(&single([250, 5, 128, 255]), &params, options);
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_render_into_rejects_mismatched_target() {
        let source = PixelBuffer::filled(4, 3, [0, 0, 0, 255]);
        let mut target = PixelBuffer::filled(3, 4, [0, 0, 0, 255]);
        let result = render_into(
            &source,
            &AdjustmentParams::default(),
            RenderOptions::default(),
            &mut target,
        );
        assert!(matches!(
            result,
            Err(RetintError::DimensionMismatch {
                source_width: 4,
                target_width: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_render_into_overwrites_target() {
        let source = PixelBuffer::filled(2, 1, [100, 100, 100, 255]);
        let mut target = PixelBuffer::filled(2, 1, [9, 9, 9, 9]);
        let params = AdjustmentParams {
            tint: 100.0,
            ..AdjustmentParams::default()
        };
        render_into(&source, &params, RenderOptions::default(), &mut target)
            .expect("same dimensions");
        assert_eq!(target.pixels(), &[[100, 130, 100, 255]; 2]);
    }
}
