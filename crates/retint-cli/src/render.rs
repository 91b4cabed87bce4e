//! The `render` command: decode, adjust, and export one image.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use retint_core::{
    AdjustmentParams, CurveChannel, EditSession, PresetLibrary, RenderOptions, ToneCurve,
};

use crate::config::CliConfig;
use crate::image_loader::{load_image, save_png, subject_from_path};

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Input image
    pub input: PathBuf,

    /// Output PNG (default: corrected-<name>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start from a named preset
    #[arg(short, long)]
    pub preset: Option<String>,

    /// JSON file with a full adjustment record (replaces the preset)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Also apply whites, blacks, and tone curves
    #[arg(long)]
    pub extended: bool,

    #[command(flatten)]
    pub overrides: ParamOverrides,
}

/// Per-control overrides applied last.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamOverrides {
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub tint: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub saturation: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub highlights: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub midtones: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub shadows: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub whites: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub blacks: Option<f32>,

    /// Master curve as five levels, e.g. 0,20,50,80,100
    #[arg(long, value_parser = parse_curve)]
    pub rgb_curve: Option<ToneCurve>,
    #[arg(long, value_parser = parse_curve)]
    pub red_curve: Option<ToneCurve>,
    #[arg(long, value_parser = parse_curve)]
    pub green_curve: Option<ToneCurve>,
    #[arg(long, value_parser = parse_curve)]
    pub blue_curve: Option<ToneCurve>,
}

impl ParamOverrides {
    pub fn apply(&self, params: &mut AdjustmentParams) {
        let sliders = [
            (self.temperature, &mut params.temperature),
            (self.tint, &mut params.tint),
            (self.contrast, &mut params.contrast),
            (self.saturation, &mut params.saturation),
            (self.highlights, &mut params.highlights),
            (self.midtones, &mut params.midtones),
            (self.shadows, &mut params.shadows),
            (self.whites, &mut params.whites),
            (self.blacks, &mut params.blacks),
        ];
        for (value, field) in sliders {
            if let Some(value) = value {
                *field = value;
            }
        }

        let curves = [
            (CurveChannel::Rgb, self.rgb_curve),
            (CurveChannel::Red, self.red_curve),
            (CurveChannel::Green, self.green_curve),
            (CurveChannel::Blue, self.blue_curve),
        ];
        for (channel, curve) in curves {
            if let Some(curve) = curve {
                params.set_curve(channel, curve);
            }
        }
    }
}

/// Parse `a,b,c,d,e` into a curve.
fn parse_curve(value: &str) -> Result<ToneCurve, String> {
    let levels = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid level {part:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    ToneCurve::from_slice(&levels).map_err(|e| e.to_string())
}

/// Compose the final parameters: preset, then params file, then overrides.
pub fn build_params(args: &RenderArgs, presets: &PresetLibrary) -> Result<AdjustmentParams> {
    let mut params = match &args.preset {
        Some(name) => presets.require(name)?.params,
        None => AdjustmentParams::default(),
    };
    if let Some(path) = &args.params {
        params = load_params_file(path)?;
    }
    args.overrides.apply(&mut params);
    Ok(params.clamped())
}

fn load_params_file(path: &Path) -> Result<AdjustmentParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse params file {}", path.display()))
}

pub fn run(args: RenderArgs, config: &CliConfig) -> Result<PathBuf> {
    let presets = config.presets()?;
    let params = build_params(&args, &presets)?;

    let mut session = EditSession::new();
    session.set_params(params);
    session.set_render_options(RenderOptions {
        extended_tone: args.extended,
    });

    let subject = subject_from_path(&args.input);
    session
        .load_decoded(&subject, load_image(&args.input))
        .with_context(|| format!("cannot open {}", args.input.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.default_output(&session.export_file_name()));

    let rendered = session.render()?;
    save_png(&output, &rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        input = %args.input.display(),
        output = %output.display(),
        width = rendered.width(),
        height = rendered.height(),
        "rendered"
    );
    Ok(output)
}
