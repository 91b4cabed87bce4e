//! Single-user editing session: the loaded image, current adjustments, and
//! the most recent preview frame.
//!
//! Edits only mark the session dirty. The next call to [`EditSession::frame`]
//! renders once with whatever parameters are current, so a burst of edits
//! between two frames costs one render and the last write wins.

use std::fmt::Display;

use crate::error::RetintError;
use crate::image::PixelBuffer;
use crate::presets::Preset;
use crate::transform::evaluate::{RenderOptions, render_into, render_with};
use crate::transform::params::{AdjustmentParams, CurveChannel, ToneCurve};

/// Subject used in export names when none is known.
const DEFAULT_SUBJECT: &str = "image";

#[derive(Debug, Clone)]
struct LoadedImage {
    subject: String,
    buffer: PixelBuffer,
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    source: Option<LoadedImage>,
    params: AdjustmentParams,
    options: RenderOptions,
    dirty: bool,
    frame: Option<PixelBuffer>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the outcome of an image decode.
    ///
    /// On success the image replaces any previous one. On failure, or when the
    /// decoded image has no pixels, the session is left exactly as it was.
    pub fn load_decoded<E: Display>(
        &mut self,
        subject: &str,
        decoded: Result<PixelBuffer, E>,
    ) -> Result<(), RetintError> {
        let buffer = match decoded {
            Ok(buffer) if !buffer.is_empty() => buffer,
            Ok(_) => {
                tracing::warn!(subject, "decoded image has no pixels");
                return Err(RetintError::ImageUnavailable(format!(
                    "{subject}: image has no pixels"
                )));
            }
            Err(error) => {
                tracing::warn!(subject, %error, "image failed to load");
                return Err(RetintError::ImageUnavailable(format!("{subject}: {error}")));
            }
        };

        tracing::info!(
            subject,
            width = buffer.width(),
            height = buffer.height(),
            "image loaded"
        );
        self.source = Some(LoadedImage {
            subject: subject.trim().to_string(),
            buffer,
        });
        self.frame = None;
        self.dirty = true;
        Ok(())
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.source.as_ref().map(|loaded| &loaded.buffer)
    }

    pub fn subject(&self) -> Option<&str> {
        self.source.as_ref().map(|loaded| loaded.subject.as_str())
    }

    pub fn params(&self) -> &AdjustmentParams {
        &self.params
    }

    /// Replace all parameters at once.
    pub fn set_params(&mut self, params: AdjustmentParams) {
        self.params = params.clamped();
        self.dirty = true;
    }

    /// Edit parameters in place, e.g. one slider moving.
    pub fn update(&mut self, edit: impl FnOnce(&mut AdjustmentParams)) {
        edit(&mut self.params);
        self.params = self.params.clamped();
        self.dirty = true;
    }

    /// Store a curve emitted by a curve editor.
    pub fn set_curve(&mut self, channel: CurveChannel, curve: ToneCurve) {
        self.params.set_curve(channel, curve);
        self.dirty = true;
    }

    /// Replace every parameter with the preset's snapshot.
    pub fn apply_preset(&mut self, preset: &Preset) {
        tracing::info!(preset = %preset.name, "preset applied");
        self.set_params(preset.params);
    }

    /// Return every control to neutral.
    pub fn reset(&mut self) {
        tracing::info!("adjustments reset");
        self.set_params(AdjustmentParams::default());
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_render_options(&mut self, options: RenderOptions) {
        if self.options != options {
            self.options = options;
            self.dirty = true;
        }
    }

    /// Whether the current frame is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Up-to-date preview frame, rendering only if something changed since the last one.
    ///
    /// `None` while no image is loaded.
    pub fn frame(&mut self) -> Option<&PixelBuffer> {
        let source = &self.source.as_ref()?.buffer;
        if self.dirty || self.frame.is_none() {
            let reused = match self.frame.as_mut() {
                Some(frame) => render_into(source, &self.params, self.options, frame).is_ok(),
                None => false,
            };
            if !reused {
                self.frame = Some(render_with(source, &self.params, self.options));
            }
            self.dirty = false;
        }
        self.frame.as_ref()
    }

    /// Render a fresh full-size image for export.
    pub fn render(&self) -> Result<PixelBuffer, RetintError> {
        let loaded = self.source.as_ref().ok_or(RetintError::NoImage)?;
        Ok(render_with(&loaded.buffer, &self.params, self.options))
    }

    /// Suggested download name, `corrected-<subject>.png`.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.subject().unwrap_or(DEFAULT_SUBJECT))
    }
}

/// `corrected-<subject>.png`, falling back to a generic subject when blank.
pub fn export_file_name(subject: &str) -> String {
    let subject = subject.trim();
    let subject = if subject.is_empty() {
        DEFAULT_SUBJECT
    } else {
        subject
    };
    format!("corrected-{subject}.png")
}
