//! Retint Core: domain layer for photo color adjustment.
//!
//! This crate contains the per-pixel adjustment pipeline, its parameter
//! record, presets, the editing session, and the curve editor's interaction
//! model. No UI or image codec dependencies.

pub mod error;
pub mod grading;
pub mod image;
pub mod presets;
pub mod session;
pub mod transform;
pub mod widget;

// Re-exports for convenience.
pub use error::RetintError;
pub use image::PixelBuffer;
pub use presets::{Preset, PresetLibrary};
pub use session::{EditSession, export_file_name};
pub use transform::evaluate::{RenderOptions, evaluate_pixel, render, render_into, render_with};
pub use transform::params::{AdjustmentParams, CONTROL_LEVELS, CurveChannel, ToneCurve};
pub use widget::{CurveEditor, DragState, PlotGeometry, PointerEvent};
