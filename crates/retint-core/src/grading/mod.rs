//! Grading steps: sliders, luminance zones, whites/blacks, and tone curves.

pub mod curves;
pub mod levels;
pub mod sliders;
pub mod zones;
