//! Curve editing widget: plot geometry, hit-testing, and drag handling.

pub mod curve_editor;
pub mod geometry;

pub use curve_editor::{CubicSegment, CurveEditor, CurvePoint, DragState, HIT_RADIUS, PointerEvent};
pub use geometry::PlotGeometry;
