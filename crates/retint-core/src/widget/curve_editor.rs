//! Interactive five-point curve editor.
//!
//! Holds the editable state of one tone curve: five control points with fixed
//! input levels and draggable output levels. Pointer events drive an explicit
//! `Idle` / `Dragging` state machine, and every drag step emits the updated
//! [`ToneCurve`]. Drawing is left to the caller, which gets plot-space geometry
//! from [`CurveEditor::segments`] and [`CurveEditor::trace`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::PlotGeometry;
use crate::transform::params::{CONTROL_LEVELS, CurveChannel, ToneCurve};

/// Pointer distance, in screen units, within which a control point is hit.
pub const HIT_RADIUS: f32 = 8.0;

/// One knot of the curve. The input level is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    input: f32,
    output: f32,
}

impl CurvePoint {
    pub fn input(&self) -> f32 {
        self.input
    }

    pub fn output(&self) -> f32 {
        self.output
    }
}

/// Interaction state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// The point at this index follows the pointer.
    Dragging(usize),
}

/// Pointer input in plot-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
    Leave,
}

/// One cubic Bezier piece of the drawn curve, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl CubicSegment {
    /// Segment from `a` to `b` with handles at the horizontal midpoint.
    pub fn between(a: Vec2, b: Vec2) -> Self {
        let half = (b.x - a.x) / 2.0;
        Self {
            start: a,
            control1: Vec2::new(a.x + half, a.y),
            control2: Vec2::new(b.x - half, b.y),
            end: b,
        }
    }

    /// Point on the segment at parameter `t` in `0..=1`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

/// Editable state for one channel's curve.
#[derive(Debug, Clone)]
pub struct CurveEditor {
    channel: CurveChannel,
    label: String,
    geometry: PlotGeometry,
    points: [CurvePoint; 5],
    hovered: Option<usize>,
    state: DragState,
}

impl CurveEditor {
    pub fn new(channel: CurveChannel, label: impl Into<String>, curve: ToneCurve) -> Self {
        Self::with_geometry(channel, label, curve, PlotGeometry::default())
    }

    pub fn with_geometry(
        channel: CurveChannel,
        label: impl Into<String>,
        curve: ToneCurve,
        geometry: PlotGeometry,
    ) -> Self {
        let mut editor = Self {
            channel,
            label: label.into(),
            geometry,
            points: CONTROL_LEVELS.map(|level| CurvePoint {
                input: level,
                output: level,
            }),
            hovered: None,
            state: DragState::Idle,
        };
        editor.set_values(curve);
        editor
    }

    pub fn channel(&self) -> CurveChannel {
        self.channel
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    pub fn points(&self) -> &[CurvePoint; 5] {
        &self.points
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Current output levels.
    pub fn values(&self) -> ToneCurve {
        ToneCurve(self.points.map(|point| point.output))
    }

    /// Replace the output levels from outside (e.g. a preset was applied).
    /// Input levels never change.
    pub fn set_values(&mut self, curve: ToneCurve) {
        for (point, level) in self.points.iter_mut().zip(curve.clamped().levels()) {
            point.output = level;
        }
    }

    /// Screen position of control point `index`.
    pub fn point_position(&self, index: usize) -> Option<Vec2> {
        self.points
            .get(index)
            .map(|point| self.geometry.to_screen(point.input, point.output))
    }

    /// Index of the first control point within [`HIT_RADIUS`] of `pos`.
    ///
    /// Positions outside the canvas never hit.
    pub fn hit_test(&self, pos: Vec2) -> Option<usize> {
        if !self.geometry.contains(pos) {
            return None;
        }
        self.points.iter().position(|point| {
            self.geometry
                .to_screen(point.input, point.output)
                .distance(pos)
                <= HIT_RADIUS
        })
    }

    /// Dispatch a pointer event. Returns the curve on every drag step.
    pub fn handle(&mut self, event: PointerEvent) -> Option<ToneCurve> {
        match event {
            PointerEvent::Down(pos) => {
                self.pointer_down(pos);
                None
            }
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up => {
                self.pointer_up();
                None
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                None
            }
        }
    }

    /// Start dragging the point under `pos`, if any. Returns whether a drag started.
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        let DragState::Idle = self.state else {
            return false;
        };
        let Some(index) = self.hit_test(pos) else {
            return false;
        };
        tracing::debug!(channel = self.channel.label(), index, "curve drag started");
        self.state = DragState::Dragging(index);
        self.hovered = Some(index);
        true
    }

    /// Move the dragged point, or update hover while idle.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<ToneCurve> {
        if !self.geometry.contains(pos) {
            return None;
        }
        match self.state {
            DragState::Dragging(index) => {
                self.points[index].output = self.geometry.from_coord_y(pos.y);
                Some(self.values())
            }
            DragState::Idle => {
                self.hovered = self.hit_test(pos);
                None
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    pub fn pointer_leave(&mut self) {
        self.end_drag();
        self.hovered = None;
    }

    /// Restore the identity curve and return to `Idle`.
    pub fn reset(&mut self) -> ToneCurve {
        self.set_values(ToneCurve::IDENTITY);
        self.state = DragState::Idle;
        self.hovered = None;
        tracing::debug!(channel = self.channel.label(), "curve reset");
        self.values()
    }

    /// Cubic segments between consecutive control points, in screen space.
    pub fn segments(&self) -> [CubicSegment; 4] {
        let pts = self.points.map(|p| self.geometry.to_screen(p.input, p.output));
        std::array::from_fn(|i| CubicSegment::between(pts[i], pts[i + 1]))
    }

    /// Polyline approximating the drawn curve, `samples_per_segment` steps per segment.
    pub fn trace(&self, samples_per_segment: usize) -> Vec<Vec2> {
        let steps = samples_per_segment.max(1);
        let segments = self.segments();
        let mut out = Vec::with_capacity(segments.len() * steps + 1);
        out.push(segments[0].start);
        for segment in &segments {
            for step in 1..=steps {
                out.push(segment.point_at(step as f32 / steps as f32));
            }
        }
        out
    }

    fn end_drag(&mut self) {
        if let DragState::Dragging(index) = self.state {
            let output = self.points[index].output;
            tracing::debug!(channel = self.channel.label(), index, output, "curve drag ended");
        }
        self.state = DragState::Idle;
    }
}
