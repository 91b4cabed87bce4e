//! Mapping between curve levels and plot-space coordinates.

use glam::Vec2;

use crate::transform::params::{LEVEL_MAX, LEVEL_MIN};

/// Default plot edge length in screen units.
pub const DEFAULT_PLOT_SIZE: f32 = 200.0;
/// Default inset between the plot edge and the curve area.
pub const DEFAULT_PLOT_PADDING: f32 = 20.0;

/// Square plot with a padded drawing area.
///
/// Level `0` maps to `padding` and level `100` to `size - padding` on the x
/// axis. The y axis is flipped: screen y grows downward while levels grow
/// upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub size: f32,
    pub padding: f32,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            size: DEFAULT_PLOT_SIZE,
            padding: DEFAULT_PLOT_PADDING,
        }
    }
}

impl PlotGeometry {
    pub fn new(size: f32, padding: f32) -> Self {
        Self { size, padding }
    }

    /// Edge length of the drawable area.
    pub fn span(&self) -> f32 {
        self.size - 2.0 * self.padding
    }

    pub fn to_coord(&self, level: f32) -> f32 {
        self.padding + level / LEVEL_MAX * self.span()
    }

    pub fn to_coord_y(&self, level: f32) -> f32 {
        self.size - self.padding - level / LEVEL_MAX * self.span()
    }

    /// Screen x back to a level, clamped into `[0, 100]`.
    pub fn from_coord(&self, coord: f32) -> f32 {
        ((coord - self.padding) / self.span() * LEVEL_MAX).clamp(LEVEL_MIN, LEVEL_MAX)
    }

    /// Screen y back to a level, clamped into `[0, 100]`.
    pub fn from_coord_y(&self, coord: f32) -> f32 {
        ((self.size - self.padding - coord) / self.span() * LEVEL_MAX).clamp(LEVEL_MIN, LEVEL_MAX)
    }

    /// Screen position of an `(input, output)` level pair.
    pub fn to_screen(&self, input: f32, output: f32) -> Vec2 {
        Vec2::new(self.to_coord(input), self.to_coord_y(output))
    }

    /// Whether a screen position lies on the canvas (edges included).
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.is_finite() && (0.0..=self.size).contains(&pos.x) && (0.0..=self.size).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_default_mapping_endpoints() {
        let geometry = PlotGeometry::default();
        assert_eq!(geometry.to_coord(0.0), 20.0);
        assert_eq!(geometry.to_coord(100.0), 180.0);
        assert_eq!(geometry.to_coord_y(0.0), 180.0);
        assert_eq!(geometry.to_coord_y(100.0), 20.0);
    }

    #[test]
    fn test_inverse_clamps_outside_drawing_area() {
        let geometry = PlotGeometry::default();
        assert_eq!(geometry.from_coord(0.0), 0.0);
        assert_eq!(geometry.from_coord(199.0), 100.0);
        assert_eq!(geometry.from_coord_y(0.0), 100.0);
        assert_eq!(geometry.from_coord_y(199.0), 0.0);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let geometry = PlotGeometry::default();
        // Moving down the screen lowers the level.
        assert!(geometry.from_coord_y(150.0) < geometry.from_coord_y(50.0));
        assert!(geometry.to_coord_y(25.0) > geometry.to_coord_y(75.0));
    }

    #[test]
    fn test_roundtrip() {
        let geometry = PlotGeometry::new(256.0, 12.0);
        for step in 0..=100 {
            let level = step as f32;
            assert!((geometry.from_coord(geometry.to_coord(level)) - level).abs() < EPSILON);
            assert!((geometry.from_coord_y(geometry.to_coord_y(level)) - level).abs() < EPSILON);
        }
    }

    #[test]
    fn test_contains_excludes_outside_points() {
        let geometry = PlotGeometry::default();
        assert!(geometry.contains(Vec2::new(0.0, 200.0)));
        assert!(!geometry.contains(Vec2::new(-0.5, 10.0)));
        assert!(!geometry.contains(Vec2::new(10.0, 200.5)));
        assert!(!geometry.contains(Vec2::new(f32::NAN, 10.0)));
    }
}
