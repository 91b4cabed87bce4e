//! Interaction properties of the curve editor.

use glam::Vec2;
use retint_core::widget::HIT_RADIUS;
use retint_core::{
    CONTROL_LEVELS, CurveChannel, CurveEditor, DragState, PlotGeometry, PointerEvent, ToneCurve,
};

fn rgb_editor() -> CurveEditor {
    CurveEditor::new(CurveChannel::Rgb, "RGB", ToneCurve::IDENTITY)
}

#[test]
fn test_reset_restores_identity_from_any_state() {
    let mut editor = rgb_editor();
    let start = editor.point_position(2).expect("middle point");
    editor.handle(PointerEvent::Down(start));
    editor.handle(PointerEvent::Move(Vec2::new(start.x, start.y - 40.0)));
    assert!(matches!(editor.state(), DragState::Dragging(2)));
    assert_ne!(editor.values(), ToneCurve::IDENTITY);

    let curve = editor.reset();
    assert_eq!(curve.levels(), [0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(editor.values(), ToneCurve::IDENTITY);
    assert_eq!(editor.state(), DragState::Idle);

    // Further moves no longer drag anything.
    assert_eq!(editor.handle(PointerEvent::Move(start)), None);

    let mut idle = CurveEditor::new(
        CurveChannel::Red,
        "Red",
        ToneCurve([5.0, 5.0, 5.0, 5.0, 5.0]),
    );
    assert_eq!(idle.reset(), ToneCurve::IDENTITY);
}

#[test]
fn test_hit_radius_boundary() {
    let editor = rgb_editor();
    let center = editor.point_position(2).expect("middle point");

    assert_eq!(editor.hit_test(center), Some(2));
    assert_eq!(editor.hit_test(center + Vec2::new(HIT_RADIUS, 0.0)), Some(2));
    assert_eq!(editor.hit_test(center + Vec2::new(0.0, -HIT_RADIUS)), Some(2));
    assert_eq!(editor.hit_test(center + Vec2::new(8.01, 0.0)), None);
    assert_eq!(editor.hit_test(center + Vec2::new(0.0, 8.01)), None);
}

#[test]
fn test_overlapping_points_resolve_to_lowest_index() {
    // A tiny plot packs the points 4 units apart, so radii overlap.
    let editor = CurveEditor::with_geometry(
        CurveChannel::Rgb,
        "RGB",
        ToneCurve([50.0, 50.0, 50.0, 50.0, 50.0]),
        PlotGeometry::new(20.0, 2.0),
    );
    let p2 = editor.point_position(2).expect("point");
    let p3 = editor.point_position(3).expect("point");
    let p4 = editor.point_position(4).expect("point");
    // p2 is exactly one radius from p0; p3 is one radius from p1.
    assert_eq!(editor.hit_test(p2), Some(0));
    assert_eq!(editor.hit_test(p3), Some(1));
    assert_eq!(editor.hit_test(p4), Some(2));
}

#[test]
fn test_drag_changes_only_the_dragged_output() {
    let mut editor = CurveEditor::new(
        CurveChannel::Green,
        "Green",
        ToneCurve([3.0, 20.0, 55.0, 80.0, 97.0]),
    );
    let before = *editor.points();
    let start = editor.point_position(3).expect("point");
    assert!(editor.pointer_down(start));

    for dy in [10.0, 35.0, -60.0, 200.0] {
        let pos = Vec2::new(start.x + 5.0, (start.y + dy).clamp(0.0, 200.0));
        let emitted = editor.pointer_move(pos).expect("dragging emits");
        for index in [0, 1, 2, 4] {
            assert_eq!(
                emitted.levels()[index].to_bits(),
                before[index].output().to_bits()
            );
            assert_eq!(editor.points()[index], before[index]);
        }
        assert_eq!(editor.points()[3].input(), 75.0);
    }
    editor.pointer_up();

    // Dragged below the drawing area: clamped to the bottom level.
    assert_eq!(editor.values().levels()[3], 0.0);
    for index in [0, 1, 2, 4] {
        assert_eq!(editor.points()[index], before[index]);
    }
}

#[test]
fn test_inputs_never_change() {
    let mut editor = rgb_editor();
    for index in 0..5 {
        let start = editor.point_position(index).expect("point");
        editor.pointer_down(start);
        editor.pointer_move(Vec2::new(start.x + 15.0, 100.0));
        editor.pointer_up();
    }
    let inputs: Vec<f32> = editor.points().iter().map(|p| p.input()).collect();
    assert_eq!(inputs, CONTROL_LEVELS);
}

#[test]
fn test_press_away_from_points_does_not_drag() {
    let mut editor = rgb_editor();
    assert!(!editor.pointer_down(Vec2::new(150.0, 170.0)));
    assert_eq!(editor.state(), DragState::Idle);
    assert_eq!(editor.pointer_move(Vec2::new(150.0, 100.0)), None);
    assert_eq!(editor.values(), ToneCurve::IDENTITY);
}

#[test]
fn test_coordinate_roundtrip() {
    let geometry = PlotGeometry::default();
    let mut level = 0.0_f32;
    while level <= 100.0 {
        assert!((geometry.from_coord(geometry.to_coord(level)) - level).abs() < 1e-3);
        assert!((geometry.from_coord_y(geometry.to_coord_y(level)) - level).abs() < 1e-3);
        level += 0.5;
    }
    // Screen-down is value-down.
    assert!(geometry.to_coord_y(10.0) > geometry.to_coord_y(90.0));
}
