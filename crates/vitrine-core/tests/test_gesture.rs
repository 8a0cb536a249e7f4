mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;
use proptest::test_runner::Config;

use vitrine_core::config::GestureConfig;
use vitrine_core::geometry::Point;
use vitrine_core::gesture::{GestureEngine, TouchPhase, ZoomPhase, ZoomState};
use vitrine_core::transform::Transform;

fn engine() -> GestureEngine {
    GestureEngine::default()
}

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_up_zooms_in_one_tick() {
    let t = engine().apply_wheel_delta(Transform::IDENTITY, -100.0);
    assert_relative_eq!(t.scale, 1.15, epsilon = 1e-6);
    assert_eq!(t.translate, Point::ZERO);
}

#[test]
fn test_wheel_tick_ignores_delta_magnitude() {
    let small = engine().apply_wheel_delta(Transform::IDENTITY, -1.0);
    let large = engine().apply_wheel_delta(Transform::IDENTITY, -500.0);
    assert_eq!(small, large);
}

#[test]
fn test_wheel_out_past_minimum_clamps_and_recentres() {
    let t = engine().apply_wheel_delta(Transform::new(1.1, 30.0, -12.0), 100.0);
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.translate, Point::ZERO);
}

#[test]
fn test_wheel_keeps_translate_while_still_zoomed() {
    let t = engine().apply_wheel_delta(Transform::new(2.0, 30.0, -12.0), 100.0);
    assert_relative_eq!(t.scale, 1.85, epsilon = 1e-6);
    assert_eq!(t.translate, Point::new(30.0, -12.0));
}

#[test]
fn test_wheel_in_clamps_at_max() {
    let mut t = Transform::IDENTITY;
    for _ in 0..100 {
        t = engine().apply_wheel_delta(t, -100.0);
    }
    assert_eq!(t.scale, 4.0);
}

// ---------------------------------------------------------------------------
// Toggle zoom
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_zoom_pairs_back_to_identity() {
    let e = engine();
    let zoomed = e.toggle_zoom(Transform::IDENTITY);
    assert_eq!(zoomed, Transform::new(2.5, 0.0, 0.0));
    assert_eq!(e.toggle_zoom(zoomed), Transform::IDENTITY);
}

#[test]
fn test_toggle_zoom_from_panned_state_resets() {
    let t = engine().toggle_zoom(Transform::new(3.2, 50.0, 50.0));
    assert!(t.is_identity());
}

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

#[test]
fn test_begin_drag_refused_at_identity() {
    assert!(engine()
        .begin_drag(Transform::IDENTITY, Point::new(10.0, 10.0))
        .is_none());
}

#[test]
fn test_drag_pans_relative_to_anchor() {
    let e = engine();
    let t = Transform::new(2.0, 10.0, 5.0);
    let anchor = e.begin_drag(t, Point::new(100.0, 100.0)).unwrap();
    let moved = e.continue_drag(t, Point::new(130.0, 80.0), anchor);
    assert_eq!(moved.scale, 2.0);
    assert_eq!(moved.translate, Point::new(40.0, -15.0));
}

#[test]
fn test_drag_is_unbounded_while_zoomed() {
    let e = engine();
    let t = Transform::new(1.5, 0.0, 0.0);
    let anchor = e.begin_drag(t, Point::ZERO).unwrap();
    let moved = e.continue_drag(t, Point::new(-10_000.0, 25_000.0), anchor);
    assert_eq!(moved.translate, Point::new(-10_000.0, 25_000.0));
}

#[test]
fn test_drag_never_moves_identity() {
    let mut zoom = ZoomState::new(engine());
    assert!(!zoom.pointer_down(Point::new(50.0, 50.0)));
    zoom.pointer_move(Point::new(200.0, -80.0));
    zoom.pointer_up();
    assert_eq!(zoom.transform().translate, Point::ZERO);
    assert_eq!(zoom.phase(), ZoomPhase::Idle);
}

#[test]
fn test_end_drag_noop_when_zoomed() {
    let t = Transform::new(2.0, 7.0, 9.0);
    assert_eq!(engine().end_drag(t), t);
}

// ---------------------------------------------------------------------------
// Pinch
// ---------------------------------------------------------------------------

#[test]
fn test_pinch_spread_zooms_in() {
    let t = engine().apply_pinch(100.0, 150.0, Transform::IDENTITY);
    assert_relative_eq!(t.scale, 1.4, epsilon = 1e-6);
}

#[test]
fn test_pinch_close_to_minimum_recentres() {
    let t = engine().apply_pinch(300.0, 100.0, Transform::new(2.0, 40.0, 40.0));
    assert_eq!(t, Transform::IDENTITY);
}

#[test]
fn test_touch_pinch_then_pan_with_remaining_finger() {
    let mut zoom = ZoomState::new(engine());
    let a = Point::new(100.0, 100.0);
    zoom.touch(TouchPhase::Start, &[a, Point::new(200.0, 100.0)]);
    zoom.touch(TouchPhase::Move, &[a, Point::new(250.0, 100.0)]);
    assert_relative_eq!(zoom.transform().scale, 1.4, epsilon = 1e-6);

    // Lift the second finger; the first re-anchors the pan.
    zoom.touch(TouchPhase::End, &[a]);
    assert_eq!(zoom.phase(), ZoomPhase::Dragging);
    zoom.touch(TouchPhase::Move, &[Point::new(120.0, 90.0)]);
    assert_eq!(zoom.transform().translate, Point::new(20.0, -10.0));

    zoom.touch(TouchPhase::End, &[]);
    assert_eq!(zoom.phase(), ZoomPhase::Zoomed);
}

#[test]
fn test_touch_cancel_ends_gesture() {
    let mut zoom = ZoomState::new(engine());
    zoom.toggle_zoom();
    zoom.touch(TouchPhase::Start, &[Point::new(5.0, 5.0)]);
    assert!(zoom.is_dragging());
    zoom.touch(TouchPhase::Cancel, &[Point::new(5.0, 5.0)]);
    assert!(!zoom.is_dragging());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
enum GestureOp {
    Wheel(f32),
    Pinch(f32, f32),
    Toggle,
    Drag { from: f32, to: Point },
    EndDrag,
}

fn gesture_op() -> impl Strategy<Value = GestureOp> {
    prop_oneof![
        (-200.0_f32..200.0).prop_map(GestureOp::Wheel),
        (0.0_f32..400.0, 0.0_f32..400.0).prop_map(|(a, b)| GestureOp::Pinch(a, b)),
        Just(GestureOp::Toggle),
        (0.0_f32..500.0, -500.0_f32..500.0, -500.0_f32..500.0).prop_map(|(from, x, y)| {
            GestureOp::Drag {
                from,
                to: Point::new(x, y),
            }
        }),
        Just(GestureOp::EndDrag),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn scale_bounds_and_recentre_hold_for_any_sequence(
        ops in prop::collection::vec(gesture_op(), 1..200)
    ) {
        let e = engine();
        let mut t = Transform::IDENTITY;
        for op in ops {
            t = match op {
                GestureOp::Wheel(delta) => e.apply_wheel_delta(t, delta),
                GestureOp::Pinch(before, after) => e.apply_pinch(before, after, t),
                GestureOp::Toggle => e.toggle_zoom(t),
                GestureOp::Drag { from, to } => match e.begin_drag(t, Point::new(from, 0.0)) {
                    Some(anchor) => e.continue_drag(t, to, anchor),
                    None => t,
                },
                GestureOp::EndDrag => e.end_drag(t),
            };
            prop_assert!((1.0..=4.0).contains(&t.scale), "scale out of bounds: {}", t);
            if !e.is_zoomed(t) {
                prop_assert!(t.is_identity(), "not recentred: {}", t);
            }
        }
    }
}

#[test]
fn test_equal_wheel_ticks_in_and_out_recentre() {
    for ticks in 1..=20 {
        let mut zoom = ZoomState::new(engine());
        for _ in 0..ticks {
            zoom.wheel(-1.0);
        }
        assert!(zoom.pointer_down(Point::new(0.0, 0.0)));
        zoom.pointer_move(Point::new(30.0, 30.0));
        zoom.pointer_up();
        assert_eq!(zoom.transform().translate, Point::new(30.0, 30.0));

        for _ in 0..ticks {
            zoom.wheel(1.0);
        }
        assert!(
            zoom.transform().is_identity(),
            "{ticks} ticks left {}",
            zoom.transform()
        );
        assert_eq!(zoom.phase(), ZoomPhase::Idle);
    }
}

#[test]
fn test_pinch_spread_then_equal_close_recentres() {
    for spread in [1.0_f32, 7.3, 13.0, 37.5, 120.0, 333.3] {
        let mut zoom = ZoomState::new(engine());
        let a = Point::new(100.0, 100.0);
        zoom.touch(TouchPhase::Start, &[a, Point::new(200.0, 100.0)]);
        zoom.touch(TouchPhase::Move, &[a, Point::new(200.0 + spread, 100.0)]);
        assert_eq!(zoom.phase(), ZoomPhase::Zoomed);

        // Lift one finger and pan with the other.
        zoom.touch(TouchPhase::End, &[a]);
        let moved = Point::new(130.0, 130.0);
        zoom.touch(TouchPhase::Move, &[moved]);
        assert_eq!(zoom.transform().translate, Point::new(30.0, 30.0));

        // Put the second finger back at the spread distance and close it.
        zoom.touch(
            TouchPhase::Start,
            &[moved, Point::new(230.0 + spread, 130.0)],
        );
        zoom.touch(TouchPhase::Move, &[moved, Point::new(230.0, 130.0)]);
        assert!(
            zoom.transform().is_identity(),
            "spread {spread} left {}",
            zoom.transform()
        );
        zoom.touch(TouchPhase::End, &[]);
        assert_eq!(zoom.phase(), ZoomPhase::Idle);
    }
}

#[test]
fn test_custom_constants_keep_bounds() {
    let e = GestureEngine::new(GestureConfig {
        wheel_sensitivity: 0.5,
        pinch_sensitivity: 0.02,
        min_scale: 1.0,
        max_scale: 3.0,
        toggle_scale: 3.0,
    });
    let mut t = Transform::IDENTITY;
    for _ in 0..10 {
        t = e.apply_wheel_delta(t, -1.0);
    }
    assert_eq!(t.scale, 3.0);
    assert_eq!(e.toggle_zoom(Transform::IDENTITY).scale, 3.0);
}

#[test]
fn test_css_output() {
    let t = Transform::new(2.5, 40.0, -15.0);
    assert_eq!(t.to_css(), "translate(40px, -15px) scale(2.5)");
}
