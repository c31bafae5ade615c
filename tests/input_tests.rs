// Host-side tests for the gesture state machine.

use glam::Vec2;
use orbit_showcase::camera::{CameraControl, OrbitCamera};
use orbit_showcase::config::InputProfile;
use orbit_showcase::constants::*;
use orbit_showcase::input::{
    pinch_distance, rotation_delta, DragSource, GestureState, InputTracker, Release, TouchPoint,
};

fn orbit_tracker() -> (InputTracker, OrbitCamera) {
    (InputTracker::new(InputProfile::orbit()), OrbitCamera::default())
}

#[test]
fn wheel_scenario_zooms_in_by_a_tenth() {
    let (mut input, mut cam) = orbit_tracker();
    input.wheel(-100.0, &mut cam);
    assert!((cam.target_zoom() - 0.8).abs() < 1e-6);
}

#[test]
fn wheel_clamps_to_zoom_bounds() {
    let (mut input, mut cam) = orbit_tracker();
    input.wheel(-1_000_000.0, &mut cam);
    assert_eq!(cam.target_zoom(), MAX_ZOOM);
    input.wheel(1_000_000.0, &mut cam);
    assert_eq!(cam.target_zoom(), MIN_ZOOM);
}

#[test]
fn drag_emits_scaled_rotation_delta() {
    let (mut input, mut cam) = orbit_tracker();
    let start = cam.target_rotation();
    input.pointer_down(Vec2::new(100.0, 100.0));
    assert!(input.pointer_move(Vec2::new(110.0, 96.0), &mut cam));
    let s = ORBIT_MOUSE_SENSITIVITY;
    let expected = start + Vec2::new(-4.0 * s * -1.0, 10.0 * s);
    assert!((cam.target_rotation() - expected).length() < 1e-5);
}

#[test]
fn deltas_are_relative_to_last_position() {
    let (mut input, mut cam) = orbit_tracker();
    input.pointer_down(Vec2::ZERO);
    input.pointer_move(Vec2::new(10.0, 0.0), &mut cam);
    input.pointer_move(Vec2::new(20.0, 0.0), &mut cam);
    let yaw = cam.target_rotation().y;
    let expected = ORBIT_INITIAL_YAW_DEG + 20.0 * ORBIT_MOUSE_SENSITIVITY;
    assert!((yaw - expected).abs() < 1e-4);
}

#[test]
fn move_without_press_is_ignored() {
    let (mut input, mut cam) = orbit_tracker();
    let before = cam.target_rotation();
    assert!(!input.pointer_move(Vec2::new(50.0, 50.0), &mut cam));
    assert_eq!(cam.target_rotation(), before);
    assert_eq!(input.state(), GestureState::Idle);
}

#[test]
fn small_motion_is_still_a_click() {
    let (mut input, mut cam) = orbit_tracker();
    input.pointer_down(Vec2::new(10.0, 10.0));
    input.pointer_move(Vec2::new(13.0, 13.0), &mut cam);
    assert!(!input.dragged());
    assert_eq!(
        input.pointer_up(Vec2::new(13.0, 13.0)),
        Release::Click(Vec2::new(13.0, 13.0))
    );
}

#[test]
fn drag_past_threshold_suppresses_click() {
    let (mut input, mut cam) = orbit_tracker();
    input.pointer_down(Vec2::new(10.0, 10.0));
    input.pointer_move(Vec2::new(10.0, 10.0 + DRAG_THRESHOLD_PX + 1.0), &mut cam);
    // moving back near the start does not clear the flag
    input.pointer_move(Vec2::new(10.0, 10.0), &mut cam);
    assert!(input.dragged());
    assert_eq!(input.pointer_up(Vec2::new(10.0, 10.0)), Release::GestureEnd);
    // flag stays readable after release
    assert!(input.dragged());
    // next press clears it
    input.pointer_down(Vec2::ZERO);
    assert!(!input.dragged());
}

#[test]
fn release_without_press_is_ignored() {
    let (mut input, _) = orbit_tracker();
    assert_eq!(input.pointer_up(Vec2::ZERO), Release::Ignored);
}

#[test]
fn one_finger_touch_uses_touch_sensitivity() {
    let (mut input, mut cam) = orbit_tracker();
    let start = cam.target_rotation();
    input.touch_start(&[TouchPoint::new(1, 0.0, 0.0)], &mut cam);
    assert!(input.touch_move(&[TouchPoint::new(1, 10.0, 0.0)], &mut cam));
    let yaw = cam.target_rotation().y - start.y;
    assert!((yaw - 10.0 * ORBIT_TOUCH_SENSITIVITY).abs() < 1e-5);
}

#[test]
fn pinch_scales_zoom_by_distance_ratio() {
    let (mut input, mut cam) = orbit_tracker();
    let a = TouchPoint::new(1, 100.0, 100.0);
    let b = TouchPoint::new(2, 200.0, 100.0);
    input.touch_start(&[a, b], &mut cam);
    assert!(matches!(input.state(), GestureState::PinchZooming { .. }));
    let b2 = TouchPoint::new(2, 225.0, 100.0);
    assert!(input.touch_move(&[a, b2], &mut cam));
    assert!((cam.target_zoom() - 0.7 * 1.25).abs() < 1e-5);
}

#[test]
fn pinch_result_is_clamped() {
    let (mut input, mut cam) = orbit_tracker();
    let a = TouchPoint::new(1, 0.0, 0.0);
    input.touch_start(&[a, TouchPoint::new(2, 10.0, 0.0)], &mut cam);
    input.touch_move(&[a, TouchPoint::new(2, 1000.0, 0.0)], &mut cam);
    assert_eq!(cam.target_zoom(), MAX_ZOOM);
    input.touch_move(&[a, TouchPoint::new(2, 0.5, 0.0)], &mut cam);
    assert_eq!(cam.target_zoom(), MIN_ZOOM);
}

#[test]
fn pinch_to_single_finger_rebaselines_without_jump() {
    let (mut input, mut cam) = orbit_tracker();
    let a = TouchPoint::new(1, 0.0, 0.0);
    let b = TouchPoint::new(2, 100.0, 0.0);
    input.touch_start(&[a], &mut cam);
    input.touch_start(&[a, b], &mut cam);
    let remaining = TouchPoint::new(2, 300.0, 50.0);
    assert_eq!(input.touch_end(&[remaining], &mut cam), Release::GestureEnd);
    assert_eq!(
        input.state(),
        GestureState::Dragging {
            source: DragSource::Touch(2),
            start: remaining.position,
            last: remaining.position,
        }
    );
    let before = cam.target_rotation();
    // first move after the lift only applies the motion since re-baselining
    input.touch_move(&[TouchPoint::new(2, 302.0, 50.0)], &mut cam);
    let yaw = cam.target_rotation().y - before.y;
    assert!((yaw - 2.0 * ORBIT_TOUCH_SENSITIVITY).abs() < 1e-5);
}

#[test]
fn pinch_never_counts_as_click() {
    let (mut input, mut cam) = orbit_tracker();
    let a = TouchPoint::new(1, 0.0, 0.0);
    input.touch_start(&[a, TouchPoint::new(2, 50.0, 0.0)], &mut cam);
    input.touch_end(&[a], &mut cam);
    assert_eq!(input.touch_end(&[], &mut cam), Release::GestureEnd);
    assert_eq!(input.state(), GestureState::Idle);
}

#[test]
fn touch_tap_is_a_click() {
    let (mut input, mut cam) = orbit_tracker();
    input.touch_start(&[TouchPoint::new(4, 20.0, 30.0)], &mut cam);
    assert_eq!(
        input.touch_end(&[], &mut cam),
        Release::Click(Vec2::new(20.0, 30.0))
    );
}

#[test]
fn pinch_move_without_gesture_is_ignored() {
    let (mut input, mut cam) = orbit_tracker();
    let zoom = cam.target_zoom();
    let touches = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 90.0, 0.0)];
    assert!(!input.touch_move(&touches, &mut cam));
    assert_eq!(cam.target_zoom(), zoom);
    assert_eq!(input.touch_end(&[], &mut cam), Release::Ignored);
}

#[test]
fn degenerate_pinch_baseline_does_not_divide_by_zero() {
    let (mut input, mut cam) = orbit_tracker();
    let a = TouchPoint::new(1, 10.0, 10.0);
    input.touch_start(&[a, TouchPoint::new(2, 10.0, 10.0)], &mut cam);
    assert!(!input.touch_move(&[a, TouchPoint::new(2, 60.0, 10.0)], &mut cam));
    assert!(cam.target_zoom().is_finite());
}

#[test]
fn rotation_delta_respects_look_sign() {
    let mut profile = InputProfile::orbit();
    let d = rotation_delta(&profile, Vec2::new(10.0, 10.0), 1.0);
    assert_eq!(d, Vec2::new(-10.0, 10.0));
    profile.look_sign = Vec2::new(-1.0, 1.0);
    let d = rotation_delta(&profile, Vec2::new(10.0, 10.0), 0.5);
    assert_eq!(d, Vec2::new(5.0, -5.0));
}

#[test]
fn pinch_distance_is_euclidean() {
    assert!((pinch_distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
}

#[test]
fn lifting_another_finger_keeps_the_drag() {
    let (mut input, mut cam) = orbit_tracker();
    let dragging = TouchPoint::new(1, 10.0, 10.0);
    input.touch_start(&[dragging], &mut cam);
    input.touch_move(&[TouchPoint::new(1, 40.0, 10.0)], &mut cam);
    let before = input.state();
    // a stray contact that never started a pinch lifts while finger 1 stays down
    assert_eq!(
        input.touch_end(&[TouchPoint::new(1, 40.0, 10.0)], &mut cam),
        Release::Ignored
    );
    assert_eq!(input.state(), before);

    let yaw = cam.target_rotation().y;
    assert!(input.touch_move(&[TouchPoint::new(1, 45.0, 10.0)], &mut cam));
    assert!((cam.target_rotation().y - yaw - 5.0 * ORBIT_TOUCH_SENSITIVITY).abs() < 1e-5);
}

#[test]
fn lifting_the_dragging_finger_follows_the_survivor() {
    let (mut input, mut cam) = orbit_tracker();
    input.touch_start(&[TouchPoint::new(1, 0.0, 0.0)], &mut cam);
    let survivor = TouchPoint::new(2, 80.0, 20.0);
    assert_eq!(input.touch_end(&[survivor], &mut cam), Release::GestureEnd);
    assert_eq!(
        input.state(),
        GestureState::Dragging {
            source: DragSource::Touch(2),
            start: survivor.position,
            last: survivor.position,
        }
    );
}
