// Host-side tests for key mapping and held-key bookkeeping.

use glam::Vec2;
use orbit_showcase::camera::{CameraControl, MoveKey, MovementKeys, WalkCamera};
use orbit_showcase::config::InputProfile;
use orbit_showcase::constants::{KEY_ROTATE_STEP_DEG, KEY_ZOOM_STEP};
use orbit_showcase::input::{move_key_for, orbit_key_action, InputTracker, KeyAction};

#[test]
fn wasd_and_arrows_map_to_movement() {
    assert_eq!(move_key_for("w"), Some(MoveKey::Forward));
    assert_eq!(move_key_for("W"), Some(MoveKey::Forward));
    assert_eq!(move_key_for("ArrowUp"), Some(MoveKey::Forward));
    assert_eq!(move_key_for("s"), Some(MoveKey::Back));
    assert_eq!(move_key_for("ArrowDown"), Some(MoveKey::Back));
    assert_eq!(move_key_for("a"), Some(MoveKey::Left));
    assert_eq!(move_key_for("ArrowLeft"), Some(MoveKey::Left));
    assert_eq!(move_key_for("D"), Some(MoveKey::Right));
    assert_eq!(move_key_for("ArrowRight"), Some(MoveKey::Right));
}

#[test]
fn unrelated_keys_are_not_movement() {
    for key in ["q", "e", " ", "Shift", "Escape", "Enter", ""] {
        assert_eq!(move_key_for(key), None, "{key:?}");
    }
}

#[test]
fn orbit_keys_rotate_zoom_and_reset() {
    assert_eq!(
        orbit_key_action("ArrowLeft"),
        Some(KeyAction::Rotate(Vec2::new(0.0, -KEY_ROTATE_STEP_DEG)))
    );
    assert_eq!(
        orbit_key_action("ArrowUp"),
        Some(KeyAction::Rotate(Vec2::new(KEY_ROTATE_STEP_DEG, 0.0)))
    );
    assert_eq!(orbit_key_action("+"), Some(KeyAction::Zoom(KEY_ZOOM_STEP)));
    assert_eq!(orbit_key_action("="), Some(KeyAction::Zoom(KEY_ZOOM_STEP)));
    assert_eq!(orbit_key_action("-"), Some(KeyAction::Zoom(-KEY_ZOOM_STEP)));
    assert_eq!(orbit_key_action("0"), Some(KeyAction::ResetView));
    assert_eq!(orbit_key_action("Escape"), Some(KeyAction::Close));
    assert_eq!(orbit_key_action("w"), None);
}

#[test]
fn key_repeat_is_a_noop() {
    let mut input = InputTracker::new(InputProfile::walk());
    let mut cam = WalkCamera::default();
    assert!(input.key_down(MoveKey::Forward, &mut cam));
    assert!(!input.key_down(MoveKey::Forward, &mut cam));
    assert!(!input.key_down(MoveKey::Forward, &mut cam));
    assert!(input.keys().forward);
    assert!(input.key_up(MoveKey::Forward, &mut cam));
    assert!(!input.key_up(MoveKey::Forward, &mut cam));
}

#[test]
fn held_keys_reach_the_camera() {
    let mut input = InputTracker::new(InputProfile::walk());
    let mut cam = WalkCamera::default();
    input.key_down(MoveKey::Left, &mut cam);
    input.key_down(MoveKey::Back, &mut cam);
    assert_eq!(
        cam.keys(),
        MovementKeys {
            forward: false,
            back: true,
            left: true,
            right: false,
        }
    );
}

#[test]
fn release_all_clears_held_keys_so_nothing_sticks() {
    let mut input = InputTracker::new(InputProfile::walk());
    let mut cam = WalkCamera::default();
    input.key_down(MoveKey::Forward, &mut cam);
    input.key_down(MoveKey::Right, &mut cam);
    input.release_all(&mut cam);
    assert!(!input.keys().any());
    assert!(!cam.keys().any());

    let before = cam.target_position();
    for _ in 0..10 {
        cam.advance();
    }
    assert_eq!(cam.target_position(), before);
}

#[test]
fn movement_keys_report_changes() {
    let mut keys = MovementKeys::default();
    assert!(!keys.any());
    assert!(keys.set(MoveKey::Right, true));
    assert!(!keys.set(MoveKey::Right, true));
    assert!(keys.any());
    assert!(keys.set(MoveKey::Right, false));
    assert!(!keys.any());
}
