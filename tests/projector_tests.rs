// Host-side tests for the transform projector.

use glam::{Vec2, Vec3};
use orbit_showcase::camera::{OrbitSnapshot, WalkSnapshot};
use orbit_showcase::config::MotionConfig;
use orbit_showcase::constants::DEPTH_BASE;
use orbit_showcase::projector::{orbit_rotation, paint_order, Projected, TransformProjector};

fn orbit(pitch: f32, yaw: f32, zoom: f32) -> OrbitSnapshot {
    OrbitSnapshot {
        rotation: Vec2::new(pitch, yaw),
        zoom,
    }
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn yaw_is_applied_before_pitch() {
    let p = orbit_rotation(90.0, 90.0) * Vec3::X;
    // yaw takes +X to -Z, then pitch lifts -Z to +Y
    assert!(close(p, Vec3::Y), "got {p:?}");
}

#[test]
fn identity_camera_leaves_point_in_place() {
    let projector = TransformProjector::still();
    let point = Vec3::new(10.0, -20.0, 30.0);
    let out = projector.project_orbit(point, 0, &orbit(0.0, 0.0, 1.0), 0.0);
    assert!(close(out.position, point));
    assert_eq!(out.depth_order, DEPTH_BASE + 30);
    assert_eq!(out.scale, 1.0);
    assert!(out.visible);
}

#[test]
fn zoom_scales_position_and_footprint() {
    let projector = TransformProjector::still();
    let point = Vec3::new(100.0, 50.0, -25.0);
    let out = projector.project_orbit(point, 3, &orbit(0.0, 0.0, 2.0), 1.0);
    assert!(close(out.position, point * 2.0));
    assert_eq!(out.scale, 2.0);
}

#[test]
fn reduced_motion_disables_float() {
    let motion = MotionConfig::default();
    let reduced = TransformProjector::new(&motion, true);
    assert!(reduced.float_motion().is_none());
    let point = Vec3::new(0.0, 0.0, 500.0);
    let cam = orbit(0.0, 0.0, 1.0);
    for t in [0.0, 0.3, 1.7, 10.0] {
        let out = reduced.project_orbit(point, 2, &cam, t);
        assert!(close(out.position, point));
    }
}

#[test]
fn float_phase_depends_on_index() {
    let motion = MotionConfig {
        float_amplitude: 8.0,
        float_speed: 1.2,
    };
    let projector = TransformProjector::new(&motion, false);
    let float = projector.float_motion().expect("float enabled");
    assert!((float.offset(0.0, 0) - 0.0).abs() < 1e-6);
    assert!((float.offset(0.0, 1) - 8.0 * 1.0_f32.sin()).abs() < 1e-5);
    assert!((float.offset(2.0, 1) - 8.0 * (2.4_f32 + 1.0).sin()).abs() < 1e-5);

    let cam = orbit(0.0, 0.0, 1.0);
    let a = projector.project_orbit(Vec3::ZERO, 0, &cam, 0.5);
    let b = projector.project_orbit(Vec3::ZERO, 1, &cam, 0.5);
    assert!((a.position.y - b.position.y).abs() > 1e-3);
    assert!(a.position.y.abs() <= 8.0 + 1e-4);
}

#[test]
fn zero_amplitude_means_no_float() {
    let motion = MotionConfig {
        float_amplitude: 0.0,
        float_speed: 1.0,
    };
    assert!(TransformProjector::new(&motion, false).float_motion().is_none());
}

#[test]
fn depth_order_rounds_camera_z() {
    let projector = TransformProjector::still();
    assert_eq!(projector.depth_order(0.0), DEPTH_BASE);
    assert_eq!(projector.depth_order(12.6), DEPTH_BASE + 13);
    assert_eq!(projector.depth_order(-499.6), DEPTH_BASE - 500);
}

#[test]
fn paint_order_is_back_to_front_and_stable() {
    let at = |depth_order| Projected {
        depth_order,
        ..Projected::default()
    };
    let projected = [at(5), at(-3), at(5), at(0), at(-3)];
    assert_eq!(paint_order(&projected), vec![1, 4, 3, 0, 2]);
    assert!(paint_order(&[] as &[Projected]).is_empty());
}

#[test]
fn walk_points_ahead_are_visible_and_behind_are_not() {
    let projector = TransformProjector::still();
    let cam = WalkSnapshot {
        rotation: Vec2::ZERO,
        position: Vec3::ZERO,
    };
    let ahead = projector.project_walk(Vec3::new(0.0, 0.0, -100.0), &cam);
    let behind = projector.project_walk(Vec3::new(0.0, 0.0, 100.0), &cam);
    assert!(ahead.visible);
    assert!(!behind.visible);
    assert_eq!(ahead.scale, 1.0);
}

#[test]
fn walking_past_an_exhibit_hides_it() {
    let projector = TransformProjector::still();
    let exhibit = Vec3::new(0.0, 0.0, -40.0);
    let mut cam = WalkSnapshot {
        rotation: Vec2::ZERO,
        position: Vec3::ZERO,
    };
    assert!(projector.project_walk(exhibit, &cam).visible);
    cam.position = Vec3::new(0.0, 0.0, -50.0);
    let out = projector.project_walk(exhibit, &cam);
    assert!(close(out.position, Vec3::new(0.0, 0.0, 10.0)));
    assert!(!out.visible);
}

#[test]
fn walk_yaw_turns_the_world_the_other_way() {
    let projector = TransformProjector::still();
    let cam = WalkSnapshot {
        rotation: Vec2::new(0.0, 90.0),
        position: Vec3::ZERO,
    };
    // at yaw 90 the viewer faces -X
    let out = projector.project_walk(Vec3::new(-100.0, 0.0, 0.0), &cam);
    assert!(close(out.position, Vec3::new(0.0, 0.0, -100.0)), "got {:?}", out.position);
    assert!(out.visible);
}
