//! Orbit and walk cameras built on a shared damped-approach primitive.
//!
//! Input only ever writes *targets*; `advance()` moves the current values a
//! fixed fraction of the remaining gap each tick. Rotations are in degrees,
//! stored as `Vec2 { x: pitch, y: yaw }`.

use crate::config::{Boundary, OrbitConfig, WalkConfig};
use glam::{Vec2, Vec3};
use std::ops::{Add, Mul, Sub};

/// A value exponentially approaching a target.
///
/// `advance` never overshoots for easing in (0, 1] and leaves a value that
/// already equals its target untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damped<T> {
    current: T,
    target: T,
}

impl<T> Damped<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    #[inline]
    pub fn set_current(&mut self, current: T) {
        self.current = current;
    }

    /// Jump both current and target to `value`.
    pub fn snap(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }

    #[inline]
    pub fn advance(&mut self, easing: f32) {
        self.current = self.current + (self.target - self.current) * easing;
    }
}

/// Movement directions of the walk camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

/// Held movement keys; W/S/A/D or their arrow aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// Set one key; returns whether the state changed (repeats return false).
    pub fn set(&mut self, key: MoveKey, down: bool) -> bool {
        let slot = match key {
            MoveKey::Forward => &mut self.forward,
            MoveKey::Back => &mut self.back,
            MoveKey::Left => &mut self.left,
            MoveKey::Right => &mut self.right,
        };
        let changed = *slot != down;
        *slot = down;
        changed
    }

    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// The operations input handling needs from whichever camera is active.
pub trait CameraControl {
    fn apply_rotation_delta(&mut self, delta: Vec2);

    /// Cameras without zoom ignore this.
    fn apply_zoom_delta(&mut self, _delta: f32) {}

    fn target_zoom(&self) -> f32 {
        1.0
    }

    fn set_target_zoom(&mut self, _zoom: f32) {}

    /// Cameras without planar movement ignore this.
    fn set_movement_keys(&mut self, _keys: MovementKeys) {}

    fn advance(&mut self);

    /// Restore the values the camera had when its scene was first shown.
    fn reset(&mut self);
}

/// Immutable view of an orbit camera for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSnapshot {
    pub rotation: Vec2,
    pub zoom: f32,
}

/// Rotates and zooms around the scene origin.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    rotation: Damped<Vec2>,
    zoom: Damped<f32>,
    config: OrbitConfig,
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        let mut camera = Self {
            rotation: Damped::new(config.initial_rotation),
            zoom: Damped::new(config.initial_zoom),
            config,
        };
        camera.reset();
        camera
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            rotation: self.rotation.current(),
            zoom: self.zoom.current(),
        }
    }

    pub fn target_rotation(&self) -> Vec2 {
        self.rotation.target()
    }

    pub fn zoom_bounds(&self) -> (f32, f32) {
        (self.config.min_zoom, self.config.max_zoom)
    }

    #[inline]
    fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.config.min_zoom).min(self.config.max_zoom)
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        match self.config.pitch_limits {
            Some([min, max]) => pitch.max(min).min(max),
            None => pitch,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}

impl CameraControl for OrbitCamera {
    fn apply_rotation_delta(&mut self, delta: Vec2) {
        let mut target = self.rotation.target() + delta;
        target.x = self.clamp_pitch(target.x);
        self.rotation.set_target(target);
    }

    fn apply_zoom_delta(&mut self, delta: f32) {
        let zoom = self.clamp_zoom(self.zoom.target() + delta);
        self.zoom.set_target(zoom);
    }

    fn target_zoom(&self) -> f32 {
        self.zoom.target()
    }

    fn set_target_zoom(&mut self, zoom: f32) {
        let zoom = self.clamp_zoom(zoom);
        self.zoom.set_target(zoom);
    }

    fn advance(&mut self) {
        self.rotation.advance(self.config.easing);
        self.zoom.advance(self.config.easing);
        let zoom = self.clamp_zoom(self.zoom.current());
        self.zoom.set_current(zoom);
    }

    fn reset(&mut self) {
        let mut rotation = self.config.initial_rotation;
        rotation.x = self.clamp_pitch(rotation.x);
        self.rotation.snap(rotation);
        let zoom = self.clamp_zoom(self.config.initial_zoom);
        self.zoom.snap(zoom);
    }
}

/// Immutable view of a walk camera for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkSnapshot {
    pub rotation: Vec2,
    pub position: Vec3,
}

/// First-person look plus planar movement inside a bounded room.
#[derive(Clone, Debug)]
pub struct WalkCamera {
    rotation: Damped<Vec2>,
    position: Damped<Vec3>,
    keys: MovementKeys,
    config: WalkConfig,
}

impl WalkCamera {
    pub fn new(config: WalkConfig) -> Self {
        let mut camera = Self {
            rotation: Damped::new(Vec2::ZERO),
            position: Damped::new(Vec3::ZERO),
            keys: MovementKeys::default(),
            config,
        };
        camera.reset();
        camera
    }

    pub fn snapshot(&self) -> WalkSnapshot {
        WalkSnapshot {
            rotation: self.rotation.current(),
            position: self.position.current(),
        }
    }

    pub fn target_position(&self) -> Vec3 {
        self.position.target()
    }

    pub fn target_rotation(&self) -> Vec2 {
        self.rotation.target()
    }

    pub fn keys(&self) -> MovementKeys {
        self.keys
    }

    pub fn boundary(&self) -> Boundary {
        self.config.boundary
    }

    /// Unit forward and right vectors on the ground plane for `yaw_deg`.
    ///
    /// Yaw 0 faces -Z; right is forward turned a quarter clockwise seen from above.
    pub fn ground_axes(yaw_deg: f32) -> (Vec3, Vec3) {
        let (sin, cos) = yaw_deg.to_radians().sin_cos();
        let forward = Vec3::new(-sin, 0.0, -cos);
        let right = Vec3::new(cos, 0.0, -sin);
        (forward, right)
    }

    fn movement_step(&self) -> Vec3 {
        let (forward, right) = Self::ground_axes(self.rotation.current().y);
        let speed = self.config.move_speed;
        let mut step = Vec3::ZERO;
        if self.keys.forward {
            step += forward * speed;
        }
        if self.keys.back {
            step -= forward * speed;
        }
        if self.keys.right {
            step += right * speed;
        }
        if self.keys.left {
            step -= right * speed;
        }
        step
    }
}

/// Clamp a ground position into `boundary`, pinning `y` to 0.
///
/// Never panics: an inverted hallway collapses onto its `max` edge.
pub fn clamp_to_boundary(position: Vec3, boundary: &Boundary) -> Vec3 {
    match *boundary {
        Boundary::Hallway { min, max } => Vec3::new(
            position.x.max(min.x).min(max.x),
            0.0,
            position.z.max(min.y).min(max.y),
        ),
        Boundary::Circle { radius } => {
            let dist = (position.x * position.x + position.z * position.z).sqrt();
            if dist > radius {
                let angle = position.z.atan2(position.x);
                Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
            } else {
                Vec3::new(position.x, 0.0, position.z)
            }
        }
    }
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self::new(WalkConfig::default())
    }
}

impl CameraControl for WalkCamera {
    fn apply_rotation_delta(&mut self, delta: Vec2) {
        let mut target = self.rotation.target() + delta;
        target.x = target.x.max(self.config.min_pitch).min(self.config.max_pitch);
        self.rotation.set_target(target);
    }

    fn set_movement_keys(&mut self, keys: MovementKeys) {
        self.keys = keys;
    }

    fn advance(&mut self) {
        let boundary = self.config.boundary;
        if self.keys.any() {
            let target = self.position.target() + self.movement_step();
            self.position.set_target(target);
        }
        let target = clamp_to_boundary(self.position.target(), &boundary);
        self.position.set_target(target);

        self.position.advance(self.config.position_easing);
        let current = clamp_to_boundary(self.position.current(), &boundary);
        self.position.set_current(current);

        self.rotation.advance(self.config.look_easing);
    }

    fn reset(&mut self) {
        self.rotation.snap(Vec2::ZERO);
        self.position
            .snap(clamp_to_boundary(Vec3::ZERO, &self.config.boundary));
        self.keys = MovementKeys::default();
    }
}
