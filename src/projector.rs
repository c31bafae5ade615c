//! Per-object transforms for the layered (perspective-less) renderer.

use crate::camera::{OrbitSnapshot, WalkSnapshot};
use crate::config::MotionConfig;
use crate::constants::DEPTH_BASE;
use glam::{Quat, Vec3};

/// Where one object sits this frame, in camera space.
///
/// `position.z` grows toward the viewer; `depth_order` is the paint key
/// (higher paints later, i.e. on top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub position: Vec3,
    pub depth_order: i32,
    /// Visual scale the renderer applies to the object footprint.
    pub scale: f32,
    /// False for walk-scene objects at or behind the viewer.
    pub visible: bool,
}

impl Default for Projected {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            depth_order: DEPTH_BASE,
            scale: 1.0,
            visible: true,
        }
    }
}

/// Sinusoidal vertical bob; phase offset by object index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub amplitude: f32,
    pub speed: f32,
}

impl FloatMotion {
    #[inline]
    pub fn offset(&self, time_sec: f32, index: usize) -> f32 {
        self.amplitude * (self.speed * time_sec + index as f32).sin()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransformProjector {
    float: Option<FloatMotion>,
    depth_base: i32,
}

impl TransformProjector {
    /// `reduced_motion` is sampled once here and disables floating entirely.
    pub fn new(motion: &MotionConfig, reduced_motion: bool) -> Self {
        let float = (!reduced_motion && motion.float_amplitude != 0.0).then_some(FloatMotion {
            amplitude: motion.float_amplitude,
            speed: motion.float_speed,
        });
        Self {
            float,
            depth_base: DEPTH_BASE,
        }
    }

    /// A projector that never floats.
    pub fn still() -> Self {
        Self {
            float: None,
            depth_base: DEPTH_BASE,
        }
    }

    pub fn float_motion(&self) -> Option<FloatMotion> {
        self.float
    }

    #[inline]
    pub fn depth_order(&self, z: f32) -> i32 {
        self.depth_base + z.round() as i32
    }

    /// Yaw about the vertical axis, then pitch about the horizontal axis,
    /// then float, then zoom.
    pub fn project_orbit(
        &self,
        point: Vec3,
        index: usize,
        camera: &OrbitSnapshot,
        time_sec: f32,
    ) -> Projected {
        let mut p = orbit_rotation(camera.rotation.x, camera.rotation.y) * point;
        if let Some(float) = &self.float {
            p.y += float.offset(time_sec, index);
        }
        p *= camera.zoom;
        Projected {
            position: p,
            depth_order: self.depth_order(p.z),
            scale: camera.zoom,
            visible: true,
        }
    }

    /// Move the world opposite to the viewer: translate by `-position`, then
    /// undo yaw and pitch in the same order the orbit path applies them.
    pub fn project_walk(&self, point: Vec3, camera: &WalkSnapshot) -> Projected {
        let p = orbit_rotation(-camera.rotation.x, -camera.rotation.y) * (point - camera.position);
        Projected {
            position: p,
            depth_order: self.depth_order(p.z),
            scale: 1.0,
            visible: p.z < 0.0,
        }
    }
}

impl Default for TransformProjector {
    fn default() -> Self {
        Self::new(&MotionConfig::default(), false)
    }
}

/// Rotation applying yaw (about +Y) first, then pitch (about +X). Degrees.
#[inline]
pub fn orbit_rotation(pitch_deg: f32, yaw_deg: f32) -> Quat {
    Quat::from_rotation_x(pitch_deg.to_radians()) * Quat::from_rotation_y(yaw_deg.to_radians())
}

/// Indices of `projected` in paint order: back to front, ties kept in input order.
pub fn paint_order<'a, I>(projected: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Projected>,
{
    let keys: Vec<i32> = projected.into_iter().map(|p| p.depth_order).collect();
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order
}
