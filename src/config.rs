//! Showcase configuration.
//!
//! Every section deserialises with `#[serde(default)]`, so a host only has to
//! supply the fields it wants to override. Defaults come from `constants.rs`.

use crate::constants::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zoom range is empty: min {min} > max {max}")]
    ZoomRange { min: f32, max: f32 },
    #[error("pitch range is empty: min {min} > max {max}")]
    PitchRange { min: f32, max: f32 },
    #[error("{name} easing must be in (0, 1], got {value}")]
    Easing { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("hallway boundary is empty: min {min} > max {max}")]
    BoundaryRange { min: Vec2, max: Vec2 },
    #[error("target fps must be a positive frame rate, got {0}")]
    FrameRate(f32),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub layout: LayoutConfig,
    pub orbit: OrbitConfig,
    pub walk: WalkConfig,
    pub orbit_input: InputProfile,
    pub walk_input: InputProfile,
    pub picking: PickConfig,
    pub frame: FrameConfig,
    pub motion: MotionConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_radius: f32,
    pub jitter: f32,
    /// Fixed seed for the radial jitter; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: SPHERE_BASE_RADIUS,
            jitter: SPHERE_RADIUS_JITTER,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OrbitConfig {
    /// Initial rotation in degrees: `x` is pitch, `y` is yaw.
    pub initial_rotation: Vec2,
    pub initial_zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub easing: f32,
    /// Optional `[min, max]` pitch clamp in degrees. Yaw is never clamped.
    pub pitch_limits: Option<[f32; 2]>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            initial_rotation: Vec2::new(ORBIT_INITIAL_PITCH_DEG, ORBIT_INITIAL_YAW_DEG),
            initial_zoom: ORBIT_INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            easing: ORBIT_EASING,
            pitch_limits: None,
        }
    }
}

/// Region the walk camera may stand in, on the ground (x, z) plane.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Boundary {
    /// Independent per-axis clamp: `min`/`max` hold (x, z).
    Hallway { min: Vec2, max: Vec2 },
    /// Radial clamp around the room origin.
    Circle { radius: f32 },
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::Hallway {
            min: Vec2::new(-HALLWAY_HALF_WIDTH, HALLWAY_Z_MIN),
            max: Vec2::new(HALLWAY_HALF_WIDTH, HALLWAY_Z_MAX),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WalkConfig {
    pub look_easing: f32,
    pub position_easing: f32,
    pub move_speed: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub boundary: Boundary,
    pub layout_radius: f32,
    pub layout_jitter: f32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            look_easing: WALK_LOOK_EASING,
            position_easing: WALK_POSITION_EASING,
            move_speed: WALK_MOVE_SPEED,
            min_pitch: MIN_PITCH_DEG,
            max_pitch: MAX_PITCH_DEG,
            boundary: Boundary::default(),
            layout_radius: ROOM_LAYOUT_RADIUS,
            layout_jitter: ROOM_LAYOUT_JITTER,
        }
    }
}

/// How raw pointer motion maps onto rotation deltas for one scene.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct InputProfile {
    /// Degrees of rotation per pixel of mouse/pen drag.
    pub mouse_sensitivity: f32,
    /// Degrees of rotation per pixel of one-finger drag.
    pub touch_sensitivity: f32,
    /// Sign applied to horizontal motion (yaw) and vertical motion (pitch).
    /// `(1, -1)` is the "natural" orbit feel; flipping a sign inverts that axis.
    pub look_sign: Vec2,
    pub drag_threshold: f32,
    pub wheel_factor: f32,
}

impl InputProfile {
    pub fn orbit() -> Self {
        Self {
            mouse_sensitivity: ORBIT_MOUSE_SENSITIVITY,
            touch_sensitivity: ORBIT_TOUCH_SENSITIVITY,
            look_sign: Vec2::new(1.0, -1.0),
            drag_threshold: DRAG_THRESHOLD_PX,
            wheel_factor: WHEEL_ZOOM_FACTOR,
        }
    }

    pub fn walk() -> Self {
        Self {
            mouse_sensitivity: WALK_MOUSE_SENSITIVITY,
            touch_sensitivity: WALK_TOUCH_SENSITIVITY,
            look_sign: Vec2::new(-1.0, 1.0),
            drag_threshold: DRAG_THRESHOLD_PX,
            wheel_factor: WHEEL_ZOOM_FACTOR,
        }
    }
}

impl Default for InputProfile {
    fn default() -> Self {
        Self::orbit()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct PickConfig {
    pub base_radius: f32,
    pub tolerance: f32,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            base_radius: PICK_BASE_RADIUS_PX,
            tolerance: PICK_TOLERANCE_PX,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct FrameConfig {
    pub target_fps: f32,
}

impl FrameConfig {
    /// Interval for `target_fps`, or `None` when no `Duration` can hold it.
    pub fn try_min_interval(&self) -> Option<Duration> {
        if !(self.target_fps > 0.0) {
            return None;
        }
        Duration::try_from_secs_f32(1.0 / self.target_fps).ok()
    }

    /// Falls back to the default rate when `target_fps` is unusable.
    pub fn min_interval(&self) -> Duration {
        self.try_min_interval()
            .unwrap_or_else(|| Duration::from_secs_f32(1.0 / TARGET_FPS))
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct MotionConfig {
    pub float_amplitude: f32,
    pub float_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            float_amplitude: FLOAT_AMPLITUDE,
            float_speed: FLOAT_SPEED,
        }
    }
}

impl ShowcaseConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `from_json`, but logs and falls back to defaults on any error.
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[config] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let orbit = &self.orbit;
        if !(orbit.min_zoom <= orbit.max_zoom) {
            return Err(ConfigError::ZoomRange {
                min: orbit.min_zoom,
                max: orbit.max_zoom,
            });
        }
        if let Some([min, max]) = orbit.pitch_limits {
            if !(min <= max) {
                return Err(ConfigError::PitchRange { min, max });
            }
        }
        if !(self.walk.min_pitch <= self.walk.max_pitch) {
            return Err(ConfigError::PitchRange {
                min: self.walk.min_pitch,
                max: self.walk.max_pitch,
            });
        }
        check_easing("orbit", orbit.easing)?;
        check_easing("walk look", self.walk.look_easing)?;
        check_easing("walk position", self.walk.position_easing)?;
        check_non_negative("layout jitter", self.layout.jitter)?;
        check_non_negative("walk move speed", self.walk.move_speed)?;
        check_non_negative("pick tolerance", self.picking.tolerance)?;
        check_non_negative("pick radius", self.picking.base_radius)?;
        match self.walk.boundary {
            Boundary::Circle { radius } => check_non_negative("boundary radius", radius)?,
            Boundary::Hallway { min, max } => {
                if !(min.x <= max.x && min.y <= max.y) {
                    return Err(ConfigError::BoundaryRange { min, max });
                }
            }
        }
        if self.frame.try_min_interval().is_none() {
            return Err(ConfigError::FrameRate(self.frame.target_fps));
        }
        Ok(())
    }
}

fn check_easing(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Easing { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
