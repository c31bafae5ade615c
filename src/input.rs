//! Pointer, touch, wheel and key handling, decoupled from rendering.
//!
//! `InputTracker` turns raw event coordinates into camera *target* changes.
//! It never touches current camera values or projected state.

use crate::camera::{CameraControl, MoveKey, MovementKeys};
use crate::config::InputProfile;
use crate::constants::{KEY_ROTATE_STEP_DEG, KEY_ZOOM_STEP, PINCH_MIN_DISTANCE_PX};
use glam::Vec2;

/// One active touch contact in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Touch(i32),
}

/// Gesture states. Valid transitions:
///
/// - `Idle -> Dragging` on press or a one-finger touch
/// - `Idle | Dragging -> PinchZooming` when a second finger lands
/// - `PinchZooming -> Dragging` when one of two fingers lifts
/// - `Dragging -> Idle` on release
/// - `PinchZooming -> Idle` when every finger lifts at once
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    Dragging {
        source: DragSource,
        start: Vec2,
        last: Vec2,
    },
    PinchZooming {
        initial_distance: f32,
        initial_zoom: f32,
    },
}

/// Outcome of lifting the pointer or the last finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Press and release without crossing the drag threshold.
    Click(Vec2),
    /// A drag or pinch ended; callers should not treat it as a selection.
    GestureEnd,
    /// Nothing was pressed.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct InputTracker {
    profile: InputProfile,
    state: GestureState,
    dragged: bool,
    keys: MovementKeys,
}

impl InputTracker {
    pub fn new(profile: InputProfile) -> Self {
        Self {
            profile,
            state: GestureState::Idle,
            dragged: false,
            keys: MovementKeys::default(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn profile(&self) -> &InputProfile {
        &self.profile
    }

    /// Whether the current (or most recent) press moved past the drag
    /// threshold. Remains readable after release so click handlers can
    /// suppress selection after a drag.
    pub fn dragged(&self) -> bool {
        self.dragged
    }

    pub fn keys(&self) -> MovementKeys {
        self.keys
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.state = GestureState::Dragging {
            source: DragSource::Pointer,
            start: position,
            last: position,
        };
        self.dragged = false;
    }

    /// Returns true when the move produced a rotation.
    pub fn pointer_move<C>(&mut self, position: Vec2, camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        match self.state {
            GestureState::Dragging {
                source: DragSource::Pointer,
                ..
            } => self.drag_to(position, self.profile.mouse_sensitivity, camera),
            _ => false,
        }
    }

    pub fn pointer_up(&mut self, position: Vec2) -> Release {
        match self.state {
            GestureState::Dragging {
                source: DragSource::Pointer,
                ..
            } => {
                self.state = GestureState::Idle;
                if self.dragged {
                    log::debug!("[input] drag end");
                    Release::GestureEnd
                } else {
                    Release::Click(position)
                }
            }
            _ => Release::Ignored,
        }
    }

    /// Pointer capture lost or gesture cancelled by the host; never a click.
    pub fn pointer_cancel(&mut self) {
        if let GestureState::Dragging {
            source: DragSource::Pointer,
            ..
        } = self.state
        {
            self.state = GestureState::Idle;
        }
    }

    pub fn wheel<C>(&mut self, delta_y: f32, camera: &mut C)
    where
        C: CameraControl + ?Sized,
    {
        let delta = delta_y * -self.profile.wheel_factor;
        if delta != 0.0 {
            camera.apply_zoom_delta(delta);
        }
    }

    /// `touches` holds every contact currently on the surface.
    pub fn touch_start<C>(&mut self, touches: &[TouchPoint], camera: &mut C)
    where
        C: CameraControl + ?Sized,
    {
        match touches {
            [] => {}
            [only] => {
                if self.is_idle() {
                    self.begin_touch_drag(*only);
                    self.dragged = false;
                }
            }
            [a, b, ..] => self.begin_pinch(*a, *b, camera),
        }
    }

    /// Returns true when the move changed a camera target.
    pub fn touch_move<C>(&mut self, touches: &[TouchPoint], camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        match self.state {
            GestureState::Dragging {
                source: DragSource::Touch(id),
                ..
            } => match touches.iter().find(|t| t.id == id) {
                Some(touch) => self.drag_to(touch.position, self.profile.touch_sensitivity, camera),
                None => false,
            },
            GestureState::PinchZooming {
                initial_distance,
                initial_zoom,
            } => {
                let [a, b, ..] = touches else {
                    return false;
                };
                if initial_distance < PINCH_MIN_DISTANCE_PX {
                    return false;
                }
                let distance = pinch_distance(a.position, b.position);
                camera.set_target_zoom(initial_zoom * (distance / initial_distance));
                true
            }
            _ => false,
        }
    }

    /// `remaining` holds the contacts still on the surface after the lift.
    pub fn touch_end<C>(&mut self, remaining: &[TouchPoint], camera: &mut C) -> Release
    where
        C: CameraControl + ?Sized,
    {
        match (self.state, remaining) {
            (GestureState::Idle, _) => Release::Ignored,
            (GestureState::Dragging { source: DragSource::Pointer, .. }, _) => Release::Ignored,
            (GestureState::Dragging { last, .. }, []) => {
                self.state = GestureState::Idle;
                if self.dragged {
                    Release::GestureEnd
                } else {
                    Release::Click(last)
                }
            }
            (GestureState::Dragging { source, .. }, [first, ..]) => {
                if remaining.iter().any(|t| DragSource::Touch(t.id) == source) {
                    // Some other contact lifted; the drag carries on.
                    return Release::Ignored;
                }
                // Our finger lifted while another stayed down: follow the survivor.
                self.begin_touch_drag(*first);
                Release::GestureEnd
            }
            (GestureState::PinchZooming { .. }, []) => {
                self.state = GestureState::Idle;
                Release::GestureEnd
            }
            (GestureState::PinchZooming { .. }, [only]) => {
                log::debug!("[input] pinch -> drag");
                self.begin_touch_drag(*only);
                Release::GestureEnd
            }
            (GestureState::PinchZooming { .. }, [a, b, ..]) => {
                self.begin_pinch(*a, *b, camera);
                Release::GestureEnd
            }
        }
    }

    /// Returns whether the held-key state changed; repeats return false.
    pub fn key_down<C>(&mut self, key: MoveKey, camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        self.set_key(key, true, camera)
    }

    pub fn key_up<C>(&mut self, key: MoveKey, camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        self.set_key(key, false, camera)
    }

    /// Focus lost or scene closing: drop every held key and any gesture.
    pub fn release_all<C>(&mut self, camera: &mut C)
    where
        C: CameraControl + ?Sized,
    {
        if self.keys.any() {
            log::debug!("[input] releasing held keys");
        }
        self.keys = MovementKeys::default();
        camera.set_movement_keys(self.keys);
        self.state = GestureState::Idle;
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.dragged = false;
        self.keys = MovementKeys::default();
    }

    fn set_key<C>(&mut self, key: MoveKey, down: bool, camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        let changed = self.keys.set(key, down);
        if changed {
            camera.set_movement_keys(self.keys);
        }
        changed
    }

    fn begin_touch_drag(&mut self, touch: TouchPoint) {
        self.state = GestureState::Dragging {
            source: DragSource::Touch(touch.id),
            start: touch.position,
            last: touch.position,
        };
    }

    fn begin_pinch<C>(&mut self, a: TouchPoint, b: TouchPoint, camera: &mut C)
    where
        C: CameraControl + ?Sized,
    {
        log::debug!("[input] pinch start");
        self.state = GestureState::PinchZooming {
            initial_distance: pinch_distance(a.position, b.position),
            initial_zoom: camera.target_zoom(),
        };
        self.dragged = true;
    }

    fn drag_to<C>(&mut self, position: Vec2, sensitivity: f32, camera: &mut C) -> bool
    where
        C: CameraControl + ?Sized,
    {
        let GestureState::Dragging { source, start, last } = self.state else {
            return false;
        };
        if position.distance(start) > self.profile.drag_threshold {
            self.dragged = true;
        }
        self.state = GestureState::Dragging {
            source,
            start,
            last: position,
        };
        let delta = rotation_delta(&self.profile, position - last, sensitivity);
        if delta == Vec2::ZERO {
            return false;
        }
        camera.apply_rotation_delta(delta);
        true
    }
}

/// Map a pixel delta to a rotation delta `(pitch, yaw)` in degrees.
#[inline]
pub fn rotation_delta(profile: &InputProfile, pixels: Vec2, sensitivity: f32) -> Vec2 {
    Vec2::new(
        pixels.y * sensitivity * profile.look_sign.y,
        pixels.x * sensitivity * profile.look_sign.x,
    )
}

#[inline]
pub fn pinch_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[inline]
pub fn move_key_for(key: &str) -> Option<MoveKey> {
    match key {
        "w" | "W" | "ArrowUp" => Some(MoveKey::Forward),
        "s" | "S" | "ArrowDown" => Some(MoveKey::Back),
        "a" | "A" | "ArrowLeft" => Some(MoveKey::Left),
        "d" | "D" | "ArrowRight" => Some(MoveKey::Right),
        _ => None,
    }
}

/// Discrete keyboard commands for the overview scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Rotate(Vec2),
    Zoom(f32),
    ResetView,
    Close,
}

#[inline]
pub fn orbit_key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::Rotate(Vec2::new(0.0, -KEY_ROTATE_STEP_DEG))),
        "ArrowRight" => Some(KeyAction::Rotate(Vec2::new(0.0, KEY_ROTATE_STEP_DEG))),
        "ArrowUp" => Some(KeyAction::Rotate(Vec2::new(KEY_ROTATE_STEP_DEG, 0.0))),
        "ArrowDown" => Some(KeyAction::Rotate(Vec2::new(-KEY_ROTATE_STEP_DEG, 0.0))),
        "+" | "=" => Some(KeyAction::Zoom(KEY_ZOOM_STEP)),
        "-" | "_" => Some(KeyAction::Zoom(-KEY_ZOOM_STEP)),
        "0" => Some(KeyAction::ResetView),
        "Escape" => Some(KeyAction::Close),
        _ => None,
    }
}
