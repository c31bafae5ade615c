/// Camera, input and picking tuning constants.
///
/// These express intended behavior (easing fractions, clamp limits, pixel
/// thresholds) and keep magic numbers out of the code. `config.rs` uses them
/// as defaults; every value can be overridden per showcase.

// Sphere layout (scene units)
pub const SPHERE_BASE_RADIUS: f32 = 500.0;
pub const SPHERE_RADIUS_JITTER: f32 = 25.0; // uniform +/- offset per point
pub const GOLDEN_RATIO: f32 = 1.618_034; // (1 + sqrt 5) / 2

// Orbit camera
pub const ORBIT_INITIAL_PITCH_DEG: f32 = 0.0;
pub const ORBIT_INITIAL_YAW_DEG: f32 = 40.0;
pub const ORBIT_INITIAL_ZOOM: f32 = 0.7;
pub const MIN_ZOOM: f32 = 0.4;
pub const MAX_ZOOM: f32 = 2.0;
pub const ORBIT_EASING: f32 = 0.1; // fraction of the remaining gap closed per tick

// Walk camera (detail room)
pub const WALK_LOOK_EASING: f32 = 0.15;
pub const WALK_POSITION_EASING: f32 = 0.12;
pub const WALK_MOVE_SPEED: f32 = 8.0; // scene units per tick per key
pub const MIN_PITCH_DEG: f32 = -60.0;
pub const MAX_PITCH_DEG: f32 = 60.0;
pub const HALLWAY_HALF_WIDTH: f32 = 300.0;
pub const HALLWAY_Z_MIN: f32 = -2000.0;
pub const HALLWAY_Z_MAX: f32 = 400.0;
pub const ROOM_BOUNDARY_RADIUS: f32 = 600.0;
pub const ROOM_LAYOUT_RADIUS: f32 = 450.0;
pub const ROOM_LAYOUT_JITTER: f32 = 0.0;

// Input
pub const DRAG_THRESHOLD_PX: f32 = 5.0;
pub const WHEEL_ZOOM_FACTOR: f32 = 0.001;
pub const ORBIT_MOUSE_SENSITIVITY: f32 = 0.3; // degrees per pixel
pub const ORBIT_TOUCH_SENSITIVITY: f32 = 0.2;
pub const WALK_MOUSE_SENSITIVITY: f32 = 0.15;
pub const WALK_TOUCH_SENSITIVITY: f32 = 0.1;
pub const KEY_ROTATE_STEP_DEG: f32 = 5.0;
pub const KEY_ZOOM_STEP: f32 = 0.1;
pub const PINCH_MIN_DISTANCE_PX: f32 = 1.0; // below this a pinch baseline is unusable

// Floating motion
pub const FLOAT_AMPLITUDE: f32 = 8.0;
pub const FLOAT_SPEED: f32 = 1.2; // radians per second

// Picking
pub const PICK_BASE_RADIUS_PX: f32 = 60.0;
pub const PICK_TOLERANCE_PX: f32 = 10.0;

// Paint order
pub const DEPTH_BASE: i32 = 1000;

// Frame pacing
pub const TARGET_FPS: f32 = 60.0;
