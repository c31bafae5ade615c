//! Interactive pseudo-3D portfolio showcase.
//!
//! Items sit as bubbles on a Fibonacci sphere around an orbit camera;
//! selecting one opens a walkable detail room. The camera, input, projection,
//! picking and frame-pacing core is target-independent and tested on the
//! host. The browser shell (`Showcase`) is only built for `wasm32`.

pub mod camera;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod input;
pub mod layout;
pub mod picking;
pub mod projector;
pub mod scene;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

pub use camera::{
    CameraControl, Damped, MoveKey, MovementKeys, OrbitCamera, OrbitSnapshot, WalkCamera,
    WalkSnapshot,
};
pub use config::{Boundary, ConfigError, InputProfile, ShowcaseConfig};
pub use dispatch::{ActiveScene, InteractionDispatcher, SelectionListener, SelectionState};
pub use input::{GestureState, InputTracker, Release, TouchPoint};
pub use layout::{SphereLayout, SpherePoint};
pub use picking::{Footprint, Picker};
pub use projector::{Projected, TransformProjector};
pub use scene::{ItemRecord, RenderSink, Scene, SceneObject};
pub use scheduler::{FrameScheduler, StopHandle, Tick};

#[cfg(target_arch = "wasm32")]
pub use app::Showcase;
