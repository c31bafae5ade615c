//! One displayed scene: its camera, input tracker and laid-out objects.
//!
//! A `Scene` owns everything it mutates; nothing here is global. The overview
//! is `Scene<OrbitCamera, H>` and the detail room is `Scene<WalkCamera, H>`,
//! where `H` is the renderer's opaque handle for an item.

use crate::camera::{CameraControl, MoveKey, OrbitCamera, OrbitSnapshot, WalkCamera, WalkSnapshot};
use crate::input::{InputTracker, Release, TouchPoint};
use crate::layout::SpherePoint;
use crate::picking::{Footprint, Picker};
use crate::projector::{paint_order, Projected, TransformProjector};
use crate::scheduler::Tick;
use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A portfolio entry as supplied by the item source.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "color")]
    pub color_hex: Option<String>,
    #[serde(default, alias = "image")]
    pub image_ref: Option<String>,
    #[serde(default, alias = "folder")]
    pub folder_ref: Option<String>,
}

impl ItemRecord {
    pub fn list_from_json(text: &str) -> Result<Vec<ItemRecord>, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Clone, Debug)]
pub struct SceneObject<H> {
    pub index: usize,
    pub record: ItemRecord,
    pub handle: H,
    point: SpherePoint,
    projected: Projected,
}

impl<H> SceneObject<H> {
    pub fn point(&self) -> &SpherePoint {
        &self.point
    }

    pub fn projected(&self) -> &Projected {
        &self.projected
    }
}

/// Receives per-frame transforms; implemented by the rendering collaborator.
/// `apply` is called back to front.
pub trait RenderSink<H> {
    fn apply(&mut self, handle: &H, projected: &Projected);

    /// Global zoom for any scene-wide scale the renderer applies.
    fn set_zoom(&mut self, _zoom: f32) {}

    fn set_highlight(&mut self, _handle: &H, _hovered: bool, _selected: bool) {}
}

/// A camera a scene can own: controllable, snapshot-able and projectable.
pub trait SceneCamera: CameraControl {
    type Snapshot: Copy;

    fn snapshot(&self) -> Self::Snapshot;

    fn project(
        projector: &TransformProjector,
        point: Vec3,
        index: usize,
        snapshot: &Self::Snapshot,
        time_sec: f32,
    ) -> Projected;

    fn zoom_of(_snapshot: &Self::Snapshot) -> f32 {
        1.0
    }
}

impl SceneCamera for OrbitCamera {
    type Snapshot = OrbitSnapshot;

    fn snapshot(&self) -> OrbitSnapshot {
        OrbitCamera::snapshot(self)
    }

    fn project(
        projector: &TransformProjector,
        point: Vec3,
        index: usize,
        snapshot: &OrbitSnapshot,
        time_sec: f32,
    ) -> Projected {
        projector.project_orbit(point, index, snapshot, time_sec)
    }

    fn zoom_of(snapshot: &OrbitSnapshot) -> f32 {
        snapshot.zoom
    }
}

impl SceneCamera for WalkCamera {
    type Snapshot = WalkSnapshot;

    fn snapshot(&self) -> WalkSnapshot {
        WalkCamera::snapshot(self)
    }

    fn project(
        projector: &TransformProjector,
        point: Vec3,
        _index: usize,
        snapshot: &WalkSnapshot,
        _time_sec: f32,
    ) -> Projected {
        projector.project_walk(point, snapshot)
    }
}

pub struct Scene<C, H> {
    name: &'static str,
    camera: C,
    input: InputTracker,
    objects: Vec<SceneObject<H>>,
    by_id: FnvHashMap<String, usize>,
    projector: TransformProjector,
    picker: Picker,
    viewport: Vec2,
    clock: Duration,
    shown: bool,
}

impl<C, H> Scene<C, H>
where
    C: SceneCamera,
{
    /// Bind each item to its layout point. Extra points or items are dropped.
    pub fn new(
        name: &'static str,
        camera: C,
        input: InputTracker,
        projector: TransformProjector,
        picker: Picker,
        items: Vec<(ItemRecord, H)>,
        points: Vec<SpherePoint>,
    ) -> Self {
        if items.len() != points.len() {
            log::warn!(
                "[scene] {}: {} items but {} layout points",
                name,
                items.len(),
                points.len()
            );
        }
        let objects: Vec<SceneObject<H>> = items
            .into_iter()
            .zip(points)
            .enumerate()
            .map(|(index, ((record, handle), point))| SceneObject {
                index,
                record,
                handle,
                point,
                projected: Projected::default(),
            })
            .collect();
        let by_id = objects
            .iter()
            .map(|o| (o.record.id.clone(), o.index))
            .collect();
        let mut scene = Self {
            name,
            camera,
            input,
            objects,
            by_id,
            projector,
            picker,
            viewport: Vec2::ZERO,
            clock: Duration::ZERO,
            shown: false,
        };
        scene.recompute();
        scene
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Reset the camera to its initial values and start accepting input.
    pub fn show(&mut self) {
        log::info!("[scene] show {} ({} objects)", self.name, self.objects.len());
        self.camera.reset();
        self.input.reset();
        self.clock = Duration::ZERO;
        self.shown = true;
        self.recompute();
    }

    /// Drop held keys and gestures and reset the camera.
    pub fn hide(&mut self) {
        log::info!("[scene] hide {}", self.name);
        self.input.release_all(&mut self.camera);
        self.camera.reset();
        self.shown = false;
    }

    pub fn snapshot(&self) -> C::Snapshot {
        self.camera.snapshot()
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn objects(&self) -> &[SceneObject<H>] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject<H>> {
        self.objects.get(index)
    }

    pub fn object_by_id(&self, id: &str) -> Option<&SceneObject<H>> {
        self.by_id.get(id).and_then(|&i| self.objects.get(i))
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn viewport_center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    /// Project every object from the current camera state.
    pub fn recompute(&mut self) {
        let snapshot = self.camera.snapshot();
        let time_sec = self.clock.as_secs_f32();
        for object in &mut self.objects {
            object.projected = C::project(
                &self.projector,
                object.point.position,
                object.index,
                &snapshot,
                time_sec,
            );
        }
    }

    pub fn footprints(&self) -> impl Iterator<Item = Footprint> + '_ {
        let center = self.viewport_center();
        self.objects
            .iter()
            .map(move |o| Footprint::from_projected(&o.projected, center))
    }

    /// Nearest object under `point` (viewport pixels), if any.
    pub fn pick(&self, point: Vec2) -> Option<usize> {
        self.picker.pick(self.footprints(), point)
    }

    pub fn apply_transforms<S>(&self, sink: &mut S)
    where
        S: RenderSink<H> + ?Sized,
    {
        sink.set_zoom(C::zoom_of(&self.camera.snapshot()));
        for i in paint_order(self.objects.iter().map(|o| &o.projected)) {
            let object = &self.objects[i];
            sink.apply(&object.handle, &object.projected);
        }
    }

    /// Tear the scene down, handing render handles back to their owner.
    pub fn into_handles(self) -> Vec<H> {
        self.objects.into_iter().map(|o| o.handle).collect()
    }

    // ---------------- input forwarding ----------------

    pub fn pointer_down(&mut self, position: Vec2) {
        self.input.pointer_down(position);
    }

    pub fn pointer_move(&mut self, position: Vec2) -> bool {
        self.input.pointer_move(position, &mut self.camera)
    }

    pub fn pointer_up(&mut self, position: Vec2) -> Release {
        self.input.pointer_up(position)
    }

    pub fn pointer_cancel(&mut self) {
        self.input.pointer_cancel();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.input.wheel(delta_y, &mut self.camera);
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.input.touch_start(touches, &mut self.camera);
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        self.input.touch_move(touches, &mut self.camera)
    }

    pub fn touch_end(&mut self, remaining: &[TouchPoint]) -> Release {
        self.input.touch_end(remaining, &mut self.camera)
    }

    pub fn key_down(&mut self, key: MoveKey) -> bool {
        self.input.key_down(key, &mut self.camera)
    }

    pub fn key_up(&mut self, key: MoveKey) -> bool {
        self.input.key_up(key, &mut self.camera)
    }

    pub fn release_all(&mut self) {
        self.input.release_all(&mut self.camera);
    }

    pub fn rotate_by(&mut self, delta: Vec2) {
        self.camera.apply_rotation_delta(delta);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.camera.apply_zoom_delta(delta);
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.recompute();
    }
}

impl<C, H> Tick for Scene<C, H>
where
    C: SceneCamera,
{
    fn tick(&mut self, dt: Duration) {
        if !self.shown {
            return;
        }
        self.camera.advance();
        self.clock += dt;
        self.recompute();
    }
}
