//! Routes input to whichever scene is active and owns selection state.
//!
//! Only one scene receives input and ticks at a time: opening the detail room
//! hides (and resets) the overview; closing the room tears it down.

use crate::camera::{OrbitCamera, WalkCamera};
use crate::config::ShowcaseConfig;
use crate::input::{move_key_for, orbit_key_action, InputTracker, KeyAction, Release, TouchPoint};
use crate::layout::{layout_from_config, SphereLayout};
use crate::picking::Picker;
use crate::projector::TransformProjector;
use crate::scene::{ItemRecord, RenderSink, Scene, SceneObject};
use crate::scheduler::{FrameScheduler, StopHandle};
use glam::Vec2;
use instant::Instant;

/// Hover and selection, by object index in the active scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
}

impl SelectionState {
    /// Returns whether the hover target changed.
    pub fn hover(&mut self, index: Option<usize>) -> bool {
        let changed = self.hovered != index;
        self.hovered = index;
        changed
    }

    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }

    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

/// Notification points for the interaction collaborator.
pub trait SelectionListener<H> {
    fn on_select(&mut self, object: &SceneObject<H>);
    fn on_deselect(&mut self);

    /// A click landed on an exhibit inside the detail room.
    fn on_room_pick(&mut self, _object: &SceneObject<H>) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveScene {
    Overview,
    Room,
}

pub type OverviewScene<H> = Scene<OrbitCamera, H>;
pub type RoomScene<H> = Scene<WalkCamera, H>;

macro_rules! with_active {
    ($self:ident, $scene:ident => $body:expr) => {
        match $self.room.as_mut() {
            Some($scene) => $body,
            None => {
                let $scene = &mut $self.overview;
                $body
            }
        }
    };
}

pub struct InteractionDispatcher<H> {
    config: ShowcaseConfig,
    reduced_motion: bool,
    overview: OverviewScene<H>,
    room: Option<RoomScene<H>>,
    selection: SelectionState,
    scheduler: FrameScheduler,
    viewport: Vec2,
}

impl<H> InteractionDispatcher<H> {
    /// Build and show the overview. `reduced_motion` is sampled once, here.
    pub fn new(config: ShowcaseConfig, items: Vec<(ItemRecord, H)>, reduced_motion: bool) -> Self {
        let points = layout_from_config(&config.layout, items.len());
        let mut overview = Scene::new(
            "overview",
            OrbitCamera::new(config.orbit.clone()),
            InputTracker::new(config.orbit_input),
            TransformProjector::new(&config.motion, reduced_motion),
            Picker::from(&config.picking),
            items,
            points,
        );
        overview.show();
        let scheduler = FrameScheduler::new(config.frame.min_interval());
        Self {
            config,
            reduced_motion,
            overview,
            room: None,
            selection: SelectionState::default(),
            scheduler,
            viewport: Vec2::ZERO,
        }
    }

    pub fn active(&self) -> ActiveScene {
        if self.room.is_some() {
            ActiveScene::Room
        } else {
            ActiveScene::Overview
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn overview(&self) -> &OverviewScene<H> {
        &self.overview
    }

    pub fn room(&self) -> Option<&RoomScene<H>> {
        self.room.as_ref()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    // ---------------- lifecycle ----------------

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.scheduler.stop_handle()
    }

    /// Host callback: tick the active scene if the frame is due.
    pub fn frame(&mut self, now: Instant) -> bool {
        let scheduler = &mut self.scheduler;
        with_active!(self, scene => scheduler.drive(now, scene))
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.overview.set_viewport(width, height);
        if let Some(room) = self.room.as_mut() {
            room.set_viewport(width, height);
        }
    }

    pub fn apply_transforms<S>(&self, sink: &mut S)
    where
        S: RenderSink<H> + ?Sized,
    {
        let selection = self.selection;
        let highlight = |i: usize| (selection.hovered == Some(i), selection.selected == Some(i));
        match &self.room {
            Some(room) => {
                room.apply_transforms(sink);
                for object in room.objects() {
                    let (hovered, _) = highlight(object.index);
                    sink.set_highlight(&object.handle, hovered, false);
                }
            }
            None => {
                self.overview.apply_transforms(sink);
                for object in self.overview.objects() {
                    let (hovered, selected) = highlight(object.index);
                    sink.set_highlight(&object.handle, hovered, selected);
                }
            }
        }
    }

    pub fn pick(&self, point: Vec2) -> Option<usize> {
        match &self.room {
            Some(room) => room.pick(point),
            None => self.overview.pick(point),
        }
    }

    // ---------------- selection ----------------

    pub fn select<L>(&mut self, index: usize, listener: &mut L) -> bool
    where
        L: SelectionListener<H> + ?Sized,
    {
        let Some(object) = self.overview.object(index) else {
            return false;
        };
        if self.selection.select(index) {
            log::info!("[select] {} ({})", object.record.id, index);
            listener.on_select(object);
        }
        true
    }

    pub fn deselect<L>(&mut self, listener: &mut L)
    where
        L: SelectionListener<H> + ?Sized,
    {
        if self.selection.deselect() {
            log::info!("[select] cleared");
            listener.on_deselect();
        }
    }

    /// Switch to the detail room for the current selection. The overview is
    /// hidden (camera reset, held input released) until the room closes.
    pub fn open_room(&mut self, items: Vec<(ItemRecord, H)>) -> Option<Vec<H>> {
        let previous = self.room.take().map(Scene::into_handles);
        self.overview.hide();
        self.selection.hover(None);
        let walk = &self.config.walk;
        let points = SphereLayout::new(walk.layout_radius, walk.layout_jitter).layout(items.len());
        let mut room = Scene::new(
            "room",
            WalkCamera::new(walk.clone()),
            InputTracker::new(self.config.walk_input),
            TransformProjector::new(&self.config.motion, true),
            Picker::from(&self.config.picking),
            items,
            points,
        );
        room.set_viewport(self.viewport.x, self.viewport.y);
        room.show();
        self.room = Some(room);
        self.scheduler.start();
        previous
    }

    /// Tear the room down and return to the overview. Returns the room's
    /// render handles so the host can dispose of them.
    pub fn close_room<L>(&mut self, listener: &mut L) -> Option<Vec<H>>
    where
        L: SelectionListener<H> + ?Sized,
    {
        let mut room = self.room.take()?;
        room.hide();
        self.selection.hover(None);
        self.overview.show();
        self.scheduler.start();
        self.deselect(listener);
        Some(room.into_handles())
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    // ---------------- input ----------------

    pub fn pointer_down(&mut self, position: Vec2) {
        with_active!(self, scene => scene.pointer_down(position));
    }

    /// Rotates while dragging; otherwise refreshes hover. Returns whether the
    /// hover target changed.
    pub fn pointer_move(&mut self, position: Vec2) -> bool {
        let hovered = with_active!(self, scene => {
            scene.pointer_move(position);
            if scene.input().is_idle() {
                Some(scene.pick(position))
            } else {
                None
            }
        });
        match hovered {
            Some(index) => self.selection.hover(index),
            None => false,
        }
    }

    pub fn pointer_up<L>(&mut self, position: Vec2, listener: &mut L) -> Option<usize>
    where
        L: SelectionListener<H> + ?Sized,
    {
        let release = with_active!(self, scene => scene.pointer_up(position));
        self.handle_release(release, listener)
    }

    pub fn pointer_cancel(&mut self) {
        with_active!(self, scene => scene.pointer_cancel());
    }

    pub fn wheel(&mut self, delta_y: f32) {
        with_active!(self, scene => scene.wheel(delta_y));
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        with_active!(self, scene => scene.touch_start(touches));
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        with_active!(self, scene => scene.touch_move(touches))
    }

    pub fn touch_end<L>(&mut self, remaining: &[TouchPoint], listener: &mut L) -> Option<usize>
    where
        L: SelectionListener<H> + ?Sized,
    {
        let release = with_active!(self, scene => scene.touch_end(remaining));
        self.handle_release(release, listener)
    }

    /// Returns whether the key was consumed.
    pub fn key_down<L>(&mut self, key: &str, listener: &mut L) -> bool
    where
        L: SelectionListener<H> + ?Sized,
    {
        if self.room.is_some() {
            if key == "Escape" {
                self.close_room(listener);
                return true;
            }
            return match (self.room.as_mut(), move_key_for(key)) {
                (Some(room), Some(k)) => {
                    room.key_down(k);
                    true
                }
                _ => false,
            };
        }
        match orbit_key_action(key) {
            Some(KeyAction::Rotate(delta)) => self.overview.rotate_by(delta),
            Some(KeyAction::Zoom(delta)) => self.overview.zoom_by(delta),
            Some(KeyAction::ResetView) => self.overview.reset_view(),
            Some(KeyAction::Close) => self.deselect(listener),
            None => return false,
        }
        true
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match (self.room.as_mut(), move_key_for(key)) {
            (Some(room), Some(k)) => {
                room.key_up(k);
                true
            }
            _ => false,
        }
    }

    /// Focus left the showcase: release every held key and gesture.
    pub fn blur(&mut self) {
        with_active!(self, scene => scene.release_all());
    }

    fn handle_release<L>(&mut self, release: Release, listener: &mut L) -> Option<usize>
    where
        L: SelectionListener<H> + ?Sized,
    {
        let Release::Click(position) = release else {
            return None;
        };
        let index = self.pick(position)?;
        match &self.room {
            Some(room) => {
                if let Some(object) = room.object(index) {
                    listener.on_room_pick(object);
                }
            }
            None => {
                self.select(index, listener);
            }
        }
        Some(index)
    }
}
