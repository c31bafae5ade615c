//! Host-agnostic frame pacing.
//!
//! Any host loop (requestAnimationFrame, a timer, a test) calls
//! [`FrameScheduler::drive`] as often as it likes; work happens at most once
//! per `min_interval`.

use crate::config::FrameConfig;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Something advanced by accepted frames.
pub trait Tick {
    fn tick(&mut self, dt: Duration);
}

/// Stops the scheduler it came from. Safe to call repeatedly and from inside
/// a tick.
#[derive(Clone, Debug)]
pub struct StopHandle {
    running: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

#[derive(Debug)]
pub struct FrameScheduler {
    min_interval: Duration,
    last: Option<Instant>,
    running: Rc<Cell<bool>>,
    accepted: u64,
}

impl FrameScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
            running: Rc::new(Cell::new(false)),
            accepted: 0,
        }
    }

    /// Unusable rates (zero, negative, NaN, too small to express) fall back
    /// to the default frame rate.
    pub fn with_fps(fps: f32) -> Self {
        Self::new(FrameConfig { target_fps: fps }.min_interval())
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Frames that did work since construction.
    pub fn accepted_frames(&self) -> u64 {
        self.accepted
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: self.running.clone(),
        }
    }

    /// Begin (or resume) ticking. Forgets the previous timestamp so the first
    /// frame after a pause is not throttled against it.
    pub fn start(&mut self) {
        if !self.running.get() {
            log::info!("[frame] start");
        }
        self.running.set(true);
        self.last = None;
    }

    pub fn stop(&mut self) {
        if self.running.get() {
            log::info!("[frame] stop");
        }
        self.running.set(false);
    }

    /// Decide whether a callback at `now` should do work. Returns the time
    /// since the previous accepted frame (zero for the first one).
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if !self.running.get() {
            return None;
        }
        let dt = match self.last {
            Some(last) => {
                let elapsed = if now > last { now - last } else { Duration::ZERO };
                if elapsed < self.min_interval {
                    return None;
                }
                elapsed
            }
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.accepted += 1;
        Some(dt)
    }

    /// Poll and, when the frame is accepted, tick `target`. Returns whether
    /// the target ran.
    pub fn drive<T>(&mut self, now: Instant, target: &mut T) -> bool
    where
        T: Tick + ?Sized,
    {
        match self.poll(now) {
            Some(dt) => {
                target.tick(dt);
                true
            }
            None => false,
        }
    }
}
