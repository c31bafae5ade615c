//! Screen-space hit testing against projected object footprints.

use crate::config::PickConfig;
use crate::projector::Projected;
use glam::Vec2;

/// An object's on-screen circle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub center: Vec2,
    /// Current visual scale; the hit radius is `base_radius * scale`.
    pub scale: f32,
    pub visible: bool,
}

impl Footprint {
    /// Place a projected object on screen: camera-space x/y offset from the
    /// viewport center (no perspective divide).
    pub fn from_projected(projected: &Projected, viewport_center: Vec2) -> Self {
        Self {
            center: viewport_center + projected.position.truncate(),
            scale: projected.scale,
            visible: projected.visible,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Picker {
    pub base_radius: f32,
    pub tolerance: f32,
}

impl Picker {
    pub fn new(base_radius: f32, tolerance: f32) -> Self {
        Self {
            base_radius,
            tolerance,
        }
    }

    #[inline]
    pub fn reach(&self, scale: f32) -> f32 {
        self.base_radius * scale + self.tolerance
    }

    /// Index of the footprint whose center is nearest `point`, among those
    /// within reach. Proximity decides overlaps, not paint order; an exact
    /// tie keeps the earlier index.
    pub fn pick<I>(&self, footprints: I, point: Vec2) -> Option<usize>
    where
        I: IntoIterator<Item = Footprint>,
    {
        let mut best = None::<(usize, f32)>;
        for (i, fp) in footprints.into_iter().enumerate() {
            if !fp.visible {
                continue;
            }
            let distance = fp.center.distance(point);
            if distance > self.reach(fp.scale) {
                continue;
            }
            match best {
                Some((_, bd)) if distance >= bd => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl From<&PickConfig> for Picker {
    fn from(config: &PickConfig) -> Self {
        Self::new(config.base_radius, config.tolerance)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::from(&PickConfig::default())
    }
}
