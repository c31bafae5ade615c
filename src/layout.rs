//! Fibonacci-sphere placement for scene items.

use crate::config::LayoutConfig;
use crate::constants::GOLDEN_RATIO;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One item's fixed place on the sphere, in object space.
///
/// Generated once when a scene is built and never recomputed; only the
/// camera-relative transform of the item changes between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub radius: f32,
    /// Azimuth in radians (unwrapped: `i * 2π * φ`).
    pub theta: f32,
    /// Polar angle in radians, `[0, π]`.
    pub phi: f32,
    pub position: Vec3,
}

impl SpherePoint {
    pub fn new(radius: f32, theta: f32, phi: f32) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self {
            radius,
            theta,
            phi,
            position: Vec3::new(
                radius * sin_phi * cos_theta,
                radius * sin_phi * sin_theta,
                radius * cos_phi,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SphereLayout {
    pub base_radius: f32,
    pub jitter: f32,
}

impl SphereLayout {
    pub fn new(base_radius: f32, jitter: f32) -> Self {
        Self {
            base_radius,
            jitter: jitter.abs(),
        }
    }

    /// Lay out `n` points, jittering radii with a fresh entropy-seeded RNG.
    pub fn layout(&self, n: usize) -> Vec<SpherePoint> {
        self.layout_with_rng(n, &mut StdRng::from_entropy())
    }

    /// Lay out `n` points drawing the radial jitter from `rng`.
    ///
    /// Polar angles follow `acos(1 - 2t)` for equal-area bands; azimuths step
    /// by the golden angle so no two points line up for any `n`.
    pub fn layout_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<SpherePoint> {
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let phi = (1.0 - 2.0 * t).clamp(-1.0, 1.0).acos();
                let theta = i as f32 * TAU * GOLDEN_RATIO;
                let offset = if self.jitter > 0.0 {
                    rng.gen_range(-self.jitter..=self.jitter)
                } else {
                    0.0
                };
                SpherePoint::new(self.base_radius + offset, theta, phi)
            })
            .collect()
    }
}

impl From<&LayoutConfig> for SphereLayout {
    fn from(config: &LayoutConfig) -> Self {
        Self::new(config.base_radius, config.jitter)
    }
}

/// Build a layout from config, honoring its fixed seed when present.
pub fn layout_from_config(config: &LayoutConfig, n: usize) -> Vec<SpherePoint> {
    let layout = SphereLayout::from(config);
    match config.seed {
        Some(seed) => layout.layout_with_rng(n, &mut StdRng::seed_from_u64(seed)),
        None => layout.layout(n),
    }
}
