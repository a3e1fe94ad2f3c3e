//! Wandering dipole magnets.
//!
//! A magnet is two sample points (poles) either side of its center along its
//! current angle. The north pole pushes particles away, the south pole pulls
//! them in, each with a clamped inverse-square law. Magnets drift across the
//! bounds by following a coherent noise walk and rotate slowly. They are
//! never drawn; only their effect on the iron is visible.

use crate::bounds::Bounds;
use crate::force::{inverse_square, ForceSource};
use crate::noise_walk::CoherentNoise;
use crate::params::SimParams;
use crate::prng::Xorshift64;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone)]
pub struct Magnet {
    position: DVec2,
    phase_x: f64,
    phase_y: f64,
    angle: f64,
    pole_separation: f64,
    strength: f64,
    min_distance: f64,
    max_distance: f64,
    phase_step: f64,
    angle_step: f64,
}

impl Magnet {
    /// Creates a magnet at `position` with the given orientation and both
    /// noise phases at zero.
    pub fn new(position: DVec2, angle: f64, params: &SimParams) -> Self {
        Self {
            position,
            phase_x: 0.0,
            phase_y: 0.0,
            angle,
            pole_separation: params.pole_separation,
            strength: params.magnet_strength,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            phase_step: params.phase_step,
            angle_step: params.angle_step,
        }
    }

    /// Random position in `bounds`, random phases in `[0, phase_range)`, random
    /// angle in `[0, 2π)`. Draws from `rng` in that order.
    pub fn random(bounds: &Bounds, params: &SimParams, rng: &mut Xorshift64) -> Self {
        let position = bounds.sample(rng);
        let phase_x = rng.next_range(0.0, params.phase_range);
        let phase_y = rng.next_range(0.0, params.phase_range);
        let angle = rng.next_range(0.0, TAU);
        Self::new(position, angle, params).with_phases(phase_x, phase_y)
    }

    pub fn with_phases(mut self, phase_x: f64, phase_y: f64) -> Self {
        self.phase_x = phase_x;
        self.phase_y = phase_y;
        self
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn phases(&self) -> (f64, f64) {
        (self.phase_x, self.phase_y)
    }

    /// Moves to the noise-driven position for the current phases, then
    /// rotates and advances the phases for the next call.
    pub fn walk(&mut self, noise: &dyn CoherentNoise, bounds: &Bounds) {
        self.position = DVec2::new(
            noise.sample(self.phase_x) * bounds.width(),
            noise.sample(self.phase_y) * bounds.height(),
        );
        self.angle += self.angle_step;
        self.phase_x += self.phase_step;
        self.phase_y += self.phase_step;
    }

    pub fn north_pole(&self) -> DVec2 {
        self.position + DVec2::from_angle(self.angle) * (self.pole_separation * 0.5)
    }

    pub fn south_pole(&self) -> DVec2 {
        self.position + DVec2::from_angle(self.angle + PI) * (self.pole_separation * 0.5)
    }
}

impl ForceSource for Magnet {
    fn force_at(&self, point: DVec2) -> DVec2 {
        let (min, max) = (self.min_distance, self.max_distance);
        let repel = inverse_square(point - self.north_pole(), self.strength, min, max);
        let attract = inverse_square(self.south_pole() - point, self.strength, min, max);
        repel + attract
    }
}
