//! Iron particles: point masses pushed around by the magnets.

use crate::bounds::Bounds;
use crate::params::SimParams;
use crate::prng::Xorshift64;
use crate::tint::Tint;
use glam::DVec2;

/// Periodic random respawn that keeps particles from piling up on the south
/// poles forever.
///
/// On every frame that is a multiple of `interval`, each particle is
/// respawned with probability `probability`, whatever its state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StirPolicy {
    pub interval: u64,
    pub probability: f64,
}

impl StirPolicy {
    pub const DISABLED: StirPolicy = StirPolicy {
        interval: 0,
        probability: 0.0,
    };

    pub fn fires_on(&self, frame: u64) -> bool {
        self.interval != 0 && frame % self.interval == 0
    }
}

/// Why a particle was respawned during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// It left the bounds.
    Boundary,
    /// The stir roll hit.
    Stirred,
}

#[derive(Debug, Clone)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    acceleration: DVec2,
    max_speed: f64,
    damping: f64,
    tint: Tint,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, params: &SimParams) -> Self {
        Self {
            position,
            velocity,
            acceleration: DVec2::ZERO,
            max_speed: params.max_speed,
            damping: params.damping,
            tint: params.tint,
        }
    }

    /// Uniform position in `bounds`, each velocity component uniform in
    /// `[-initial_speed, initial_speed)`.
    pub fn random(bounds: &Bounds, params: &SimParams, rng: &mut Xorshift64) -> Self {
        let position = bounds.sample(rng);
        let velocity = DVec2::new(
            rng.next_signed(params.initial_speed),
            rng.next_signed(params.initial_speed),
        );
        Self::new(position, velocity, params)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Direction of travel in radians, `atan2(vy, vx)`. Zero when at rest.
    pub fn heading(&self) -> f64 {
        self.velocity.y.atan2(self.velocity.x)
    }

    pub fn accumulate_force(&mut self, force: DVec2) {
        self.acceleration += force;
    }

    /// Integrates one frame and applies the boundary and stir resets.
    ///
    /// Returns the cause of the last reset applied this frame, if any. On
    /// stir frames the roll is drawn even for a particle that was just
    /// respawned at the boundary, so the random stream does not depend on
    /// particle positions.
    pub fn step(
        &mut self,
        bounds: &Bounds,
        frame: u64,
        stir: &StirPolicy,
        rng: &mut Xorshift64,
    ) -> Option<ResetCause> {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.clamp_length_max(self.max_speed);
        self.position += self.velocity;
        self.velocity *= self.damping;
        self.acceleration = DVec2::ZERO;

        let mut cause = None;
        if !bounds.contains(self.position) {
            self.reset(bounds, rng);
            cause = Some(ResetCause::Boundary);
        }
        if stir.fires_on(frame) && rng.chance(stir.probability) {
            self.reset(bounds, rng);
            cause = Some(ResetCause::Stirred);
        }
        cause
    }

    /// Respawns at a uniform random position with zero velocity. Acceleration
    /// is left as is.
    pub fn reset(&mut self, bounds: &Bounds, rng: &mut Xorshift64) {
        self.position = bounds.sample(rng);
        self.velocity = DVec2::ZERO;
    }
}
