//! The simulation: a fixed set of magnets and particles advanced frame by
//! frame.
//!
//! Each [`Simulation::step`] first walks every magnet, then updates every
//! particle against the full (now read-only) magnet set. Rendering
//! collaborators read particles through [`Simulation::particles`]; the
//! magnets themselves stay private.

use crate::bounds::Bounds;
use crate::error::SimError;
use crate::force::net_force;
use crate::magnet::Magnet;
use crate::noise_walk::{CoherentNoise, PerlinWalk};
use crate::params::SimParams;
use crate::particle::{Particle, ResetCause, StirPolicy};
use crate::prng::Xorshift64;
use crate::tint::Tint;
use glam::DVec2;

/// What a renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: DVec2,
    /// Direction of travel in radians.
    pub heading: f64,
    pub tint: Tint,
}

/// Reset counts for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub frame: u64,
    pub boundary_resets: usize,
    pub stirred_resets: usize,
}

pub struct Simulation {
    bounds: Bounds,
    params: SimParams,
    stir: StirPolicy,
    noise: Box<dyn CoherentNoise>,
    rng: Xorshift64,
    magnets: Vec<Magnet>,
    particles: Vec<Particle>,
    frame: u64,
    last_step: StepStats,
}

impl Simulation {
    /// Builds a simulation whose magnets follow fractal Perlin noise seeded
    /// from `seed`.
    ///
    /// Returns an error if `params` fail validation.
    pub fn new(bounds: Bounds, params: SimParams, seed: u64) -> Result<Self, SimError> {
        let noise = PerlinWalk::new(Xorshift64::derive_u32(seed));
        Self::with_noise(bounds, params, seed, Box::new(noise))
    }

    /// Like [`Simulation::new`] with a caller-supplied noise source.
    ///
    /// Magnets are created first, then particles, all from one PRNG seeded
    /// with `seed`.
    pub fn with_noise(
        bounds: Bounds,
        params: SimParams,
        seed: u64,
        noise: Box<dyn CoherentNoise>,
    ) -> Result<Self, SimError> {
        params.validate()?;
        let mut rng = Xorshift64::new(seed);
        let magnets: Vec<Magnet> = (0..params.magnet_count)
            .map(|_| Magnet::random(&bounds, &params, &mut rng))
            .collect();
        let particles: Vec<Particle> = (0..params.particle_count)
            .map(|_| Particle::random(&bounds, &params, &mut rng))
            .collect();
        log::debug!(
            "simulation {}x{}: {} magnets, {} particles, seed {seed}",
            bounds.width(),
            bounds.height(),
            magnets.len(),
            particles.len(),
        );
        Ok(Self {
            bounds,
            params,
            stir: params.stir_policy(),
            noise,
            rng,
            magnets,
            particles,
            frame: 1,
            last_step: StepStats::default(),
        })
    }

    /// Advances one frame.
    pub fn step(&mut self) {
        for magnet in &mut self.magnets {
            magnet.walk(self.noise.as_ref(), &self.bounds);
        }

        let mut stats = StepStats {
            frame: self.frame,
            ..StepStats::default()
        };
        for particle in &mut self.particles {
            particle.accumulate_force(net_force(&self.magnets, particle.position()));
            match particle.step(&self.bounds, self.frame, &self.stir, &mut self.rng) {
                Some(ResetCause::Boundary) => stats.boundary_resets += 1,
                Some(ResetCause::Stirred) => stats.stirred_resets += 1,
                None => {}
            }
        }

        if self.stir.fires_on(self.frame) {
            log::debug!(
                "frame {}: stirred {} of {} particles",
                self.frame,
                stats.stirred_resets,
                self.particles.len()
            );
        }
        log::trace!(
            "frame {}: {} boundary resets",
            self.frame,
            stats.boundary_resets
        );

        self.last_step = stats;
        self.frame += 1;
    }

    /// Calls [`Simulation::step`] `frames` times.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Read-only per-particle snapshot, in storage order.
    pub fn particles(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.particles.iter().map(|p| ParticleView {
            position: p.position(),
            heading: p.heading(),
            tint: p.tint(),
        })
    }

    /// Net magnetic force at `point` for the current magnet positions.
    pub fn force_at(&self, point: DVec2) -> DVec2 {
        net_force(&self.magnets, point)
    }

    /// Number of the frame the next `step()` will run. Starts at 1.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_step(&self) -> StepStats {
        self.last_step
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn magnet_count(&self) -> usize {
        self.magnets.len()
    }
}
