#![deny(unsafe_code)]
//! Physics core of the iron-filings simulation.
//!
//! A handful of invisible dipole magnets wander across a rectangle following
//! coherent noise, and thousands of iron particles are pushed and pulled by
//! their poles, producing flowing field-line patterns. This crate owns the
//! model only; drawing lives in `iron-filings-render` and the batch driver in
//! `iron-filings-cli`.
//!
//! ```
//! use iron_filings_core::{Bounds, SimParams, Simulation};
//!
//! let bounds = Bounds::new(800.0, 600.0).unwrap();
//! let mut sim = Simulation::new(bounds, SimParams::default(), 42).unwrap();
//! sim.step();
//! assert!(sim.particles().all(|p| bounds.contains(p.position)));
//! ```

pub mod bounds;
pub mod error;
pub mod force;
pub mod magnet;
pub mod noise_walk;
pub mod params;
pub mod particle;
pub mod prng;
pub mod seed;
pub mod simulation;
pub mod tint;

pub use bounds::Bounds;
pub use error::SimError;
pub use force::ForceSource;
pub use magnet::Magnet;
pub use noise_walk::{CoherentNoise, PerlinWalk};
pub use params::SimParams;
pub use particle::{Particle, ResetCause, StirPolicy};
pub use prng::Xorshift64;
pub use seed::Seed;
pub use simulation::{ParticleView, Simulation, StepStats};
pub use tint::Tint;
