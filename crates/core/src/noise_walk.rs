//! Coherent 1D noise used to steer the wandering magnets.
//!
//! A [`CoherentNoise`] maps a scalar phase to a value in [0, 1]. Magnets feed
//! their monotonically increasing phases through it, so their trajectories
//! stay continuous while still looking random.

use noise::{NoiseFn, Perlin};

/// A continuous, deterministic scalar noise in [0, 1].
///
/// Implementations must be smooth in `t`: nearby phases produce nearby
/// values. Same inputs always produce the same output.
pub trait CoherentNoise: Send + Sync {
    fn sample(&self, t: f64) -> f64;
}

/// Octave count used by [`PerlinWalk::new`].
const DEFAULT_OCTAVES: u32 = 4;
/// Amplitude falloff between octaves.
const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Fixed second coordinate. Perlin is zero on integer lattice lines, so the
/// 1D slice is taken off-lattice.
const LANE: f64 = 0.5;

/// Fractal Perlin noise sampled along a single line and remapped to [0, 1].
pub struct PerlinWalk {
    noise: Perlin,
    octaves: u32,
    persistence: f64,
}

impl PerlinWalk {
    /// Four octaves with persistence 0.5.
    pub fn new(seed: u32) -> Self {
        Self::with_octaves(seed, DEFAULT_OCTAVES, DEFAULT_PERSISTENCE)
    }

    /// `octaves` is raised to at least 1.
    pub fn with_octaves(seed: u32, octaves: u32, persistence: f64) -> Self {
        Self {
            noise: Perlin::new(seed),
            octaves: octaves.max(1),
            persistence,
        }
    }
}

impl CoherentNoise for PerlinWalk {
    fn sample(&self, t: f64) -> f64 {
        let (sum, norm, _, _) = (0..self.octaves).fold(
            (0.0, 0.0, 1.0, 1.0),
            |(sum, norm, amp, freq), _| {
                (
                    sum + self.noise.get([t * freq, LANE]) * amp,
                    norm + amp,
                    amp * self.persistence,
                    freq * 2.0,
                )
            },
        );
        if norm <= 0.0 {
            return 0.5;
        }
        ((sum / norm + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
