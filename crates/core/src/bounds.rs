//! Rectangular simulation area anchored at the origin.

use crate::error::SimError;
use crate::prng::Xorshift64;
use glam::DVec2;

/// The `[0, width] × [0, height]` region particles live in and magnets roam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Creates bounds of the given size.
    ///
    /// Returns `SimError::InvalidDimensions` unless both sides are finite and
    /// strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, SimError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive containment: points on the edges are inside.
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Draws a point uniformly from `[0, width) × [0, height)`.
    pub fn sample(&self, rng: &mut Xorshift64) -> DVec2 {
        let x = rng.next_range(0.0, self.width);
        let y = rng.next_range(0.0, self.height);
        DVec2::new(x, y)
    }
}
