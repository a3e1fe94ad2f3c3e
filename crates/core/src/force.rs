//! Force sources: anything that pushes a particle at a given point.
//!
//! The simulation sums every [`ForceSource`] at each particle's position.
//! Magnets are the only sources it builds, but tests and embedders can
//! supply their own.

use glam::DVec2;

/// A pure, deterministic 2D force field.
pub trait ForceSource: Send + Sync {
    /// Force felt by a particle at `point`. Must be finite for finite input.
    fn force_at(&self, point: DVec2) -> DVec2;
}

/// Sum of the forces from every source at `point`.
pub fn net_force<S: ForceSource>(sources: &[S], point: DVec2) -> DVec2 {
    sources
        .iter()
        .fold(DVec2::ZERO, |acc, source| acc + source.force_at(point))
}

/// Inverse-square push along `direction`.
///
/// The length of `direction` is clamped to `[min_distance, max_distance]`
/// before squaring, so the magnitude lies in
/// `[strength / max², strength / min²]`. A zero `direction` yields zero.
pub fn inverse_square(
    direction: DVec2,
    strength: f64,
    min_distance: f64,
    max_distance: f64,
) -> DVec2 {
    let distance = direction.length().clamp(min_distance, max_distance);
    direction.normalize_or_zero() * (strength / (distance * distance))
}
