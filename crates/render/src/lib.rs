#![deny(unsafe_code)]
//! Headless rendering for the iron-filings simulation.
//!
//! Sits outside the physics core: it only reads
//! [`ParticleView`](iron_filings_core::ParticleView)s. The CLI uses it to
//! turn a run into a PNG, and other hosts can use [`pixel::to_rgba8`] to
//! blit frames themselves.

pub mod canvas;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::TrailCanvas;

use iron_filings_core::Simulation;

/// Runs `steps` frames, drawing each into `canvas` as it goes.
pub fn render_run(sim: &mut Simulation, canvas: &mut TrailCanvas, steps: usize) {
    for _ in 0..steps {
        sim.step();
        canvas.draw_frame(sim);
    }
}
