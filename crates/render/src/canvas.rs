//! Trail canvas: an RGB float buffer that mimics drawing onto a
//! semi-transparent background every frame.
//!
//! Each frame fades the previous image toward the background and then stamps
//! every particle as a short stroke aligned with its heading, so moving
//! particles leave streaks that look like iron filings.

use glam::DVec2;
use iron_filings_core::{ParticleView, SimError, Simulation, Tint};

/// Opacity of the per-frame background wash, out of 255.
pub const TRAIL_FADE: u8 = 50;
/// Length of a particle stroke in canvas units.
pub const STROKE_LENGTH: f64 = 4.0;
/// Near-black backdrop.
pub const BACKGROUND: Tint = Tint::rgba(10, 10, 10, 255);
/// Largest canvas accepted, in pixels (8192 x 8192).
pub const MAX_PIXELS: usize = 1 << 26;

#[derive(Debug, Clone)]
pub struct TrailCanvas {
    width: usize,
    height: usize,
    background: [f64; 3],
    data: Vec<f64>,
}

impl TrailCanvas {
    /// Creates a canvas filled with `background` (its alpha is ignored).
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero,
    /// the pixel count exceeds [`MAX_PIXELS`], or the buffer cannot be
    /// allocated.
    pub fn new(width: usize, height: usize, background: Tint) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let pixels = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or(SimError::InvalidDimensions)?;
        let len = pixels * 3;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| SimError::InvalidDimensions)?;
        let [r, g, b, _] = background.to_unit();
        let background = [r, g, b];
        data.extend(background.iter().copied().cycle().take(len));
        Ok(Self {
            width,
            height,
            background,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major RGB triples in [0, 1].
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// RGB of the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f64; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Moves every pixel `alpha / 255` of the way back to the background.
    pub fn fade(&mut self, alpha: u8) {
        let t = alpha as f64 / 255.0;
        for px in self.data.chunks_exact_mut(3) {
            for (c, bg) in px.iter_mut().zip(self.background) {
                *c += (bg - *c) * t;
            }
        }
    }

    /// Alpha-blends `tint` into one pixel. Coordinates off the canvas are
    /// ignored.
    pub fn blend(&mut self, x: isize, y: isize, tint: Tint) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let [r, g, b, a] = tint.to_unit();
        let i = (y as usize * self.width + x as usize) * 3;
        for (c, src) in self.data[i..i + 3].iter_mut().zip([r, g, b]) {
            *c += (src - *c) * a;
        }
    }

    /// Stamps a [`STROKE_LENGTH`] stroke centered on the particle and
    /// rotated to its heading. Each covered pixel is blended once.
    pub fn draw_particle(&mut self, view: &ParticleView) {
        let half = DVec2::from_angle(view.heading) * (STROKE_LENGTH * 0.5);
        let start = view.position - half;
        let samples = (STROKE_LENGTH * 2.0).ceil() as usize;
        let mut last = None;
        for i in 0..=samples {
            let p = start + half * (2.0 * i as f64 / samples as f64);
            let cell = (p.x.floor() as isize, p.y.floor() as isize);
            if last != Some(cell) {
                self.blend(cell.0, cell.1, view.tint);
                last = Some(cell);
            }
        }
    }

    /// One animation frame: fade the trails, then draw every particle.
    pub fn draw_frame(&mut self, sim: &Simulation) {
        self.fade(TRAIL_FADE);
        for view in sim.particles() {
            self.draw_particle(&view);
        }
    }
}
