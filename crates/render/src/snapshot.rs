//! PNG export of a [`TrailCanvas`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need raw
//! pixels do not pull in the `image` crate.

use crate::canvas::TrailCanvas;
use crate::pixel::to_rgba8;
use iron_filings_core::SimError;
use std::path::Path;

/// Writes the canvas as a PNG.
///
/// Returns `SimError::InvalidDimensions` if the canvas does not fit `u32`
/// dimensions, or `SimError::Io` on encode or write failure.
pub fn write_png(canvas: &TrailCanvas, path: &Path) -> Result<(), SimError> {
    let w = u32::try_from(canvas.width()).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, to_rgba8(canvas))
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
