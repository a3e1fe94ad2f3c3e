//! Conversion of a [`TrailCanvas`] into an RGBA8 pixel buffer.
//!
//! Always available (no feature gate) so embedders that blit raw pixels do
//! not need the `png` feature.

use crate::canvas::TrailCanvas;

/// Quantizes the canvas to `width * height * 4` bytes, alpha always 255.
pub fn to_rgba8(canvas: &TrailCanvas) -> Vec<u8> {
    canvas
        .data()
        .chunks_exact(3)
        .flat_map(|px| {
            let [r, g, b] =
                [px[0], px[1], px[2]].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            [r, g, b, 255u8]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iron_filings_core::Tint;

    #[test]
    fn to_rgba8_correct_length_and_alpha() {
        let canvas = TrailCanvas::new(8, 4, Tint::rgba(0, 0, 0, 255)).unwrap();
        let buf = to_rgba8(&canvas);
        assert_eq!(buf.len(), 8 * 4 * 4);
        assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn to_rgba8_preserves_background_bytes() {
        let canvas = TrailCanvas::new(2, 2, Tint::rgba(10, 20, 30, 255)).unwrap();
        let buf = to_rgba8(&canvas);
        assert_eq!(&buf[0..4], &[10, 20, 30, 255]);
        assert_eq!(&buf[12..16], &[10, 20, 30, 255]);
    }

    #[test]
    fn to_rgba8_reflects_blended_pixel() {
        let mut canvas = TrailCanvas::new(3, 1, Tint::rgba(0, 0, 0, 255)).unwrap();
        canvas.blend(2, 0, Tint::rgba(255, 128, 0, 255));
        let buf = to_rgba8(&canvas);
        assert_eq!(&buf[8..12], &[255, 128, 0, 255]);
    }
}
