// dejong-compute/src/surface.rs

use crate::PlotTarget;
use dejong_core::{Origin, SketchError};

/// Off-screen RGBA pixel buffer, sized once to the viewport.
pub struct Surface {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    origin: Origin,
}

impl Surface {
    /// Allocate a `width × height` buffer, initially transparent black.
    pub fn new(width: u32, height: u32, origin: Origin) -> Result<Self, SketchError> {
        let failed = SketchError::SurfaceAllocationFailed { width, height };
        if width == 0 || height == 0 {
            return Err(failed);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| failed.clone())?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| failed)?;
        pixels.resize(len, 0);

        Ok(Self {
            pixels,
            width,
            height,
            origin,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Read-only RGBA bytes for compositing onto the visible canvas.
    pub fn expose(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of pixel `(px, py)`, or None outside the buffer.
    pub fn pixel(&self, px: u32, py: u32) -> Option<[u8; 4]> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let idx = self.pixel_index(px, py);
        let mut color = [0u8; 4];
        color.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(color)
    }

    /// Fill the whole buffer with a solid color.
    pub fn clear(&mut self, color: [u8; 4]) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Draw a 1-unit-diameter filled point with no outline at local `(x, y)`.
    ///
    /// At unit diameter the disc reduces to the pixel containing its center.
    /// Points outside the buffer (or at non-finite positions) are clipped.
    pub fn plot(&mut self, x: f64, y: f64, color: [u8; 4]) {
        let Some((px, py)) = self.local_to_pixel(x, y) else {
            return;
        };
        let idx = self.pixel_index(px, py);
        let dest = &mut self.pixels[idx..idx + 4];

        if color[3] == 255 {
            dest.copy_from_slice(&color);
        } else {
            blend_over(dest, color);
        }
    }

    /// Convert local coordinates to a pixel inside the buffer.
    fn local_to_pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (ox, oy) = match self.origin {
            Origin::Center => (self.width as f64 / 2.0, self.height as f64 / 2.0),
            Origin::TopLeft => (0.0, 0.0),
        };
        let px = (x + ox).floor();
        let py = (y + oy).floor();

        if px < 0.0 || py < 0.0 || px >= self.width as f64 || py >= self.height as f64 {
            return None;
        }
        Some((px as u32, py as u32))
    }

    #[inline]
    fn pixel_index(&self, px: u32, py: u32) -> usize {
        (py as usize * self.width as usize + px as usize) * 4
    }
}

impl PlotTarget for Surface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn origin(&self) -> Origin {
        self.origin
    }

    fn clear(&mut self, color: [u8; 4]) {
        Surface::clear(self, color)
    }

    fn plot(&mut self, x: f64, y: f64, color: [u8; 4]) {
        Surface::plot(self, x, y, color)
    }
}

/// Source-over blend of `src` onto `dest` (both straight RGBA).
fn blend_over(dest: &mut [u8], src: [u8; 4]) {
    let sa = src[3] as u32;
    let inv = 255 - sa;
    for c in 0..3 {
        dest[c] = ((src[c] as u32 * sa + dest[c] as u32 * inv + 127) / 255) as u8;
    }
    dest[3] = (sa + (dest[3] as u32 * inv + 127) / 255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dejong_core::BLACK;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn new_rejects_empty_surfaces() {
        assert_eq!(
            Surface::new(0, 10, Origin::Center).err(),
            Some(SketchError::SurfaceAllocationFailed {
                width: 0,
                height: 10
            })
        );
        assert!(Surface::new(10, 0, Origin::TopLeft).is_err());
    }

    #[test]
    fn new_allocates_rgba_buffer() {
        let surface = Surface::new(64, 32, Origin::Center).unwrap();
        assert_eq!(surface.expose().len(), 64 * 32 * 4);
        assert_eq!(surface.width(), 64);
        assert_eq!(surface.height(), 32);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut surface = Surface::new(8, 8, Origin::TopLeft).unwrap();
        surface.clear([10, 20, 30, 255]);
        assert!(surface
            .expose()
            .chunks_exact(4)
            .all(|p| p == [10, 20, 30, 255]));
    }

    #[test]
    fn plot_top_left_hits_pixel_containing_point() {
        let mut surface = Surface::new(8, 8, Origin::TopLeft).unwrap();
        surface.clear(BLACK);
        surface.plot(3.7, 2.2, RED);

        assert_eq!(surface.pixel(3, 2), Some(RED));
        let lit = surface.expose().chunks_exact(4).filter(|p| *p == RED).count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn plot_center_origin_offsets_by_half_size() {
        let mut surface = Surface::new(8, 6, Origin::Center).unwrap();
        surface.clear(BLACK);
        surface.plot(0.0, 0.0, RED);
        assert_eq!(surface.pixel(4, 3), Some(RED));

        surface.plot(-4.0, -3.0, RED);
        assert_eq!(surface.pixel(0, 0), Some(RED));
    }

    #[test]
    fn both_conventions_light_the_same_pixel() {
        let mut centered = Surface::new(10, 10, Origin::Center).unwrap();
        let mut top_left = Surface::new(10, 10, Origin::TopLeft).unwrap();
        centered.plot(1.5, -2.5, RED);
        top_left.plot(6.5, 2.5, RED);
        assert_eq!(centered.expose(), top_left.expose());
    }

    #[test]
    fn plot_clips_out_of_bounds_points() {
        let mut surface = Surface::new(4, 4, Origin::TopLeft).unwrap();
        surface.clear(BLACK);
        let before = surface.expose().to_vec();

        surface.plot(-0.5, 1.0, RED);
        surface.plot(4.0, 1.0, RED);
        surface.plot(1.0, 100.0, RED);
        surface.plot(f64::NAN, 1.0, RED);
        surface.plot(1.0, f64::INFINITY, RED);

        assert_eq!(surface.expose(), before.as_slice());
    }

    #[test]
    fn plot_blends_translucent_colors() {
        let mut surface = Surface::new(2, 2, Origin::TopLeft).unwrap();
        surface.clear(BLACK);
        surface.plot(0.0, 0.0, [255, 0, 0, 128]);

        let p = surface.pixel(0, 0).unwrap();
        assert_eq!(p, [128, 0, 0, 255]);
    }

    #[test]
    fn pixel_outside_returns_none() {
        let surface = Surface::new(2, 2, Origin::TopLeft).unwrap();
        assert_eq!(surface.pixel(2, 0), None);
        assert_eq!(surface.pixel(0, 2), None);
    }
}
