//! RGBA pixel buffer that rasters are drawn onto.
//!
//! Rows are tightly packed (4 bytes per pixel, no padding), which is what the
//! PNG encoder expects.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 16_384;

/// Row-major RGBA8 framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// `[R, G, B, A]` per pixel, row-major.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds [`MAX_DIMENSION`].
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Fill the inclusive rectangle `[x0, x1] x [y0, y1]`, clipped to the buffer.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let max_x = self.width as i32 - 1;
        let max_y = self.height as i32 - 1;
        let (x0, x1) = (x0.min(x1).max(0), x0.max(x1).min(max_x));
        let (y0, y1) = (y0.min(y1).max(0), y0.max(y1).min(max_y));

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Fill a square of side `2 * half + 1` centered on `(cx, cy)`.
    pub fn fill_square(&mut self, cx: i32, cy: i32, half: i32, color: Rgba) {
        self.fill_rect(cx - half, cy - half, cx + half, cy + half, color);
    }

    /// Horizontal span `[x0, x1]` on row `y`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        self.fill_rect(x0, y, x1, y, color);
    }

    /// Vertical span `[y0, y1]` on column `x`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba) {
        self.fill_rect(x, y0, x, y1, color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(((y as usize) * (self.width as usize) + x as usize) * 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixels().len(), 100 * 50 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(MAX_DIMENSION + 1, 10).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::WHITE));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(3, 4, Rgba::ANCHOR);
        assert_eq!(fb.get_pixel(3, 4), Some(Rgba::ANCHOR));
        assert_eq!(fb.get_pixel(10, 0), None);
        assert_eq!(fb.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(-1, 2, Rgba::BLACK);
        fb.set_pixel(4, 2, Rgba::BLACK);
        assert!(fb.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(-5, -5, 2, 2, Rgba::BLACK);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_square() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_square(5, 5, 1, Rgba::BLACK);
        assert_eq!(fb.get_pixel(4, 4), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(6, 6), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(7, 7), Some(Rgba::WHITE));
    }

    #[test]
    fn test_lines() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.hline(0, 9, 3, Rgba::AXIS);
        fb.vline(7, 0, 9, Rgba::AXIS);
        assert_eq!(fb.get_pixel(5, 3), Some(Rgba::AXIS));
        assert_eq!(fb.get_pixel(7, 8), Some(Rgba::AXIS));
        assert_eq!(fb.get_pixel(5, 4), Some(Rgba::TRANSPARENT));
    }
}
