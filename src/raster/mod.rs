//! Scan-conversion algorithms.
//!
//! Every rasterizer is a pure function from integer coordinates to a
//! [`Raster`]: the ordered pixels plus a trace of how they were found.
//!
//! # Algorithms
//!
//! - **Naive**: slope-equation sampling along the dominant axis
//! - **DDA**: fixed-step interpolation with accumulated floating increments
//! - **Bresenham's Line**: integer-only decision variable
//! - **Bresenham's Circle**: midpoint circle with 8-way octant mirroring
//! - **Wu's Anti-aliased Line**: coverage-weighted pixel pairs
//!
//! # Rounding
//!
//! Wherever real values become pixel coordinates or coverage they are rounded
//! to the nearest integer with ties going to the even neighbour
//! (`0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`).
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod algorithm;
mod bresenham;
mod circle;
mod dda;
mod naive;
mod trace;
mod wu;

pub use algorithm::Algorithm;
pub use bresenham::rasterize_line_bresenham;
pub use circle::rasterize_circle_bresenham;
pub use dda::rasterize_line_dda;
pub use naive::rasterize_line_naive;
pub use trace::Trace;
pub use wu::rasterize_line_wu;

use crate::geometry::{Pixel, Point};

/// Result of one rasterization: pixels in emission order and the trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Raster {
    /// Pixels in the order the algorithm produced them.
    pub pixels: Vec<Pixel>,
    /// Step-by-step record of the computation.
    pub trace: Trace,
}

impl Raster {
    /// Create an empty raster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, pixel: Pixel) {
        self.pixels.push(pixel);
    }

    /// Pixel positions without coverage.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.pixels.iter().map(|p| p.point()).collect()
    }

    /// Number of emitted pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether no pixel was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Inclusive bounding box `(min, max)` of the pixels, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.pixels.first()?.point();
        Some(self.pixels.iter().fold((first, first), |(lo, hi), p| {
            (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
        }))
    }
}

/// Round to the nearest integer, ties to even.
#[inline]
pub fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Convert a fraction in `[0, 1]` to a 0-255 coverage value.
#[inline]
pub(crate) fn coverage(fraction: f64) -> u8 {
    (fraction * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Unit step from `from` toward `to`; `1` when they are equal.
#[inline]
pub(crate) fn step_toward(from: i32, to: i32) -> i32 {
    if to >= from {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(-0.5), 0);
        assert_eq!(round_half_even(-1.5), -2);
        assert_eq!(round_half_even(2.4999), 2);
        assert_eq!(round_half_even(-2.6), -3);
    }

    #[test]
    fn test_coverage_bounds() {
        assert_eq!(coverage(0.0), 0);
        assert_eq!(coverage(1.0), 255);
        assert_eq!(coverage(0.5), 128);
        assert_eq!(coverage(1.2), 255);
        assert_eq!(coverage(-0.1), 0);
    }

    #[test]
    fn test_step_toward() {
        assert_eq!(step_toward(0, 5), 1);
        assert_eq!(step_toward(5, 0), -1);
        assert_eq!(step_toward(3, 3), 1);
    }

    #[test]
    fn test_bounds() {
        let raster = rasterize_line_bresenham(-2, 5, 3, -1);
        assert_eq!(raster.bounds(), Some((Point::new(-2, -1), Point::new(3, 5))));
        assert_eq!(Raster::new().bounds(), None);
    }
}
