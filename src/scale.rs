//! Mapping between model grid coordinates and canvas pixels.

use crate::config::RasterConfig;
use crate::geometry::Point;

/// Affine model-to-canvas transform with a vertical flip.
///
/// Model `(x, y)` lands at `(cx + x * scale, cy - y * scale)`: one grid unit is
/// `scale` pixels and model `y` grows upward while canvas rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    scale: i32,
    center_x: i32,
    center_y: i32,
}

impl CoordinateMapper {
    /// Create a mapper with the model origin at `(center_x, center_y)`.
    ///
    /// A scale below 1 is raised to 1.
    #[must_use]
    pub const fn new(scale: i32, center_x: i32, center_y: i32) -> Self {
        let scale = if scale < 1 { 1 } else { scale };
        Self { scale, center_x, center_y }
    }

    /// Mapper for a square canvas showing the configured grid, origin centered.
    #[must_use]
    pub fn for_config(config: &RasterConfig) -> Self {
        let side = Self::canvas_side(config);
        Self::new(config.display.scale as i32, side / 2, side / 2)
    }

    /// Side length in pixels of a canvas that shows `[-half_extent, half_extent]`
    /// with one spare cell on each border.
    #[must_use]
    pub fn canvas_side(config: &RasterConfig) -> i32 {
        2 * (config.grid.half_extent as i32 + 1) * config.display.scale as i32
    }

    /// Pixels per grid unit.
    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Canvas position of the model origin.
    #[must_use]
    pub const fn origin(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    /// Model point to canvas pixel.
    #[must_use]
    pub const fn to_canvas(&self, p: Point) -> (i32, i32) {
        (self.center_x + p.x * self.scale, self.center_y - p.y * self.scale)
    }
}
