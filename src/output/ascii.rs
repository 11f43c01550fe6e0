//! Plain-text rendering of a raster, one character per grid cell.
//!
//! The top line is the highest `y`. Empty cells print as `.`, covered cells
//! use a density ramp from `:` (faint) to `@` (fully opaque).

use crate::geometry::Point;
use crate::raster::Raster;
use crate::render::strongest_per_cell;
use std::collections::HashMap;

/// Text renderer for rasters.
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    margin: i32,
    extent: Option<i32>,
    axes: bool,
}

impl Default for AsciiGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiGrid {
    /// Density ramp from faint to opaque.
    const RAMP: &'static [char] = &[':', '-', '=', '+', '*', '#', '%', '@'];
    const EMPTY: char = '.';

    /// Renderer framing the raster's bounding box with a one-cell margin.
    #[must_use]
    pub fn new() -> Self {
        Self { margin: 1, extent: None, axes: false }
    }

    /// Cells of padding around the bounding box.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = i32::try_from(margin).unwrap_or(i32::MAX);
        self
    }

    /// Always show `[-extent, extent]` on both axes instead of the bounding box.
    #[must_use]
    pub fn extent(mut self, extent: u32) -> Self {
        self.extent = Some(i32::try_from(extent).unwrap_or(i32::MAX));
        self
    }

    /// Draw the coordinate axes through empty cells.
    #[must_use]
    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Render the raster to a string, one line per row.
    #[must_use]
    pub fn render(&self, raster: &Raster) -> String {
        let Some((lo, hi)) = self.window(raster) else {
            return String::new();
        };

        let cells: HashMap<Point, u8> =
            strongest_per_cell(&raster.pixels).into_iter().map(|p| (p.point(), p.coverage)).collect();

        let width = (hi.x - lo.x + 2) as usize;
        let mut output = String::with_capacity(width * (hi.y - lo.y + 1) as usize);

        for y in (lo.y..=hi.y).rev() {
            for x in lo.x..=hi.x {
                let ch = match cells.get(&Point::new(x, y)) {
                    Some(&c) if c > 0 => Self::coverage_char(c),
                    _ => self.background(x, y),
                };
                output.push(ch);
            }
            output.push('\n');
        }

        output
    }

    fn window(&self, raster: &Raster) -> Option<(Point, Point)> {
        if let Some(e) = self.extent {
            return Some((Point::new(-e, -e), Point::new(e, e)));
        }
        let (lo, hi) = raster.bounds()?;
        let m = self.margin;
        Some((Point::new(lo.x - m, lo.y - m), Point::new(hi.x + m, hi.y + m)))
    }

    fn background(&self, x: i32, y: i32) -> char {
        if !self.axes {
            return Self::EMPTY;
        }
        match (x == 0, y == 0) {
            (true, true) => '+',
            (true, false) => '|',
            (false, true) => '-',
            (false, false) => Self::EMPTY,
        }
    }

    fn coverage_char(coverage: u8) -> char {
        let last = Self::RAMP.len() - 1;
        let idx = (f32::from(coverage) / 255.0 * last as f32).round_ties_even() as usize;
        Self::RAMP[idx.min(last)]
    }
}
