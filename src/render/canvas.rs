//! Offline rendering of a raster onto a grid canvas.

use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Pixel, Point, Segment, Shape};
use crate::raster::{rasterize_line_bresenham, Raster};
use crate::scale::CoordinateMapper;
use std::collections::HashMap;

/// Dash pattern of the ideal segment, in canvas pixels.
const DASH_ON: usize = 2;
const DASH_OFF: usize = 2;

/// A square canvas showing the model grid, with helpers to draw a raster,
/// the ideal primitive, and its anchor points.
#[derive(Debug, Clone)]
pub struct GridCanvas {
    fb: Framebuffer,
    mapper: CoordinateMapper,
    half_extent: i32,
    major_every: i32,
}

impl GridCanvas {
    /// Create a white canvas sized for the configured grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would be empty or too large.
    pub fn new(config: &RasterConfig) -> Result<Self> {
        let side = CoordinateMapper::canvas_side(config);
        let side = u32::try_from(side).unwrap_or(0);
        let mut fb = Framebuffer::new(side, side)?;
        fb.clear(Rgba::WHITE);

        Ok(Self {
            fb,
            mapper: CoordinateMapper::for_config(config),
            half_extent: config.grid.half_extent as i32,
            major_every: config.grid.major_every.max(1) as i32,
        })
    }

    /// The coordinate mapping in use.
    #[must_use]
    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Borrow the pixels drawn so far.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Finish drawing and take the pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Draw grid lines, major lines, and the two axes.
    pub fn draw_grid(&mut self) {
        let side = self.fb.width() as i32 - 1;
        let gs = self.half_extent;

        for i in -gs..=gs {
            let color = if i % self.major_every == 0 { Rgba::GRID_MAJOR } else { Rgba::GRID };
            let (x, y) = self.mapper.to_canvas(Point::new(i, i));
            self.fb.vline(x, 0, side, color);
            self.fb.hline(0, side, y, color);
        }

        let (ox, oy) = self.mapper.origin();
        self.fb.fill_rect(ox, 0, ox + 1, side, Rgba::AXIS);
        self.fb.fill_rect(0, oy, side, oy + 1, Rgba::AXIS);
    }

    /// Draw every raster pixel as a filled cell, darker for higher coverage.
    ///
    /// A cell reported more than once is drawn with its strongest coverage.
    /// Zero-coverage cells are left untouched.
    pub fn draw_raster(&mut self, raster: &Raster) {
        let half = (self.mapper.scale() - 1) / 2;
        for pixel in strongest_per_cell(&raster.pixels) {
            if pixel.coverage == 0 {
                continue;
            }
            let (cx, cy) = self.mapper.to_canvas(pixel.point());
            self.fb.fill_square(cx, cy, half, Rgba::for_coverage(pixel.coverage));
        }
    }

    /// Draw the exact segment as a thin dashed line.
    pub fn draw_ideal_segment(&mut self, segment: Segment) {
        let (x0, y0) = self.mapper.to_canvas(segment.start);
        let (x1, y1) = self.mapper.to_canvas(segment.end);
        let path = rasterize_line_bresenham(x0, y0, x1, y1);
        for (i, p) in path.pixels.iter().enumerate() {
            if i % (DASH_ON + DASH_OFF) < DASH_ON {
                self.fb.set_pixel(p.x, p.y, Rgba::IDEAL_LINE);
            }
        }
    }

    /// Highlight the endpoints of a segment or the center of a circle.
    pub fn draw_anchors(&mut self, shape: &Shape) {
        let half = (self.mapper.scale() / 3).max(3);
        for anchor in shape.anchors() {
            let (cx, cy) = self.mapper.to_canvas(anchor);
            self.fb.fill_square(cx, cy, half, Rgba::ANCHOR);
        }
    }

    /// Draw a complete scene: grid, raster, ideal segment (lines only), anchors.
    pub fn draw_scene(&mut self, shape: &Shape, raster: &Raster) {
        self.draw_grid();
        self.draw_raster(raster);
        if let Shape::Line(segment) = shape {
            self.draw_ideal_segment(*segment);
        }
        self.draw_anchors(shape);
    }
}

/// Collapse repeated cells to their strongest coverage, keeping first-seen order.
pub(crate) fn strongest_per_cell(pixels: &[Pixel]) -> Vec<Pixel> {
    let mut index: HashMap<Point, usize> = HashMap::with_capacity(pixels.len());
    let mut cells: Vec<Pixel> = Vec::with_capacity(pixels.len());

    for &pixel in pixels {
        match index.get(&pixel.point()) {
            Some(&i) => cells[i].coverage = cells[i].coverage.max(pixel.coverage),
            None => {
                index.insert(pixel.point(), cells.len());
                cells.push(pixel);
            }
        }
    }

    cells
}
