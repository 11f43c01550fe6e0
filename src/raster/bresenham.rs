//! Bresenham's integer line algorithm.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use super::Raster;
use crate::geometry::{Pixel, Point};

/// Rasterize a segment using only integer additions and comparisons.
///
/// Both axis updates are tested independently in each iteration, so a single
/// step may move diagonally.
///
/// The decision variable breaks ties differently depending on the walking
/// direction. The walk therefore always starts at the lexicographically
/// greater endpoint; when that is the caller's end point the pixels are
/// reversed afterwards. Output always runs from `(x0, y0)` to `(x1, y1)` and
/// swapping the endpoints produces the same set of pixels. The trace follows
/// the walk as executed.
#[must_use]
pub fn rasterize_line_bresenham(x0: i32, y0: i32, x1: i32, y1: i32) -> Raster {
    let mut raster = Raster::new();

    let reversed = (x0, y0) < (x1, y1);
    let (from, to) = if reversed {
        (Point::new(x1, y1), Point::new(x0, y0))
    } else {
        (Point::new(x0, y0), Point::new(x1, y1))
    };

    walk(&mut raster, from, to);

    if reversed {
        raster.pixels.reverse();
        raster.trace.record(format!("Output reversed to run from ({x0},{y0}) to ({x1},{y1})"));
    }

    raster
}

fn walk(raster: &mut Raster, from: Point, to: Point) {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    raster.trace.record(format!("dx={dx}, dy={dy}, sx={sx}, sy={sy}"));
    raster.trace.record(format!("Initial error: {err}"));

    let Point { mut x, mut y } = from;
    let mut step = 0;

    loop {
        raster.push(Pixel::solid(x, y));
        raster.trace.record(format!("step {step}: ({x},{y}), error={err}"));

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x += sx;
            raster.trace.record(format!("  move X -> x={x}, error={err}"));
        }

        if e2 < dx {
            err += dx;
            y += sy;
            raster.trace.record(format!("  move Y -> y={y}, error={err}"));
        }

        step += 1;
    }
}
