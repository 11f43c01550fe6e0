//! Bresenham's midpoint circle algorithm with octant mirroring.

use super::Raster;
use crate::geometry::{Pixel, Point};
use std::collections::HashSet;

/// The eight mirror images of octant offset `(x, y)` around `(xc, yc)`.
#[inline]
fn octant_points(xc: i32, yc: i32, x: i32, y: i32) -> [Point; 8] {
    [
        Point::new(xc + x, yc + y),
        Point::new(xc - x, yc + y),
        Point::new(xc + x, yc - y),
        Point::new(xc - x, yc - y),
        Point::new(xc + y, yc + x),
        Point::new(xc - y, yc + x),
        Point::new(xc + y, yc - x),
        Point::new(xc - y, yc - x),
    ]
}

/// Rasterize a circle outline by walking one octant and mirroring each step
/// into the other seven.
///
/// The raw mirrored points repeat where octants meet (`x == y`, `x == 0`);
/// the result keeps only the first occurrence of each point. A negative radius
/// is treated as its absolute value, and a zero radius yields the center once.
#[must_use]
pub fn rasterize_circle_bresenham(xc: i32, yc: i32, r: i32) -> Raster {
    let mut raster = Raster::new();
    let mut raw: Vec<Point> = Vec::new();

    let mut x = 0;
    let mut y = r.abs();
    let mut d = 3 - 2 * y;

    raster.trace.record(format!("Initial: x={x}, y={y}, d={d}"));

    let mut step = 0;

    while x <= y {
        let octants = octant_points(xc, yc, x, y);
        raw.extend_from_slice(&octants);

        let listed = octants.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        raster.trace.record(format!("step {step}: x={x}, y={y}, d={d}"));
        raster.trace.record(format!("  points: [{listed}]"));

        if d < 0 {
            d += 4 * x + 6;
            raster.trace.record(format!("  d < 0: new d = {d}"));
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
            raster.trace.record(format!("  d >= 0: new d = {d}, y decreased to {y}"));
        }

        x += 1;
        step += 1;
    }

    let mut seen = HashSet::with_capacity(raw.len());
    for point in raw {
        if seen.insert(point) {
            raster.push(Pixel::from(point));
        }
    }

    raster
}
