//! Naive incremental line sampling from the slope equation `y = kx + b`.

use super::{round_half_even, step_toward, Raster};
use crate::geometry::Pixel;

/// Rasterize a segment by evaluating the slope equation at every integer
/// position of the dominant axis.
///
/// Vertical segments take their own branch, so the slope is never computed
/// with a zero denominator. For `|k| <= 1` one pixel is emitted per column,
/// otherwise one per row (solving `x = (y - b) / k`), which keeps steep lines
/// free of gaps.
#[must_use]
pub fn rasterize_line_naive(x0: i32, y0: i32, x1: i32, y1: i32) -> Raster {
    let mut raster = Raster::new();

    if x0 == x1 {
        let step = step_toward(y0, y1);
        let mut y = y0;
        loop {
            raster.push(Pixel::solid(x0, y));
            raster.trace.record(format!("x={x0}, y={y} (vertical)"));
            if y == y1 {
                break;
            }
            y += step;
        }
        return raster;
    }

    let k = f64::from(y1 - y0) / f64::from(x1 - x0);
    let b = f64::from(y0) - k * f64::from(x0);
    raster.trace.record(format!("Equation: y = {k:.3}x + {b:.3}"));

    if k.abs() <= 1.0 {
        let step = step_toward(x0, x1);
        let mut x = x0;
        loop {
            let y = k * f64::from(x) + b;
            let y_round = round_half_even(y);
            raster.push(Pixel::solid(x, y_round));
            raster.trace.record(format!("x={x}, y={y:.3} -> {y_round}"));
            if x == x1 {
                break;
            }
            x += step;
        }
    } else {
        let step = step_toward(y0, y1);
        let mut y = y0;
        loop {
            let x = (f64::from(y) - b) / k;
            let x_round = round_half_even(x);
            raster.push(Pixel::solid(x_round, y));
            raster.trace.record(format!("y={y}, x={x:.3} -> {x_round}"));
            if y == y1 {
                break;
            }
            y += step;
        }
    }

    raster
}
