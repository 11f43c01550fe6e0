//! Digital Differential Analyzer line rasterization.

use super::{round_half_even, Raster};
use crate::geometry::Pixel;

/// Rasterize a segment with fixed-size floating increments.
///
/// The running position is accumulated by repeated addition of the per-step
/// increments, never re-evaluated in closed form, so rounding error builds up
/// across steps exactly as in the classic formulation. A zero-length segment
/// yields its single point without computing any increment.
#[must_use]
pub fn rasterize_line_dda(x0: i32, y0: i32, x1: i32, y1: i32) -> Raster {
    let mut raster = Raster::new();

    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        raster.push(Pixel::solid(x0, y0));
        raster.trace.record("Single point (zero length)");
        return raster;
    }

    let x_inc = f64::from(dx) / f64::from(steps);
    let y_inc = f64::from(dy) / f64::from(steps);

    raster.trace.record(format!("dx={dx}, dy={dy}, steps={steps}"));
    raster.trace.record(format!("x_inc={x_inc:.3}, y_inc={y_inc:.3}"));

    let mut x = f64::from(x0);
    let mut y = f64::from(y0);

    for i in 0..=steps {
        let x_round = round_half_even(x);
        let y_round = round_half_even(y);
        raster.push(Pixel::solid(x_round, y_round));
        raster.trace.record(format!("step {i}: x={x:.3}, y={y:.3} -> ({x_round},{y_round})"));
        x += x_inc;
        y += y_inc;
    }

    raster
}
