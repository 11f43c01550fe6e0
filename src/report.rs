//! Diagnostic report: a summary header followed by the verbatim trace.

use crate::geometry::Shape;
use crate::raster::{Algorithm, Raster};
use std::fmt;
use std::time::Duration;

/// Width of the rule separating the header from the trace.
const RULE_WIDTH: usize = 45;

/// Text shown in the diagnostic panel after a rasterization.
///
/// The elapsed time is measured by the caller; rasterizers never read a clock.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    algorithm: Algorithm,
    shape: Shape,
    raster: &'a Raster,
    elapsed: Duration,
}

impl<'a> Report<'a> {
    /// Build a report for one run.
    #[must_use]
    pub fn new(algorithm: Algorithm, shape: Shape, raster: &'a Raster, elapsed: Duration) -> Self {
        Self { algorithm, shape, raster, elapsed }
    }

    /// Header lines, without the rule.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        let count = format!("Point count: {}", self.raster.len());
        let elapsed = format!("Elapsed: {:.3} ms", self.elapsed.as_secs_f64() * 1000.0);

        match self.shape {
            Shape::Line(seg) => vec![
                format!("Start point: {}", seg.start),
                format!("End point: {}", seg.end),
                count,
                elapsed,
            ],
            Shape::Circle(c) => vec![
                format!("Algorithm: {}", self.algorithm.tag()),
                format!("Circle center: {}", c.center),
                format!("Radius: {}", c.radius),
                count,
                elapsed,
            ],
        }
    }

    /// Every line of the report in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header();
        lines.push("-".repeat(RULE_WIDTH));
        lines.extend(self.raster.trace.iter().cloned());
        lines
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
