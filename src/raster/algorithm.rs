//! Closed catalogue of the available rasterizers.

use super::{
    rasterize_circle_bresenham, rasterize_line_bresenham, rasterize_line_dda,
    rasterize_line_naive, rasterize_line_wu, Raster,
};
use crate::error::{Error, Result};
use crate::geometry::{Circle, Point, Segment, Shape};
use std::fmt;
use std::str::FromStr;

/// A rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Slope-equation sampling.
    #[default]
    Naive,
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's integer line algorithm.
    BresenhamLine,
    /// Bresenham's midpoint circle algorithm.
    BresenhamCircle,
    /// Wu's anti-aliased line algorithm.
    Wu,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 5] =
        [Self::Naive, Self::Dda, Self::BresenhamLine, Self::BresenhamCircle, Self::Wu];

    /// Short tag used on the command line and in configuration.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Dda => "dda",
            Self::BresenhamLine => "bres_line",
            Self::BresenhamCircle => "bres_circle",
            Self::Wu => "wu",
        }
    }

    /// Whether the algorithm rasterizes circles rather than segments.
    #[must_use]
    pub const fn is_circle(self) -> bool {
        matches!(self, Self::BresenhamCircle)
    }

    /// Build the shape this algorithm expects from four input fields.
    ///
    /// Line algorithms read `(a, b)` and `(c, d)` as endpoints. The circle
    /// algorithm reads `(a, b)` as the center and `c` as the radius; `d` is
    /// ignored.
    #[must_use]
    pub fn shape_from_coords(self, a: i32, b: i32, c: i32, d: i32) -> Shape {
        if self.is_circle() {
            Shape::Circle(Circle::new(Point::new(a, b), c))
        } else {
            Shape::Line(Segment::from_coords(a, b, c, d))
        }
    }

    /// Rasterize a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when a line algorithm receives a
    /// circle or the circle algorithm receives a segment.
    pub fn rasterize(self, shape: &Shape) -> Result<Raster> {
        let raster = match (self, shape) {
            (Self::Naive, Shape::Line(s)) => {
                rasterize_line_naive(s.start.x, s.start.y, s.end.x, s.end.y)
            }
            (Self::Dda, Shape::Line(s)) => {
                rasterize_line_dda(s.start.x, s.start.y, s.end.x, s.end.y)
            }
            (Self::BresenhamLine, Shape::Line(s)) => {
                rasterize_line_bresenham(s.start.x, s.start.y, s.end.x, s.end.y)
            }
            (Self::Wu, Shape::Line(s)) => rasterize_line_wu(s.start.x, s.start.y, s.end.x, s.end.y),
            (Self::BresenhamCircle, Shape::Circle(c)) => {
                // Radii beyond i32::MAX cannot come from `Circle::new`.
                let r = i32::try_from(c.radius).unwrap_or(i32::MAX);
                rasterize_circle_bresenham(c.center.x, c.center.y, r)
            }
            (algorithm, shape) => {
                return Err(Error::ShapeMismatch { algorithm: algorithm.tag(), shape: shape.kind() })
            }
        };

        log::debug!(
            "{} rasterized {} into {} pixels ({} trace entries)",
            self.tag(),
            shape.kind(),
            raster.len(),
            raster.trace.len()
        );

        Ok(raster)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "step" => Ok(Self::Naive),
            "dda" => Ok(Self::Dda),
            "bres_line" | "bresenham" | "bresenham_line" => Ok(Self::BresenhamLine),
            "bres_circle" | "circle" | "bresenham_circle" => Ok(Self::BresenhamCircle),
            "wu" | "xiaolin_wu" => Ok(Self::Wu),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
