//! Geometric primitives for rasterization.
//!
//! Inputs are integer grid coordinates; outputs are [`Pixel`] records. Every
//! algorithm emits the same record shape, solid algorithms simply use full
//! coverage.

use std::fmt;

/// Coverage of a fully opaque pixel.
pub const FULL_COVERAGE: u8 = 255;

/// An integer grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the axes, mirroring the point across the `y = x` diagonal.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A rasterized pixel with its antialiasing coverage.
///
/// Coverage is in `[0, 255]`, 255 being fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Coverage (0 = empty, 255 = opaque).
    pub coverage: u8,
}

impl Pixel {
    /// Create a pixel with explicit coverage.
    #[must_use]
    pub const fn new(x: i32, y: i32, coverage: u8) -> Self {
        Self { x, y, coverage }
    }

    /// Create a fully covered pixel.
    #[must_use]
    pub const fn solid(x: i32, y: i32) -> Self {
        Self::new(x, y, FULL_COVERAGE)
    }

    /// Position of the pixel without its coverage.
    #[must_use]
    pub const fn point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the pixel is fully opaque.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.coverage == FULL_COVERAGE
    }
}

impl From<Point> for Pixel {
    fn from(p: Point) -> Self {
        Self::solid(p.x, p.y)
    }
}

/// A line segment between two integer endpoints.
///
/// The endpoints may coincide; every line algorithm handles that case by
/// emitting a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle with integer center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: u32,
}

impl Circle {
    /// Create a circle. A negative radius is coerced to its absolute value.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius: radius.unsigned_abs() }
    }
}

/// A primitive that one of the rasterizers can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A line segment.
    Line(Segment),
    /// A circle outline.
    Circle(Circle),
}

impl Shape {
    /// Short name of the shape kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
        }
    }

    /// Points a display should highlight: both endpoints, or the circle center.
    #[must_use]
    pub fn anchors(&self) -> Vec<Point> {
        match self {
            Self::Line(seg) if seg.is_degenerate() => vec![seg.start],
            Self::Line(seg) => vec![seg.start, seg.end],
            Self::Circle(c) => vec![c.center],
        }
    }
}
