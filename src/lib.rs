//! # Trueno-Raster
//!
//! Deterministic scan-conversion of line segments and circles into grid
//! pixels, with a step-by-step trace of every computation.
//!
//! ## Algorithms
//!
//! - **Naive**: slope-equation sampling along the dominant axis
//! - **DDA**: Digital Differential Analyzer with accumulated increments
//! - **Bresenham line**: integer-only decision variable
//! - **Bresenham circle**: midpoint circle with octant mirroring
//! - **Wu line**: anti-aliased pixel pairs with 0-255 coverage
//!
//! Each rasterizer is a pure function returning a [`Raster`]: the pixels in
//! emission order plus the [`Trace`](raster::Trace) of how they were found.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let raster = rasterize_line_bresenham(2, 3, 8, 6);
//! assert_eq!(raster.points().first(), Some(&Point::new(2, 3)));
//! assert_eq!(raster.points().last(), Some(&Point::new(8, 6)));
//!
//! for step in &raster.trace {
//!     println!("{step}");
//! }
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, pixels, segments, circles).
pub mod geometry;

/// Rasterization algorithms and their traces.
pub mod raster;

// ============================================================================
// Input and Configuration
// ============================================================================

/// YAML configuration.
pub mod config;

/// Parsing and range-checking of typed coordinates.
pub mod input;

// ============================================================================
// Display Modules
// ============================================================================

/// Colors used on the canvas.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Model-to-canvas coordinate mapping.
pub mod scale;

/// Grid canvas rendering.
pub mod render;

/// Output encoders (PNG, SVG, ASCII).
pub mod output;

/// Diagnostic report text.
pub mod report;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};
pub use raster::Raster;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Pixel, Point, Segment, Shape, FULL_COVERAGE};
    pub use crate::input::GridBounds;
    pub use crate::raster::{
        rasterize_circle_bresenham, rasterize_line_bresenham, rasterize_line_dda,
        rasterize_line_naive, rasterize_line_wu, Algorithm, Raster, Trace,
    };
    pub use crate::report::Report;
}
