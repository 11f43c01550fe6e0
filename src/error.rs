//! Error types for trueno-raster operations.
//!
//! The rasterization engine itself never fails for well-formed integer input.
//! These errors come from the layers around it: input parsing, algorithm
//! dispatch, configuration, and output encoding.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Non-numeric or out-of-range coordinate.
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        /// Name of the offending field (`x0`, `r`, ...).
        field: String,
        /// Raw text as supplied by the caller.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Algorithm tag that does not name a known rasterizer.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A line algorithm was asked to rasterize a circle, or vice versa.
    #[error("Algorithm '{algorithm}' cannot rasterize a {shape}")]
    ShapeMismatch {
        /// Tag of the algorithm.
        algorithm: &'static str,
        /// Kind of shape supplied.
        shape: &'static str,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration value outside its allowed range.
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with the invalid value.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}
