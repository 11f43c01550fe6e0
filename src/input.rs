//! Parsing and range-checking of user-supplied coordinates.
//!
//! The rasterizers trust their input. Anything typed by a person passes
//! through [`GridBounds`] first, which turns text into a grid coordinate or an
//! [`Error::InvalidInput`].

use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::raster::round_half_even;

/// Inclusive coordinate range `[-half_extent, half_extent]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    half_extent: i32,
    clamp: bool,
}

impl GridBounds {
    /// Bounds that clamp out-of-range values onto the grid edge.
    #[must_use]
    pub const fn clamping(half_extent: i32) -> Self {
        Self { half_extent: half_extent.abs(), clamp: true }
    }

    /// Bounds that reject out-of-range values.
    #[must_use]
    pub const fn strict(half_extent: i32) -> Self {
        Self { half_extent: half_extent.abs(), clamp: false }
    }

    /// Bounds described by a configuration.
    #[must_use]
    pub fn from_config(config: &RasterConfig) -> Self {
        let half_extent = i32::try_from(config.grid.half_extent).unwrap_or(i32::MAX);
        Self { half_extent, clamp: config.input.clamp }
    }

    /// Largest absolute coordinate.
    #[must_use]
    pub const fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Whether `value` lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= -self.half_extent && value <= self.half_extent
    }

    /// Parse one coordinate field.
    ///
    /// Integer and real text are accepted; reals are rounded to the nearest
    /// integer, ties to even. Values outside the bounds are clamped or
    /// rejected depending on how the bounds were built.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for empty, non-numeric, or non-finite
    /// text, and for out-of-range values when clamping is off.
    pub fn parse_coordinate(&self, field: &str, text: &str) -> Result<i32> {
        let invalid = |reason: String| Error::InvalidInput {
            field: field.to_string(),
            value: text.to_string(),
            reason,
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty".to_string()));
        }

        let real: f64 = trimmed.parse().map_err(|_| invalid("not a number".to_string()))?;
        if !real.is_finite() {
            return Err(invalid("not a finite number".to_string()));
        }

        let limit = f64::from(self.half_extent);
        if real.abs() > limit + 0.5 || !self.contains(round_half_even(real)) {
            if !self.clamp {
                return Err(invalid(format!(
                    "outside [-{0}, {0}]",
                    self.half_extent
                )));
            }
            let clamped = if real < 0.0 { -self.half_extent } else { self.half_extent };
            log::warn!("{field}={trimmed} is outside the grid, clamped to {clamped}");
            return Ok(clamped);
        }

        Ok(round_half_even(real))
    }

    /// Parse several named fields in order.
    ///
    /// # Errors
    ///
    /// Returns the first field's [`Error::InvalidInput`].
    pub fn parse_all<const N: usize>(&self, fields: [(&str, &str); N]) -> Result<[i32; N]> {
        let mut out = [0; N];
        for (slot, (field, text)) in out.iter_mut().zip(fields) {
            *slot = self.parse_coordinate(field, text)?;
        }
        Ok(out)
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::from_config(&RasterConfig::default())
    }
}
