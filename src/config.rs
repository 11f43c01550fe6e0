//! Configuration for the grid, the display scale, and input handling.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{Error, Result};
use crate::framebuffer::MAX_DIMENSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Model grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Coordinates are limited to `[-half_extent, half_extent]` on both axes.
    #[serde(default = "default_half_extent")]
    pub half_extent: u32,

    /// Spacing of the darker grid lines, in grid units.
    #[serde(default = "default_major_every")]
    pub major_every: u32,
}

fn default_half_extent() -> u32 {
    55
}
fn default_major_every() -> u32 {
    5
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { half_extent: default_half_extent(), major_every: default_major_every() }
    }
}

/// Canvas display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Pixels per grid unit.
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Smallest accepted scale.
    #[serde(default = "default_min_scale")]
    pub min_scale: u32,

    /// Largest accepted scale.
    #[serde(default = "default_max_scale")]
    pub max_scale: u32,
}

fn default_scale() -> u32 {
    13
}
fn default_min_scale() -> u32 {
    10
}
fn default_max_scale() -> u32 {
    50
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { scale: default_scale(), min_scale: default_min_scale(), max_scale: default_max_scale() }
    }
}

/// Input parsing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Clamp out-of-range coordinates onto the grid instead of rejecting them.
    #[serde(default = "default_clamp")]
    pub clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { clamp: default_clamp() }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Input settings.
    #[serde(default)]
    pub input: InputConfig,
}

impl RasterConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default configuration ({}): {e}", path.display());
                Self::default()
            }
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: String| Error::ConfigInvalid { key: key.to_string(), message };

        if self.grid.half_extent == 0 {
            return Err(invalid("grid.half_extent", "must be at least 1".to_string()));
        }
        if self.grid.major_every == 0 {
            return Err(invalid("grid.major_every", "must be at least 1".to_string()));
        }

        let d = &self.display;
        if d.min_scale == 0 || d.min_scale > d.max_scale {
            return Err(invalid(
                "display.min_scale",
                format!("must be between 1 and max_scale ({})", d.max_scale),
            ));
        }
        if !(d.min_scale..=d.max_scale).contains(&d.scale) {
            return Err(invalid(
                "display.scale",
                format!("{} is outside [{}, {}]", d.scale, d.min_scale, d.max_scale),
            ));
        }

        let side = 2 * (u64::from(self.grid.half_extent) + 1) * u64::from(d.scale);
        if side > u64::from(MAX_DIMENSION) {
            return Err(invalid(
                "display.scale",
                format!("canvas side {side}px exceeds {MAX_DIMENSION}px"),
            ));
        }

        Ok(())
    }

    /// Replace the scale, keeping it inside `[min_scale, max_scale]`.
    pub fn set_scale(&mut self, scale: u32) {
        self.display.scale = scale.clamp(self.display.min_scale, self.display.max_scale);
    }
}
