//! Drawing rasters for display.
//!
//! The rasterizers produce grid coordinates; this module turns them into
//! canvas pixels: grid lines, greyscale cells derived from coverage, the
//! dashed ideal segment, and highlighted anchor points. The SVG scene adds the
//! axis labels and anchor coordinates.

mod canvas;
mod svg_scene;

pub use canvas::GridCanvas;
pub(crate) use canvas::strongest_per_cell;
pub use svg_scene::svg_scene;

use crate::config::RasterConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Shape;
use crate::raster::Raster;

/// Render a full scene for `shape` and its raster.
///
/// # Errors
///
/// Returns an error if the configured canvas size is invalid.
pub fn render_scene(config: &RasterConfig, shape: &Shape, raster: &Raster) -> Result<Framebuffer> {
    let mut canvas = GridCanvas::new(config)?;
    canvas.draw_scene(shape, raster);
    Ok(canvas.into_framebuffer())
}
