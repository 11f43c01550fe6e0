//! Labelled vector rendering of a scene.
//!
//! Same layout as [`GridCanvas`](super::GridCanvas), plus the text the
//! bitmap canvas leaves out: tick numbers every 2 units, the axis names, the
//! scale caption, and the coordinates beside each anchor.

use super::strongest_per_cell;
use crate::color::Rgba;
use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Shape};
use crate::output::{SvgEncoder, TextAnchor};
use crate::raster::Raster;
use crate::scale::CoordinateMapper;

const TICK_EVERY: usize = 2;
const TICK_FONT: f32 = 8.0;
const ORIGIN_FONT: f32 = 9.0;
const AXIS_NAME_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 9.0;

/// Build the SVG document for `shape` and its raster.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if the configured canvas is empty.
pub fn svg_scene(config: &RasterConfig, shape: &Shape, raster: &Raster) -> Result<SvgEncoder> {
    let side = CoordinateMapper::canvas_side(config);
    let Ok(side_px) = u32::try_from(side) else {
        return Err(Error::InvalidDimensions { width: 0, height: 0 });
    };
    if side_px == 0 {
        return Err(Error::InvalidDimensions { width: 0, height: 0 });
    }

    let mapper = CoordinateMapper::for_config(config);
    let mut svg = SvgEncoder::new(side_px, side_px);

    draw_grid(&mut svg, &mapper, config, side as f32);
    draw_cells(&mut svg, &mapper, raster);
    if let Shape::Line(segment) = shape {
        if !segment.is_degenerate() {
            let (x1, y1) = canvas_f32(&mapper, segment.start);
            let (x2, y2) = canvas_f32(&mapper, segment.end);
            svg.dashed_line(x1, y1, x2, y2, Rgba::IDEAL_LINE, 1.0, (2.0, 2.0));
        }
    }
    draw_anchors(&mut svg, &mapper, shape);

    Ok(svg)
}

fn canvas_f32(mapper: &CoordinateMapper, p: Point) -> (f32, f32) {
    let (x, y) = mapper.to_canvas(p);
    (x as f32, y as f32)
}

fn draw_grid(svg: &mut SvgEncoder, mapper: &CoordinateMapper, config: &RasterConfig, side: f32) {
    let gs = config.grid.half_extent as i32;
    let major = config.grid.major_every.max(1) as i32;

    for i in -gs..=gs {
        let color = if i % major == 0 { Rgba::GRID_MAJOR } else { Rgba::GRID };
        let (x, y) = canvas_f32(mapper, Point::new(i, i));
        svg.line(x, 0.0, x, side, color, 1.0);
        svg.line(0.0, y, side, y, color, 1.0);
    }

    let (cx, cy) = canvas_f32(mapper, Point::ORIGIN);
    svg.line(0.0, cy, side, cy, Rgba::AXIS, 2.0);
    svg.line(cx, 0.0, cx, side, Rgba::AXIS, 2.0);

    svg.bold_text(side - 10.0, cy - 10.0, "X", AXIS_NAME_FONT, Rgba::AXIS, TextAnchor::Middle);
    svg.bold_text(cx - 10.0, 10.0 + AXIS_NAME_FONT / 2.0, "Y", AXIS_NAME_FONT, Rgba::AXIS, TextAnchor::Middle);

    for v in (-gs..=gs).step_by(TICK_EVERY).filter(|&v| v != 0) {
        let label = v.to_string();
        let (x, _) = canvas_f32(mapper, Point::new(v, 0));
        svg.text_anchored(x, cy + 10.0 + TICK_FONT / 2.0, &label, TICK_FONT, Rgba::AXIS, TextAnchor::Middle);
        let (_, y) = canvas_f32(mapper, Point::new(0, v));
        svg.text_anchored(cx + 10.0, y + TICK_FONT / 2.0, &label, TICK_FONT, Rgba::AXIS, TextAnchor::Middle);
    }
    svg.bold_text(cx + 12.0, cy + 12.0 + ORIGIN_FONT / 2.0, "0", ORIGIN_FONT, Rgba::AXIS, TextAnchor::Middle);

    let caption = format!("1 unit = {} px", mapper.scale());
    svg.text(10.0, 10.0 + LABEL_FONT, &caption, LABEL_FONT, Rgba::AXIS);
}

fn draw_cells(svg: &mut SvgEncoder, mapper: &CoordinateMapper, raster: &Raster) {
    let half = (mapper.scale() - 1) / 2;
    let size = (2 * half + 1) as f32;
    for pixel in strongest_per_cell(&raster.pixels) {
        if pixel.coverage == 0 {
            continue;
        }
        let (cx, cy) = mapper.to_canvas(pixel.point());
        svg.rect((cx - half) as f32, (cy - half) as f32, size, size, Rgba::for_coverage(pixel.coverage));
    }
}

fn draw_anchors(svg: &mut SvgEncoder, mapper: &CoordinateMapper, shape: &Shape) {
    let half = (mapper.scale() / 3).max(3);
    let size = (2 * half + 1) as f32;
    for anchor in shape.anchors() {
        let (cx, cy) = mapper.to_canvas(anchor);
        svg.rect((cx - half) as f32, (cy - half) as f32, size, size, Rgba::ANCHOR);
        let label = format!("({}, {})", anchor.x, anchor.y);
        let offset = (half + 8) as f32;
        svg.bold_text(
            cx as f32 + offset,
            cy as f32 + offset,
            &label,
            LABEL_FONT,
            Rgba::LABEL,
            TextAnchor::Middle,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Algorithm;

    fn small_config() -> RasterConfig {
        let mut config = RasterConfig::default();
        config.grid.half_extent = 6;
        config
    }

    fn scene(algorithm: Algorithm, a: i32, b: i32, c: i32, d: i32) -> SvgEncoder {
        let shape = algorithm.shape_from_coords(a, b, c, d);
        let raster = algorithm.rasterize(&shape).unwrap();
        svg_scene(&small_config(), &shape, &raster).unwrap()
    }

    #[test]
    fn test_tick_labels_every_two_units() {
        let svg = scene(Algorithm::BresenhamLine, 2, 3, 5, -1);
        let texts: Vec<&str> = svg.texts().collect();
        for tick in ["-6", "-4", "-2", "2", "4", "6"] {
            assert_eq!(texts.iter().filter(|t| **t == tick).count(), 2, "tick {tick}");
        }
        for skipped in ["-5", "-3", "-1", "1", "3", "5"] {
            assert!(!texts.contains(&skipped), "unexpected tick {skipped}");
        }
        assert_eq!(texts.iter().filter(|t| **t == "0").count(), 1);
    }

    #[test]
    fn test_axis_names_and_caption() {
        let svg = scene(Algorithm::Dda, 0, 0, 4, 2);
        let texts: Vec<&str> = svg.texts().collect();
        assert!(texts.contains(&"X"));
        assert!(texts.contains(&"Y"));
        assert!(texts.contains(&"1 unit = 13 px"));
    }

    #[test]
    fn test_endpoint_coordinates_labelled() {
        let rendered = scene(Algorithm::Wu, -3, 2, 4, -5).render();
        assert!(rendered.contains(">(-3, 2)</text>"));
        assert!(rendered.contains(">(4, -5)</text>"));
        assert_eq!(rendered.matches("stroke-dasharray").count(), 1);
    }

    #[test]
    fn test_circle_labels_center_only() {
        let svg = scene(Algorithm::BresenhamCircle, 1, 1, 3, 0);
        let labels: Vec<&str> = svg.texts().filter(|t| t.starts_with('(')).collect();
        assert_eq!(labels, ["(1, 1)"]);
        assert!(!svg.render().contains("stroke-dasharray"));
    }

    #[test]
    fn test_cells_and_size() {
        let svg = scene(Algorithm::BresenhamLine, 0, 0, 2, 0);
        assert_eq!(svg.width(), 2 * 7 * 13);
        assert_eq!(svg.height(), svg.width());
        let rendered = svg.render();
        // (1,0) is the one raster cell without an anchor on top.
        let (cx, cy) = CoordinateMapper::for_config(&small_config()).to_canvas(Point::new(1, 0));
        let cell = format!(r#"<rect x="{}" y="{}" width="13" height="13" fill="rgb(0,0,0)"/>"#, cx - 6, cy - 6);
        assert!(rendered.contains(&cell));
    }
}
