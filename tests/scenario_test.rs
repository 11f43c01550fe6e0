//! Scenario Tests - Known Inputs With Exact Expected Output
//!
//! Hand-checked reference runs for each algorithm, plus the full pipeline
//! from configuration file to report text, ASCII, and PNG.
//!
//! Run: cargo test --test scenario_test

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::time::Duration;

use trueno_raster::output::{AsciiGrid, PngEncoder};
use trueno_raster::prelude::*;
use trueno_raster::render::{render_scene, svg_scene};

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

// ============================================================================
// REFERENCE RUNS
// ============================================================================

#[test]
fn scenario_bresenham_reference_line() {
    let raster = rasterize_line_bresenham(2, 3, 8, 6);
    assert_eq!(
        raster.points(),
        pts(&[(2, 3), (3, 4), (4, 4), (5, 5), (6, 5), (7, 6), (8, 6)])
    );
    assert!(raster.pixels.iter().all(|p| p.coverage == FULL_COVERAGE));
}

#[test]
fn scenario_naive_vertical() {
    let raster = rasterize_line_naive(5, 0, 5, 4);
    assert_eq!(raster.points(), pts(&[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4)]));
    assert!(raster.trace.iter().all(|line| line.ends_with("(vertical)")));
}

#[test]
fn scenario_dda_ties_round_to_even() {
    let raster = rasterize_line_dda(0, 0, 4, 2);
    assert_eq!(raster.points(), pts(&[(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)]));
    assert_eq!(raster.trace.entries()[0], "dx=4, dy=2, steps=4");
    assert_eq!(raster.trace.entries()[1], "x_inc=1.000, y_inc=0.500");
}

#[test]
fn scenario_dda_zero_length() {
    let raster = rasterize_line_dda(3, 3, 3, 3);
    assert_eq!(raster.points(), pts(&[(3, 3)]));
    assert_eq!(raster.trace.entries(), ["Single point (zero length)"]);
}

#[test]
fn scenario_circle_radius_three() {
    let raster = rasterize_circle_bresenham(0, 0, 3);
    let points = raster.points();
    assert!(points.len() <= 24);
    for p in &points {
        assert!(points.contains(&Point::new(-p.x, p.y)));
        assert!(points.contains(&Point::new(p.x, -p.y)));
        assert!(points.contains(&p.transpose()));
    }
    assert!(points.contains(&Point::new(0, 3)));
    assert!(points.contains(&Point::new(2, 2)));
    assert_eq!(raster.trace.entries()[0], "Initial: x=0, y=3, d=-3");
}

#[test]
fn scenario_circle_zero_radius() {
    assert_eq!(rasterize_circle_bresenham(4, -2, 0).points(), pts(&[(4, -2)]));
}

#[test]
fn scenario_wu_horizontal_pairs() {
    let raster = rasterize_line_wu(0, 0, 5, 0);
    let inner = &raster.pixels[1..raster.len() - 1];
    assert_eq!(inner.len(), 8);
    for pair in inner.chunks(2) {
        assert_eq!((pair[0].coverage, pair[1].coverage), (255, 0));
    }
}

#[test]
fn scenario_wu_shallow_slope() {
    let raster = rasterize_line_wu(0, 0, 4, 1);
    let coverages: Vec<u8> = raster.pixels.iter().map(|p| p.coverage).collect();
    assert_eq!(coverages, vec![255, 191, 64, 128, 128, 64, 191, 255]);
}

// ============================================================================
// ALGORITHM DISPATCH
// ============================================================================

#[test]
fn scenario_dispatch_by_tag() {
    for (tag, expected) in [
        ("naive", Algorithm::Naive),
        ("dda", Algorithm::Dda),
        ("bres_line", Algorithm::BresenhamLine),
        ("bres_circle", Algorithm::BresenhamCircle),
        ("wu", Algorithm::Wu),
    ] {
        let algorithm: Algorithm = tag.parse().unwrap();
        assert_eq!(algorithm, expected);
        assert_eq!(algorithm.tag(), tag);
    }
    assert!(matches!("spline".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));
}

#[test]
fn scenario_dispatch_rejects_wrong_shape() {
    let circle = Algorithm::BresenhamCircle.shape_from_coords(0, 0, 3, 0);
    let err = Algorithm::Wu.rasterize(&circle).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { algorithm: "wu", shape: "circle" }));
}

#[test]
fn scenario_dispatch_matches_direct_calls() {
    let line = Algorithm::Dda.shape_from_coords(-4, 7, 9, -2);
    assert_eq!(Algorithm::Dda.rasterize(&line).unwrap(), rasterize_line_dda(-4, 7, 9, -2));
    let circle = Algorithm::BresenhamCircle.shape_from_coords(1, 1, 6, 99);
    assert_eq!(
        Algorithm::BresenhamCircle.rasterize(&circle).unwrap(),
        rasterize_circle_bresenham(1, 1, 6)
    );
}

// ============================================================================
// PIPELINE
// ============================================================================

#[test]
fn scenario_report_text() {
    let algorithm = Algorithm::BresenhamLine;
    let shape = algorithm.shape_from_coords(2, 3, 8, 6);
    let raster = algorithm.rasterize(&shape).unwrap();
    let text = Report::new(algorithm, shape, &raster, Duration::from_micros(1500)).to_string();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Start point: (2,3)");
    assert_eq!(lines[1], "End point: (8,6)");
    assert_eq!(lines[2], "Point count: 7");
    assert_eq!(lines[3], "Elapsed: 1.500 ms");
    assert_eq!(lines[4], "-".repeat(45));
    assert_eq!(lines.len(), 5 + raster.trace.len());
}

#[test]
fn scenario_circle_report_names_algorithm_tag() {
    let algorithm = Algorithm::BresenhamCircle;
    let shape = algorithm.shape_from_coords(0, 0, 3, 0);
    let raster = algorithm.rasterize(&shape).unwrap();
    let report = Report::new(algorithm, shape, &raster, Duration::ZERO);
    assert_eq!(
        report.header(),
        ["Algorithm: bres_circle", "Circle center: (0,0)", "Radius: 3", "Point count: 16", "Elapsed: 0.000 ms"]
    );
}

#[test]
fn scenario_user_input_to_raster() {
    let bounds = GridBounds::default();
    let [x0, y0, r, _] = bounds.parse_all([("x0", "1.5"), ("y0", "-2"), ("r", "80"), ("y1", "0")]).unwrap();
    assert_eq!((x0, y0, r), (2, -2, 55));

    let strict = GridBounds::strict(55);
    let err = strict.parse_all([("x0", "0"), ("y0", "abc")]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "y0"));
}

#[test]
fn scenario_config_file_to_png() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid:\n  half_extent: 8\ndisplay:\n  scale: 12").unwrap();
    let config = RasterConfig::load(file.path()).unwrap();
    assert_eq!(config.grid.major_every, 5);

    let algorithm = Algorithm::Wu;
    let shape = algorithm.shape_from_coords(-6, -3, 7, 5);
    let raster = algorithm.rasterize(&shape).unwrap();
    let fb = render_scene(&config, &shape, &raster).unwrap();
    assert_eq!(fb.width(), 2 * 9 * 12);
    assert_eq!(fb.height(), fb.width());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wu.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn scenario_labelled_svg_file() {
    let algorithm = Algorithm::BresenhamLine;
    let shape = algorithm.shape_from_coords(2, 3, 8, 6);
    let raster = algorithm.rasterize(&shape).unwrap();
    let config = RasterConfig::default();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bres.svg");
    svg_scene(&config, &shape, &raster).unwrap().write_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("<svg"));
    assert!(text.contains(">1 unit = 13 px</text>"));
    assert!(text.contains(">-55</text>"));
    assert!(text.contains(">53</text>"));
    assert!(!text.contains(">54</text>"));
    assert!(text.contains(">(2, 3)</text>"));
    assert!(text.contains(">(8, 6)</text>"));
}

#[test]
fn scenario_ascii_circle() {
    let raster = rasterize_circle_bresenham(0, 0, 2);
    let text = AsciiGrid::new().margin(0).render(&raster);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.chars().count() == 5));
    assert_eq!(rows[0], rows[4]);
    assert_eq!(rows[2], "@...@");
}
