//! SVG rendering for flower shapes.

use std::fmt::Write;

use rayon::prelude::*;

use petal_core::{Flower, R2};

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Stroke width for overlay outlines
    pub stroke_width: f64,
    /// Whether to draw construction circles and guide lines
    pub show_lines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            stroke_width: 1.0,
            show_lines: false,
        }
    }
}

/// Render the filled shape (and optional construction overlay) to an SVG
/// string. The fill is binary: each scanline's runs of member pixels become
/// one-pixel-tall rects, with no anti-aliasing.
pub fn render_svg(flower: &Flower, config: &RenderConfig) -> String {
    let mut svg = String::new();

    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        config.width, config.height
    ).unwrap();

    // Background
    writeln!(
        &mut svg,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    ).unwrap();

    // Membership is per pixel and rows are independent, so scan them in
    // parallel and serialize afterwards.
    let rect = flower.rect;
    let rows: Vec<i64> = (rect.y..rect.bottom()).collect();
    let runs: Vec<(i64, Vec<(i64, i64)>)> = rows
        .par_iter()
        .map(|&py| (py, row_runs(flower, py)))
        .collect();
    for (py, row) in runs {
        for (x0, len) in row {
            writeln!(
                &mut svg,
                r#"  <rect x="{}" y="{}" width="{}" height="1" fill="black"/>"#,
                x0, py, len
            ).unwrap();
        }
    }

    if config.show_lines {
        overlay(&mut svg, flower, config);
    }

    writeln!(&mut svg, "</svg>").unwrap();

    svg
}

/// Contiguous spans of member pixels in one scanline, as (start x, length).
fn row_runs(flower: &Flower, py: i64) -> Vec<(i64, i64)> {
    let rect = flower.rect;
    let mut runs = Vec::new();
    let mut start = None;
    for px in rect.x..rect.right() {
        let inside = flower.is_inside(R2 { x: px as f64, y: py as f64 });
        match (inside, start) {
            (true, None) => start = Some(px),
            (false, Some(x0)) => {
                runs.push((x0, px - x0));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(x0) = start {
        runs.push((x0, rect.right() - x0));
    }
    runs
}

/// Construction circles, guide polylines and the bounding rectangle.
fn overlay(svg: &mut String, flower: &Flower, config: &RenderConfig) {
    let n = flower.ring.num_vertices();

    for (i, v) in flower.ring.vertices().iter().enumerate() {
        let hue = 360 * i / n;
        let stroke = format!("hsl({hue}, 100%, 50%)");
        if flower.radii.small[i] > 0. {
            writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                v.x, v.y, flower.radii.small[i], stroke, config.stroke_width
            ).unwrap();
        }
        writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            v.x, v.y, flower.radii.large[i], stroke, config.stroke_width
        ).unwrap();
    }

    for points in [flower.ring.vertices(), flower.intersections.as_slice()] {
        polyline(svg, points, config);
    }

    let r = flower.rect;
    writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="{}"/>"#,
        r.x, r.y, r.width, r.height, config.stroke_width
    ).unwrap();
}

fn polyline(svg: &mut String, points: &[R2<f64>], config: &RenderConfig) {
    if points.is_empty() {
        return;
    }
    let mut path = String::new();
    for p in points {
        write!(&mut path, "{},{} ", p.x, p.y).unwrap();
    }
    // close back to the first point
    write!(&mut path, "{},{}", points[0].x, points[0].y).unwrap();
    writeln!(
        svg,
        r#"  <polyline points="{}" fill="none" stroke="gray" stroke-width="{}"/>"#,
        path, config.stroke_width
    ).unwrap();
}
