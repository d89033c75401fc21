//! Contour-based extraction: trace outlines, simplify, smooth.

use geo::{LineString, Simplify};
use image::GrayImage;
use imageproc::contours::find_contours;
use kurbo::Point;

use crate::config::PipelineConfig;
use crate::spline;

/// Extract smoothed outline points from every qualifying contour.
///
/// Contours shorter than `min_contour_points` are discarded as noise.
/// Each survivor is RDP-simplified with an epsilon of
/// `simplify_fraction` of its arc length, then spline-smoothed when at
/// least 4 vertices remain; a degenerate spline falls back to the
/// simplified vertices unchanged. All per-contour outputs are
/// concatenated into one flat list, so disjoint outlines end up in a
/// single stroke.
pub fn extract(binary: &GrayImage, config: &PipelineConfig) -> Vec<Point> {
    let contours = find_contours::<i32>(binary);

    let mut all = Vec::new();
    for c in &contours {
        if c.points.len() < config.min_contour_points {
            continue;
        }

        let raw: Vec<(f64, f64)> = c.points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
        let epsilon = config.simplify_fraction * arc_length(&raw);
        let reduced = rdp_simplify(&raw, epsilon);

        if reduced.len() >= 4 {
            match spline::smooth(&reduced, config.spline_samples) {
                Ok(smoothed) => all.extend(smoothed),
                Err(_) => all.extend(to_points(&reduced)),
            }
        } else {
            all.extend(to_points(&reduced));
        }
    }
    all
}

/// RDP polyline simplification.
fn rdp_simplify(points: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if points.len() <= 2 || epsilon <= 0.0 {
        return points.to_vec();
    }
    LineString::from(points.to_vec())
        .simplify(&epsilon)
        .into_inner()
        .into_iter()
        .map(|c| (c.x, c.y))
        .collect()
}

/// Open polyline arc length.
fn arc_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let dx = w[1].0 - w[0].0;
            let dy = w[1].1 - w[0].1;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

fn to_points(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
