//! B-spline smoothing with explicit failure reporting.
//!
//! The reduced contour vertices become the control polygon of a clamped
//! open B-spline of degree `min(3, n - 1)`, evaluated with de Boor's
//! algorithm and resampled at a fixed number of evenly spaced parameters.
//! Degenerate input is reported as an error so the caller decides the
//! fallback, instead of being swallowed here.

use kurbo::Point;
use thiserror::Error;

/// Why a spline fit was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplineError {
    #[error("need at least {needed} distinct control points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("control polygon has non-finite coordinates")]
    Degenerate,
}

/// Smooth a polyline by treating its vertices as B-spline control points
/// and resampling `samples` evenly spaced parameter values.
///
/// The spline is clamped, so the first and last output points coincide
/// with the first and last input vertices.
pub fn smooth(vertices: &[(f64, f64)], samples: usize) -> Result<Vec<Point>, SplineError> {
    let n = vertices.len();
    let degree = 3.min(n.saturating_sub(1));
    if degree == 0 {
        return Err(SplineError::TooFewPoints { needed: 2, got: n });
    }
    if vertices.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(SplineError::Degenerate);
    }
    let distinct = count_distinct(vertices);
    if distinct < degree + 1 {
        return Err(SplineError::TooFewPoints {
            needed: degree + 1,
            got: distinct,
        });
    }

    // Clamped uniform knot vector: degree+1 copies at each end,
    // interior knots 1, 2, ..., n - degree - 1.
    let u_max = (n - degree) as f64;
    let mut knots = Vec::with_capacity(n + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree + 1));
    for i in 1..n - degree {
        knots.push(i as f64);
    }
    knots.extend(std::iter::repeat(u_max).take(degree + 1));

    let steps = samples.max(2) - 1;
    let out = (0..=steps)
        .map(|i| de_boor(u_max * i as f64 / steps as f64, degree, &knots, vertices))
        .collect();
    Ok(out)
}

/// Evaluate the B-spline at parameter `u` via de Boor's algorithm.
fn de_boor(u: f64, degree: usize, knots: &[f64], ctrl: &[(f64, f64)]) -> Point {
    let n = ctrl.len();

    // Knot span s: knots[s] <= u < knots[s+1], clamped to [degree, n-1].
    let mut s = degree;
    while s + 1 < n && u >= knots[s + 1] {
        s += 1;
    }

    let mut d: Vec<(f64, f64)> = (0..=degree).map(|j| ctrl[j + s - degree]).collect();
    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = j + s - degree;
            let denom = knots[i + degree + 1 - r] - knots[i];
            let alpha = if denom == 0.0 { 0.0 } else { (u - knots[i]) / denom };
            d[j] = (
                (1.0 - alpha) * d[j - 1].0 + alpha * d[j].0,
                (1.0 - alpha) * d[j - 1].1 + alpha * d[j].1,
            );
        }
    }
    Point::new(d[degree].0, d[degree].1)
}

/// Number of distinct points in the control polygon.
fn count_distinct(vertices: &[(f64, f64)]) -> usize {
    let mut distinct = 0;
    for (i, v) in vertices.iter().enumerate() {
        if !vertices[..i].contains(v) {
            distinct += 1;
        }
    }
    distinct
}
