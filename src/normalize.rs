//! Pixel-to-unit-square coordinate transform.

use kurbo::Point;

/// Scale pixel coordinates into the unit square by dividing by the
/// square canvas dimension. Pure and total for any finite input; by
/// construction the canvas dimension bounds every coordinate, so the
/// output lies in [0, 1].
pub fn to_unit(points: &[Point], dim: u32) -> Vec<Point> {
    let d = f64::from(dim);
    points.iter().map(|p| Point::new(p.x / d, p.y / d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lies_in_unit_square() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(17.0, 42.5),
            Point::new(80.0, 80.0),
        ];
        for p in to_unit(&points, 80) {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn maximum_coordinate_maps_to_one() {
        let points = [Point::new(64.0, 32.0)];
        let out = to_unit(&points, 64);
        assert!((out[0].x - 1.0).abs() < 1e-12);
        assert!((out[0].y - 0.5).abs() < 1e-12);
    }
}
