//! Nearest-neighbor stroke ordering.
//!
//! Skeleton pixels arrive in scan order, not stroke order. Greedy
//! nearest-neighbor chaining turns them into a plausible pen traversal:
//! start at the topmost (then leftmost) point and always move to the
//! closest unvisited point. Branch points are not special-cased, so
//! skeletons with junctions produce a jump at each branch.

use kurbo::Point;

/// Order points into a single path by greedy nearest-neighbor chaining.
///
/// Returns a permutation of the input: same multiset of points, same
/// length, stroke-like order. Ties (equal distances, duplicate points)
/// resolve to the earliest input index, so the ordering is deterministic.
/// O(n²) in the number of points, which is bounded by the pixel count of
/// one cropped glyph.
pub fn order_by_proximity(points: &[Point]) -> Vec<Point> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    // Topmost, then leftmost starting point.
    let mut start = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if (p.y, p.x) < (points[start].y, points[start].x) {
            start = i;
        }
    }

    let mut visited = vec![false; points.len()];
    let mut ordered = Vec::with_capacity(points.len());
    visited[start] = true;
    ordered.push(points[start]);
    let mut last = points[start];

    for _ in 1..points.len() {
        let mut nearest = 0;
        let mut nearest_d2 = f64::INFINITY;
        for (i, p) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d2 = dist_squared(last, *p);
            if d2 < nearest_d2 {
                nearest_d2 = d2;
                nearest = i;
            }
        }
        visited[nearest] = true;
        ordered.push(points[nearest]);
        last = points[nearest];
    }

    ordered
}

/// Squared Euclidean distance; no sqrt needed for comparisons.
fn dist_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn sorted_pairs(points: &[Point]) -> Vec<(u64, u64)> {
        let mut v: Vec<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn empty_and_single_are_unchanged() {
        assert!(order_by_proximity(&[]).is_empty());
        let one = [pt(3.0, 4.0)];
        assert_eq!(order_by_proximity(&one), one.to_vec());
    }

    #[test]
    fn output_is_a_permutation_of_input() {
        let input = [
            pt(5.0, 2.0),
            pt(1.0, 1.0),
            pt(9.0, 9.0),
            pt(1.0, 1.0), // duplicate
            pt(4.0, 7.0),
        ];
        let out = order_by_proximity(&input);
        assert_eq!(out.len(), input.len());
        assert_eq!(sorted_pairs(&out), sorted_pairs(&input));
    }

    #[test]
    fn starts_topmost_then_leftmost() {
        let input = [pt(0.0, 5.0), pt(7.0, 1.0), pt(2.0, 1.0), pt(3.0, 3.0)];
        let out = order_by_proximity(&input);
        assert_eq!(out[0], pt(2.0, 1.0));
    }

    #[test]
    fn deterministic_with_duplicates() {
        let input = [
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(2.0, 0.0),
            pt(1.0, 0.0),
            pt(1.0, 0.0),
        ];
        let a = order_by_proximity(&input);
        let b = order_by_proximity(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn each_step_picks_the_nearest_remaining_point() {
        let input = [
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            pt(3.0, 4.0),
            pt(1.0, 1.0),
            pt(6.0, 6.0),
        ];
        let out = order_by_proximity(&input);
        for i in 0..out.len() - 1 {
            let chosen = dist_squared(out[i], out[i + 1]);
            // No point picked later was strictly closer at this step.
            for later in &out[i + 2..] {
                assert!(dist_squared(out[i], *later) >= chosen);
            }
        }
    }

    #[test]
    fn diagonal_line_traverses_monotonically() {
        // Scan-order input of a 1-px diagonal; traversal must walk it
        // end to end without backtracking jumps.
        let input: Vec<Point> = (0..30).map(|i| pt(i as f64, i as f64)).collect();
        let out = order_by_proximity(&input);
        for w in out.windows(2) {
            assert!((w[1].x - w[0].x - 1.0).abs() < 1e-12);
            assert!((w[1].y - w[0].y - 1.0).abs() < 1e-12);
        }
    }
}
