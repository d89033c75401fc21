//! Skeleton extraction: thin the glyph to a 1-pixel-wide centerline.

use image::{GrayImage, Luma};
use kurbo::Point;

/// Thin a binary image (foreground = 255) to a 1-pixel-wide skeleton
/// with Zhang-Suen two-subiteration thinning.
///
/// Border pixels are never deleted; in this pipeline the canvas padding
/// keeps ink away from the border anyway.
pub fn thin(binary: &GrayImage) -> GrayImage {
    let (w, h) = binary.dimensions();
    let (wi, hi) = (w as usize, h as usize);
    let mut grid: Vec<bool> = binary.pixels().map(|p| p.0[0] > 0).collect();

    if wi >= 3 && hi >= 3 {
        loop {
            let deleted = thin_pass(&mut grid, wi, hi, true) + thin_pass(&mut grid, wi, hi, false);
            if deleted == 0 {
                break;
            }
        }
    }

    let mut out = GrayImage::new(w, h);
    for (i, &on) in grid.iter().enumerate() {
        if on {
            out.put_pixel((i % wi) as u32, (i / wi) as u32, Luma([255]));
        }
    }
    out
}

/// One Zhang-Suen subiteration. Returns the number of deleted pixels.
fn thin_pass(grid: &mut [bool], w: usize, h: usize, first: bool) -> usize {
    let mut to_delete = Vec::new();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if !grid[y * w + x] {
                continue;
            }
            // Neighbors clockwise from north: p2..p9.
            let p = [
                grid[(y - 1) * w + x],
                grid[(y - 1) * w + x + 1],
                grid[y * w + x + 1],
                grid[(y + 1) * w + x + 1],
                grid[(y + 1) * w + x],
                grid[(y + 1) * w + x - 1],
                grid[y * w + x - 1],
                grid[(y - 1) * w + x - 1],
            ];
            let b: usize = p.iter().filter(|&&v| v).count();
            if !(2..=6).contains(&b) {
                continue;
            }
            let a = (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count();
            if a != 1 {
                continue;
            }
            // p2/p4/p6/p8 are indices 0/2/4/6.
            let ok = if first {
                (!p[0] || !p[2] || !p[4]) && (!p[2] || !p[4] || !p[6])
            } else {
                (!p[0] || !p[2] || !p[6]) && (!p[0] || !p[4] || !p[6])
            };
            if ok {
                to_delete.push(y * w + x);
            }
        }
    }
    for &i in &to_delete {
        grid[i] = false;
    }
    to_delete.len()
}

/// Collect every foreground pixel as a point, in row-major scan order.
pub fn foreground_points(skeleton: &GrayImage) -> Vec<Point> {
    let mut points = Vec::new();
    for (x, y, p) in skeleton.enumerate_pixels() {
        if p.0[0] > 0 {
            points.push(Point::new(f64::from(x), f64::from(y)));
        }
    }
    points
}
