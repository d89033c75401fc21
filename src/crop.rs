//! Ink bounding box and square canvas assembly.

use image::{imageops, GrayImage, Luma};
use imageproc::contours::find_contours;

use crate::config::PipelineConfig;
use crate::error::ExtractError;

/// The cropped glyph centered on a white square canvas.
#[derive(Debug, Clone)]
pub struct SquareCanvas {
    /// Grayscale canvas, `dim` x `dim`, white background.
    pub image: GrayImage,
    /// Side length in pixels. Divisor for coordinate normalization.
    pub dim: u32,
}

/// Crop the grayscale image to the padded ink bounding box and center it
/// on a white square canvas.
///
/// `binary` is the binarized view of `gray` (ink = 255). Contours with
/// area below `min_ink_area` are ignored when computing the bounding box;
/// if no contour qualifies the image is treated as empty.
pub fn square_crop(
    gray: &GrayImage,
    binary: &GrayImage,
    config: &PipelineConfig,
) -> Result<SquareCanvas, ExtractError> {
    let contours = find_contours::<i32>(binary);

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    let mut kept = 0usize;
    for c in &contours {
        let pts: Vec<(f64, f64)> = c.points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
        if polygon_area(&pts).abs() <= config.min_ink_area {
            continue;
        }
        kept += 1;
        for p in &c.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }
    if kept == 0 {
        return Err(ExtractError::NoInk);
    }

    let (iw, ih) = gray.dimensions();
    let pad = config.padding as i32;
    let x0 = (min_x - pad).max(0) as u32;
    let y0 = (min_y - pad).max(0) as u32;
    let x1 = (max_x + pad + 1).min(iw as i32) as u32;
    let y1 = (max_y + pad + 1).min(ih as i32) as u32;
    let (w, h) = (x1 - x0, y1 - y0);

    let cropped = imageops::crop_imm(gray, x0, y0, w, h).to_image();

    let dim = w.max(h);
    let mut canvas = GrayImage::from_pixel(dim, dim, Luma([255]));
    let ox = (dim - w) / 2;
    let oy = (dim - h) / 2;
    imageops::replace(&mut canvas, &cropped, i64::from(ox), i64::from(oy));

    Ok(SquareCanvas { image: canvas, dim })
}

/// Signed area via shoelace formula. Positive = CCW, negative = CW.
fn polygon_area(pts: &[(f64, f64)]) -> f64 {
    let n = pts.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            pts[i].0 * pts[j].1 - pts[j].0 * pts[i].1
        })
        .sum::<f64>()
        / 2.0
}
