//! Points-from-image: two interchangeable extraction strategies.
//!
//! Both take the binarized square canvas and produce one ordered point
//! sequence. `Contour` traces outlines and smooths them; `Skeleton`
//! thins the ink to a centerline and orders its pixels.

pub mod contour;
pub mod skeleton;

use image::GrayImage;
use kurbo::Point;

use crate::config::{ExtractorKind, PipelineConfig};
use crate::sequence;

/// Extract an ordered point sequence from the binary square canvas.
///
/// An empty result means no usable ink; the caller reports it.
pub fn points_from_image(binary: &GrayImage, config: &PipelineConfig) -> Vec<Point> {
    match config.extractor {
        ExtractorKind::Contour => contour::extract(binary, config),
        ExtractorKind::Skeleton => {
            let skel = skeleton::thin(binary);
            let pixels = skeleton::foreground_points(&skel);
            sequence::order_by_proximity(&pixels)
        }
    }
}
