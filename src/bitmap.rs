use std::path::Path;

use image::{GrayImage, ImageReader};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::distance_transform::Norm;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{close, open};

use crate::config::PipelineConfig;
use crate::error::ExtractError;

/// Load an image as 8-bit grayscale.
pub fn load(path: &Path) -> Result<GrayImage, ExtractError> {
    let img = ImageReader::open(path)
        .map_err(|e| ExtractError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| ExtractError::ImageLoad(e.to_string()))?
        .into_luma8();
    Ok(img)
}

/// Blur, threshold, and despeckle a grayscale image.
///
/// The threshold is inverted: ink (dark) pixels become 255, background 0.
/// A 3x3 morphological close bridges hairline gaps in the stroke, then a
/// 3x3 open drops isolated speckles.
pub fn binarize(gray: &GrayImage, config: &PipelineConfig) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, config.blur_sigma);
    let binary = threshold(&blurred, config.threshold, ThresholdType::BinaryInverted);
    let binary = close(&binary, Norm::LInf, 1);
    open(&binary, Norm::LInf, 1)
}

/// Plain inverted threshold, no blur or morphology.
///
/// Used on the square canvas, which is assembled from an already-clean crop.
pub fn rethreshold(gray: &GrayImage, config: &PipelineConfig) -> GrayImage {
    threshold(gray, config.threshold, ThresholdType::BinaryInverted)
}
