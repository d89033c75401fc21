//! inktrace: handwriting image → normalized point-sequence glyphs.
//!
//! Loads a raster image of a handwritten character, isolates the ink,
//! centers it on a square canvas, reduces it to an ordered point path
//! (smoothed contour outline or skeleton centerline), and normalizes
//! all coordinates to the unit square for storage in a simple JSON
//! font document.
//!
//! # Example
//!
//! ```no_run
//! use inktrace::{extract, PipelineConfig};
//! use std::path::Path;
//!
//! let config = PipelineConfig::default();
//! let outline = extract(Path::new("A.png"), &config)?;
//! // outline.points are kurbo::Points in [0, 1]
//! # Ok::<(), inktrace::ExtractError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod config;
mod crop;
mod extract;
mod normalize;

pub mod error;
pub mod font;
pub mod sequence;
pub mod spline;

// Re-export kurbo so downstream users get the same version
// used by GlyphOutline.points (Vec<kurbo::Point>).
pub use kurbo;

pub use config::{ExtractorKind, PipelineConfig};
pub use error::ExtractError;

use image::GrayImage;
use kurbo::Point;
use std::path::Path;
use std::time::Instant;

/// The result of extraction: one glyph's ordered, normalized points.
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    /// Ordered points in [0, 1] coordinates.
    pub points: Vec<Point>,
    /// Side of the square canvas the points were normalized by.
    pub canvas_dim: u32,
}

/// Full pipeline: image path → normalized point sequence.
pub fn extract(image_path: &Path, config: &PipelineConfig) -> Result<GlyphOutline, ExtractError> {
    let gray = bitmap::load(image_path)?;
    extract_from_gray(&gray, config)
}

/// Pipeline starting from an in-memory grayscale image.
///
/// Stages: binarize → crop to padded ink bounding box on a square
/// canvas → re-threshold → extract points (per strategy) → normalize.
pub fn extract_from_gray(
    gray: &GrayImage,
    config: &PipelineConfig,
) -> Result<GlyphOutline, ExtractError> {
    let t_start = Instant::now();
    let (w, h) = gray.dimensions();
    eprintln!("  Load        {}x{} px, threshold {}", w, h, config.threshold);

    let binary = bitmap::binarize(gray, config);
    let canvas = crop::square_crop(gray, &binary, config)?;
    eprintln!(
        "  Crop        {0}x{0} canvas (pad {1})",
        canvas.dim, config.padding
    );

    let square_binary = bitmap::rethreshold(&canvas.image, config);
    let points = extract::points_from_image(&square_binary, config);
    if points.is_empty() {
        return Err(ExtractError::NoInk);
    }

    let normalized = normalize::to_unit(&points, canvas.dim);
    let elapsed = t_start.elapsed().as_millis();
    eprintln!(
        "  Result      {} points in [0,1] via {}  ({}ms)",
        normalized.len(),
        config.extractor.name(),
        elapsed,
    );

    Ok(GlyphOutline {
        points: normalized,
        canvas_dim: canvas.dim,
    })
}
