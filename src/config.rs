/// All pipeline parameters in one struct.
/// Defaults are tuned for scanned handwriting on a light background.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    // -- Bitmap stage --
    /// Brightness threshold (0-255). Pixels darker than this are ink.
    pub threshold: u8,
    /// Gaussian blur sigma applied before thresholding.
    pub blur_sigma: f32,

    // -- Crop stage --
    /// Minimum contour area in px² for a region to count as ink
    /// (filter speckles when computing the crop bounding box).
    pub min_ink_area: f64,
    /// Padding in pixels added around the ink bounding box.
    pub padding: u32,

    // -- Extraction --
    /// Strategy for reducing the square canvas to a point sequence.
    pub extractor: ExtractorKind,
    /// Contours with fewer raw points than this are discarded as noise.
    pub min_contour_points: usize,
    /// RDP epsilon, as a fraction of each contour's arc length.
    pub simplify_fraction: f64,
    /// Number of points resampled from each smoothed contour.
    pub spline_samples: usize,
}

/// Strategy for reducing the binary square canvas to a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorKind {
    /// Trace outlines, simplify with RDP, smooth with a B-spline.
    #[default]
    Contour,
    /// Thin to a 1-pixel centerline and order pixels by nearest neighbor.
    Skeleton,
}

impl ExtractorKind {
    /// Short name for progress output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Contour => "contour",
            Self::Skeleton => "skeleton",
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 180,
            // Matches a 5x5 Gaussian kernel.
            blur_sigma: 1.1,
            min_ink_area: 100.0,
            padding: 20,
            extractor: ExtractorKind::Contour,
            min_contour_points: 10,
            simplify_fraction: 0.01,
            spline_samples: 50,
        }
    }
}
