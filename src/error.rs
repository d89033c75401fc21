use thiserror::Error;

/// Errors that can occur while extracting a glyph from an image.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("no ink detected in image")]
    NoInk,

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
