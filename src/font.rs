//! Output document model and JSON serializer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use kurbo::Point;
use serde::Serialize;

use crate::error::ExtractError;

/// One font and its glyphs, as written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct FontDoc {
    #[serde(rename = "fontName")]
    pub font_name: String,
    pub glyphs: Vec<GlyphEntry>,
}

/// A character and its strokes in normalized [0, 1] coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct GlyphEntry {
    #[serde(rename = "char")]
    pub character: String,
    pub strokes: Vec<Vec<[f64; 2]>>,
}

impl GlyphEntry {
    /// Build a single-stroke glyph from an ordered point sequence.
    pub fn single_stroke(character: char, points: &[Point]) -> Self {
        Self {
            character: character.to_string(),
            strokes: vec![points.iter().map(|p| [p.x, p.y]).collect()],
        }
    }
}

/// Write the document as pretty-printed JSON.
///
/// This is the one pipeline failure that propagates uncaught.
pub fn write(doc: &FontDoc, path: &Path) -> Result<(), ExtractError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), doc)?;
    Ok(())
}
