use clap::{Parser, ValueEnum};
use inktrace::{extract, font, ExtractError, ExtractorKind, PipelineConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inktrace", about = "Handwriting images to normalized point-sequence glyphs")]
struct Cli {
    /// Directory containing one <char>.png per character
    #[arg(short, long, default_value = "test-data")]
    dir: PathBuf,

    /// Characters to process (one image file per character)
    #[arg(short, long, default_value = "A")]
    chars: String,

    /// Output JSON path (defaults to <dir>/test-output.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Point extraction strategy
    #[arg(short, long, value_enum, default_value_t = Extractor::Contour)]
    extractor: Extractor,

    /// Font name stored in the output document
    #[arg(short, long, default_value = "test_font")]
    font_name: String,

    /// Brightness threshold (0-255); pixels darker than this are ink
    #[arg(long, default_value = "180")]
    threshold: u8,

    /// Padding in pixels around the ink bounding box
    #[arg(long, default_value = "20")]
    padding: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Extractor {
    /// Outline tracing with RDP simplification and spline smoothing
    Contour,
    /// Centerline thinning with nearest-neighbor stroke ordering
    Skeleton,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = PipelineConfig {
        threshold: cli.threshold,
        padding: cli.padding,
        extractor: match cli.extractor {
            Extractor::Contour => ExtractorKind::Contour,
            Extractor::Skeleton => ExtractorKind::Skeleton,
        },
        ..PipelineConfig::default()
    };

    // Header
    eprintln!();
    eprintln!(
        "  inktrace \u{00b7} {} character(s), {} extraction",
        cli.chars.chars().count(),
        config.extractor.name(),
    );

    let mut glyphs = Vec::new();
    for ch in cli.chars.chars() {
        let image_path = cli.dir.join(format!("{ch}.png"));
        eprintln!();
        eprintln!("  Glyph       \"{}\" from {}", ch, image_path.display());
        // Pipeline (lib prints step-by-step progress to stderr)
        match extract(&image_path, &config) {
            Ok(outline) => glyphs.push(font::GlyphEntry::single_stroke(ch, &outline.points)),
            Err(e @ (ExtractError::ImageLoad(_) | ExtractError::NoInk)) => {
                eprintln!("  Skip        {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    if glyphs.is_empty() {
        eprintln!();
        eprintln!("  No glyphs processed; nothing written");
        eprintln!();
        return Ok(());
    }

    let doc = font::FontDoc {
        font_name: cli.font_name,
        glyphs,
    };
    let output = cli
        .output
        .unwrap_or_else(|| cli.dir.join("test-output.json"));
    font::write(&doc, &output)?;

    // Footer
    eprintln!();
    eprintln!("  \u{2713} {} glyph(s) \u{2192} {}", doc.glyphs.len(), output.display());
    eprintln!();

    Ok(())
}
