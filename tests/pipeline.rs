//! End-to-end pipeline tests on synthetic images.

use image::{GrayImage, Luma};
use inktrace::kurbo::Point;
use inktrace::{
    extract, extract_from_gray, font, sequence, ExtractError, ExtractorKind, PipelineConfig,
};
use std::path::Path;

fn blank(w: u32, h: u32) -> GrayImage {
    GrayImage::from_pixel(w, h, Luma([255]))
}

fn fill_rect(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, Luma([0]));
        }
    }
}

#[test]
fn filled_square_produces_unit_coordinates() {
    let mut img = blank(120, 120);
    fill_rect(&mut img, 50, 50, 20, 20);

    let outline = extract_from_gray(&img, &PipelineConfig::default()).unwrap();
    assert!(!outline.points.is_empty());
    for p in &outline.points {
        assert!((0.0..=1.0).contains(&p.x), "x out of range: {}", p.x);
        assert!((0.0..=1.0).contains(&p.y), "y out of range: {}", p.y);
    }
}

#[test]
fn small_square_with_relaxed_area_filter() {
    // A 10x10 square's boundary area is 81, below the default ink filter,
    // so the filter has to be relaxed for it to register.
    let mut img = blank(100, 100);
    fill_rect(&mut img, 45, 45, 10, 10);

    let config = PipelineConfig {
        min_ink_area: 50.0,
        ..PipelineConfig::default()
    };
    let outline = extract_from_gray(&img, &config).unwrap();
    assert!(!outline.points.is_empty());
    for p in &outline.points {
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }
}

#[test]
fn blank_image_yields_no_ink() {
    let img = blank(100, 100);
    let result = extract_from_gray(&img, &PipelineConfig::default());
    assert!(matches!(result, Err(ExtractError::NoInk)));
}

#[test]
fn skeleton_extraction_produces_unit_coordinates() {
    let mut img = blank(120, 120);
    fill_rect(&mut img, 40, 40, 30, 30);

    let config = PipelineConfig {
        extractor: ExtractorKind::Skeleton,
        ..PipelineConfig::default()
    };
    let outline = extract_from_gray(&img, &config).unwrap();
    assert!(!outline.points.is_empty());
    for p in &outline.points {
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }
}

#[test]
fn diagonal_pixels_sequence_without_backtracking() {
    // Skeleton pixels of a 1-px diagonal, fed in scan order: every
    // consecutive output pair must be nearest remaining neighbors.
    let pixels: Vec<Point> = (0..40).map(|i| Point::new(f64::from(i), f64::from(i))).collect();
    let ordered = sequence::order_by_proximity(&pixels);
    assert_eq!(ordered.len(), pixels.len());
    for w in ordered.windows(2) {
        let d2 = (w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2);
        assert!((d2 - 2.0).abs() < 1e-12, "non-adjacent jump: {:?} -> {:?}", w[0], w[1]);
    }
}

#[test]
fn missing_file_is_an_image_load_error() {
    let result = extract(
        Path::new("no-such-dir/no-such-file.png"),
        &PipelineConfig::default(),
    );
    assert!(matches!(result, Err(ExtractError::ImageLoad(_))));
}

#[test]
fn font_document_written_and_readable() {
    let mut img = blank(120, 120);
    fill_rect(&mut img, 50, 50, 20, 20);
    let outline = extract_from_gray(&img, &PipelineConfig::default()).unwrap();

    let doc = font::FontDoc {
        font_name: "test_font".into(),
        glyphs: vec![font::GlyphEntry::single_stroke('A', &outline.points)],
    };

    let path = std::env::temp_dir().join("inktrace-pipeline-test-output.json");
    font::write(&doc, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["fontName"], "test_font");
    assert_eq!(value["glyphs"][0]["char"], "A");
    let stroke = value["glyphs"][0]["strokes"][0].as_array().unwrap();
    assert!(!stroke.is_empty());
    for point in stroke {
        let xy = point.as_array().unwrap();
        let (x, y) = (xy[0].as_f64().unwrap(), xy[1].as_f64().unwrap());
        assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
    }
}
