use approx::assert_relative_eq;
use image::{Rgba, RgbaImage};
use lopdf::Document;
use std::path::Path;

use printtools_core::error::PrintToolsError;
use printtools_core::io::image_io::SourceImage;
use printtools_core::layout::{compute_layout, TileLayout};
use printtools_core::paper::{PaperConfig, PaperPreset};
use printtools_core::render::pdf::build_sheet_pdf;
use printtools_core::render::raster::render_sheet;
use printtools_core::render::{save_sheet, SheetFormat};
use printtools_core::tile::TileConfig;

fn red_source() -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))).unwrap()
}

/// A5 portrait, 10 mm margin, 50 mm tiles: 2 columns by 3 rows.
fn a5_layout() -> TileLayout {
    let paper = PaperConfig {
        preset: PaperPreset::A5,
        ..Default::default()
    };
    compute_layout(&paper, &TileConfig::default(), None)
}

fn is_red(pixel: &Rgba<u8>) -> bool {
    pixel[0] > 250 && pixel[1] < 5 && pixel[2] < 5
}

fn is_white(pixel: &Rgba<u8>) -> bool {
    pixel.0 == [255, 255, 255, 255]
}

// ---------------------------------------------------------------------------
// Raster
// ---------------------------------------------------------------------------

#[test]
fn test_raster_page_size_matches_paper() {
    let layout = a5_layout();
    assert_eq!((layout.columns, layout.rows), (2, 3));

    // 254 dpi is exactly 10 px per mm.
    let sheet = render_sheet(&layout, &red_source(), 254).unwrap();
    assert_eq!(sheet.dimensions(), (1480, 2100));
}

#[test]
fn test_raster_places_tiles_inside_margin() {
    let sheet = render_sheet(&a5_layout(), &red_source(), 254).unwrap();

    assert!(is_red(sheet.get_pixel(150, 150)));
    assert!(is_red(sheet.get_pixel(1050, 1550)));

    // Margin.
    assert!(is_white(sheet.get_pixel(50, 50)));
    // Right of the last column (tiles end at x = 1100).
    assert!(is_white(sheet.get_pixel(1200, 150)));
    // Below the last row (tiles end at y = 1600).
    assert!(is_white(sheet.get_pixel(150, 2050)));
}

#[test]
fn test_raster_spacing_leaves_gap() {
    let paper = PaperConfig {
        preset: PaperPreset::A5,
        ..Default::default()
    };
    let tile = TileConfig {
        spacing_mm: 10.0,
        ..Default::default()
    };
    let layout = compute_layout(&paper, &tile, None);
    let sheet = render_sheet(&layout, &red_source(), 254).unwrap();

    // First tile spans 100..600, the gap 600..700, the second tile 700..1200.
    assert!(is_white(sheet.get_pixel(650, 150)));
    assert!(is_red(sheet.get_pixel(750, 150)));
}

#[test]
fn test_raster_refuses_huge_sheet() {
    let result = render_sheet(&a5_layout(), &red_source(), 100_000);
    assert!(matches!(result, Err(PrintToolsError::SheetTooLarge { .. })));
}

// ---------------------------------------------------------------------------
// PDF
// ---------------------------------------------------------------------------

#[test]
fn test_pdf_media_box_is_physical_size() {
    let mut doc = build_sheet_pdf(&a5_layout(), &red_source()).unwrap();
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = media_box[2].as_float().unwrap();
    let height = media_box[3].as_float().unwrap();
    assert_relative_eq!(width, 419.53, epsilon = 0.01);
    assert_relative_eq!(height, 595.28, epsilon = 0.01);
}

#[test]
fn test_pdf_paints_image_once_per_tile() {
    let layout = a5_layout();
    let doc = build_sheet_pdf(&layout, &red_source()).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let content = doc.get_and_decode_page_content(page_id).unwrap();
    let draws = content
        .operations
        .iter()
        .filter(|op| op.operator == "Do")
        .count();
    assert_eq!(draws, layout.total());
}

// ---------------------------------------------------------------------------
// Format selection
// ---------------------------------------------------------------------------

#[test]
fn test_sheet_format_from_extension() {
    assert_eq!(SheetFormat::from_path(Path::new("out.pdf")), SheetFormat::Pdf);
    assert_eq!(SheetFormat::from_path(Path::new("OUT.PDF")), SheetFormat::Pdf);
    assert_eq!(SheetFormat::from_path(Path::new("out.png")), SheetFormat::Png);
    assert_eq!(SheetFormat::from_path(Path::new("out")), SheetFormat::Png);
}

#[test]
fn test_save_sheet_writes_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let layout = a5_layout();
    let source = red_source();

    let png = dir.path().join("sheet.png");
    assert_eq!(save_sheet(&layout, &source, &png, 72).unwrap(), SheetFormat::Png);
    let reloaded = image::open(&png).unwrap();
    assert_eq!(reloaded.width(), 420);

    let pdf = dir.path().join("sheet.pdf");
    assert_eq!(save_sheet(&layout, &source, &pdf, 72).unwrap(), SheetFormat::Pdf);
    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
