use std::path::Path;

use image::RgbaImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

use crate::error::Result;
use crate::io::image_io::SourceImage;
use crate::layout::TileLayout;
use crate::units::mm_to_pt;

const IMAGE_RESOURCE: &str = "Im0";

/// Build a one-page PDF whose MediaBox is the physical page size.
///
/// The image is embedded once and painted once per tile, so the file stays
/// small regardless of the tile count.
pub fn build_sheet_pdf(layout: &TileLayout, source: &SourceImage) -> Result<Document> {
    let mut doc = Document::with_version("1.5");

    let page_w = mm_to_pt(layout.page_width_mm) as f32;
    let page_h = mm_to_pt(layout.page_height_mm) as f32;
    let tile_w = mm_to_pt(layout.tile_width_mm) as f32;
    let tile_h = mm_to_pt(layout.tile_height_mm) as f32;

    let (img_w, img_h) = source.pixels.dimensions();
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => img_w as i64,
            "Height" => img_h as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        flatten_on_white(&source.pixels),
    ));

    let mut operations = vec![
        Operation::new("q", vec![]),
        Operation::new(
            "re",
            vec![0.0f32.into(), 0.0f32.into(), page_w.into(), page_h.into()],
        ),
        Operation::new("W", vec![]),
        Operation::new("n", vec![]),
    ];
    for (x_mm, y_mm) in layout.tile_origins_mm() {
        // PDF user space grows upwards from the bottom-left corner.
        let x = mm_to_pt(x_mm) as f32;
        let y = page_h - mm_to_pt(y_mm) as f32 - tile_h;
        operations.push(Operation::new("q", vec![]));
        operations.push(Operation::new(
            "cm",
            vec![
                tile_w.into(),
                0.0f32.into(),
                0.0f32.into(),
                tile_h.into(),
                x.into(),
                y.into(),
            ],
        ));
        operations.push(Operation::new(
            "Do",
            vec![Object::Name(IMAGE_RESOURCE.as_bytes().to_vec())],
        ));
        operations.push(Operation::new("Q", vec![]));
    }
    operations.push(Operation::new("Q", vec![]));

    debug!("PDF content has {} operations", operations.len());

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), page_w.into(), page_h.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_RESOURCE => image_id,
            },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

pub fn write_sheet_pdf(layout: &TileLayout, source: &SourceImage, path: &Path) -> Result<()> {
    let mut doc = build_sheet_pdf(layout, source)?;
    doc.save(path)?;
    Ok(())
}

/// DeviceRGB samples with alpha composited over white paper.
fn flatten_on_white(pixels: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.as_raw().len() / 4 * 3);
    for pixel in pixels.pixels() {
        let alpha = pixel[3] as u32;
        for channel in &pixel.0[..3] {
            let value = (*channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(value as u8);
        }
    }
    rgb
}
